use std::io;
use thiserror::Error;

/// Application-wide error type.
///
/// The brain itself never fails; these errors come from the input gate,
/// configuration loading and the interactive shell.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents data validation errors (e.g., empty message, out-of-range setting).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., unparsable environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AppError::Validation("mensaje vacío".to_string());
        assert_eq!(err.to_string(), "Validation error: mensaje vacío");

        let err = AppError::Config("HADES_LOG_FORMAT".to_string());
        assert_eq!(err.to_string(), "Configuration error: HADES_LOG_FORMAT");
    }

    #[test]
    fn test_from_io_error() {
        let err = AppError::from(io::Error::new(io::ErrorKind::NotFound, "missing"));
        match err {
            AppError::Io(e) => assert_eq!(e.kind(), io::ErrorKind::NotFound),
            other => panic!("Expected Io, got {:?}", other),
        }
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(AppError::from(json_err), AppError::Config(_)));
    }
}
