//! Configuration Tests
//!
//! Environment and file sources for `HadesConfig`. Every test goes through
//! `temp_env` so variables never leak between tests.

use crate::config::{
    HadesConfig, LogFormat, CONFIG_PATH_VAR, LOG_FILTER_VAR, LOG_FORMAT_VAR, NAME_VAR,
    THINK_DELAY_MAX_VAR, THINK_DELAY_MIN_VAR,
};
use crate::error::AppError;
use std::io::Write;
use tempfile::NamedTempFile;

const ALL_VARS: [&str; 6] = [
    CONFIG_PATH_VAR,
    NAME_VAR,
    THINK_DELAY_MIN_VAR,
    THINK_DELAY_MAX_VAR,
    LOG_FORMAT_VAR,
    LOG_FILTER_VAR,
];

/// Run `f` with all Hades variables unset except `vars`
fn with_hades_env<F, R>(vars: Vec<(&str, &str)>, f: F) -> R
where
    F: FnOnce() -> R,
{
    let kvs: Vec<(&str, Option<&str>)> = ALL_VARS
        .iter()
        .map(|k| {
            let value = vars.iter().find(|(name, _)| name == k).map(|(_, v)| *v);
            (*k, value)
        })
        .collect();

    temp_env::with_vars(kvs, f)
}

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write temp config");
    file
}

#[cfg(test)]
mod env_tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = with_hades_env(vec![], HadesConfig::load).unwrap();
        assert_eq!(config, HadesConfig::default());
    }

    #[test]
    fn test_env_overrides() {
        let config = with_hades_env(
            vec![
                (NAME_VAR, "Perséfone"),
                (THINK_DELAY_MIN_VAR, "0"),
                (THINK_DELAY_MAX_VAR, " 250 "),
                (LOG_FORMAT_VAR, "json"),
                (LOG_FILTER_VAR, "hades_core=debug"),
            ],
            HadesConfig::load,
        )
        .unwrap();

        assert_eq!(config.name, "Perséfone");
        assert_eq!(config.think_delay_min_ms, 0);
        assert_eq!(config.think_delay_max_ms, 250);
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.log_filter, "hades_core=debug");
    }

    #[test]
    fn test_unparsable_number() {
        let result = with_hades_env(vec![(THINK_DELAY_MIN_VAR, "rápido")], HadesConfig::load);

        match result {
            Err(AppError::Config(msg)) => assert!(msg.contains(THINK_DELAY_MIN_VAR)),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_log_format() {
        let result = with_hades_env(vec![(LOG_FORMAT_VAR, "xml")], HadesConfig::load);
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_inverted_window_fails_validation() {
        let result = with_hades_env(
            vec![(THINK_DELAY_MIN_VAR, "900"), (THINK_DELAY_MAX_VAR, "100")],
            HadesConfig::load,
        );
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_delay_above_limit_fails_validation() {
        let result = with_hades_env(vec![(THINK_DELAY_MAX_VAR, "60000")], HadesConfig::load);
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}

#[cfg(test)]
mod file_tests {
    use super::*;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let file = write_config(r#"{ "name": "Hades Dev", "log_format": "json" }"#);
        let config = HadesConfig::from_file(file.path()).unwrap();

        assert_eq!(config.name, "Hades Dev");
        assert_eq!(config.log_format, LogFormat::Json);
        assert_eq!(config.think_delay_min_ms, 800);
        assert_eq!(config.think_delay_max_ms, 1600);
    }

    #[test]
    fn test_env_wins_over_file() {
        let file = write_config(r#"{ "name": "Desde archivo", "think_delay_max_ms": 3000 }"#);
        let path = file.path().to_str().unwrap().to_string();

        let config = with_hades_env(
            vec![(CONFIG_PATH_VAR, path.as_str()), (NAME_VAR, "Desde entorno")],
            HadesConfig::load,
        )
        .unwrap();

        assert_eq!(config.name, "Desde entorno");
        assert_eq!(config.think_delay_max_ms, 3000);
    }

    #[test]
    fn test_malformed_file() {
        let file = write_config("{ name: ");
        assert!(matches!(
            HadesConfig::from_file(file.path()),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("hades.json");

        assert!(matches!(
            HadesConfig::from_file(&missing),
            Err(AppError::Io(_))
        ));
    }
}
