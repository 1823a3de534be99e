//! # Hades Core
//!
//! Rule-based software-development assistant. Free text goes in, one
//! pre-authored Spanish response comes out; see [`brain`] for the
//! classification rules.

pub mod brain;
pub mod config;
pub mod error;
pub mod logging;
pub mod persona;

#[cfg(test)]
mod tests;

use std::sync::LazyLock;

use brain::Responder;

pub use error::AppError;

static DEFAULT_RESPONDER: LazyLock<Responder> = LazyLock::new(Responder::new);

/// Respond to a message with the default vocabulary and templates.
/// Never fails, never returns an empty string.
pub fn respond(text: &str) -> String {
    DEFAULT_RESPONDER.respond(text)
}

/// Whether the text mentions any software-development keyword
pub fn is_on_topic(text: &str) -> bool {
    DEFAULT_RESPONDER.is_on_topic(text)
}
