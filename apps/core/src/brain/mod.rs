//! # Brain Module
//!
//! Rule-based analysis and response system for Hades.
//! Every answer is a pure function of the input text, the static tables
//! below and a random source.
//!
//! ## Components
//! - `keywords`: Topic relevance filter (substring vocabulary match)
//! - `intent`: Ordered rule table with sub-topic dispatch
//! - `responses`: Pre-authored response templates
//! - `turn`: Output data structure
//! - `responder`: Main orchestrator

pub mod intent;
pub mod keywords;
pub mod responder;
pub mod responses;
pub mod turn;

// Re-export main types for convenience
pub use intent::{Category, Classification, IntentClassifier, IntentRule, RuleTest, SubTopic};
pub use keywords::{KeywordSet, TopicFilter};
pub use responder::{Responder, EMPTY_INPUT_MESSAGE};
pub use responses::ResponseBank;
pub use turn::Turn;
