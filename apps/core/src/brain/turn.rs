//! Turn - Output structure for one exchange.
//!
//! A turn is never stored; it only carries the resolved classification and
//! response back to the caller.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::intent::{Category, Classification, SubTopic};

/// One input/response exchange
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    /// Unique identifier
    pub id: Uuid,

    /// Input as classified (trimmed by `Responder::handle`)
    pub input: String,

    /// Resolved category and sub-topic
    pub classification: Classification,

    /// Selected response text
    pub response: String,

    /// Classification + selection time in microseconds
    pub processing_time_us: u64,

    /// When the response was produced
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    pub fn new(input: String, classification: Classification, response: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            input,
            classification,
            response,
            processing_time_us: 0,
            timestamp: Utc::now(),
        }
    }

    pub fn category(&self) -> Category {
        self.classification.category
    }

    pub fn topic(&self) -> Option<SubTopic> {
        self.classification.topic
    }

    /// Get a summary for logging
    pub fn summary(&self) -> String {
        format!(
            "Category: {}, Topic: {}, Matched: {}, Chars: {}, Time: {}us",
            self.classification.category,
            self.classification
                .topic
                .map(|t| format!("{:?}", t))
                .unwrap_or_else(|| "-".to_string()),
            self.classification.matched.as_deref().unwrap_or("-"),
            self.input.chars().count(),
            self.processing_time_us
        )
    }
}
