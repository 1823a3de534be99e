//! Responder - Main entry point of the Brain module.
//!
//! Runs the intent classifier and picks a response from the bank. The
//! responder holds only read-only tables, so one instance can be shared
//! across threads.

use rand::Rng;
use std::time::Instant;
use tracing::{debug, warn};

use super::intent::{Classification, IntentClassifier};
use super::keywords::TopicFilter;
use super::responses::ResponseBank;
use super::turn::Turn;
use crate::error::AppError;

/// Message returned to the user when the input is empty
pub const EMPTY_INPUT_MESSAGE: &str = "Por favor, proporciona una pregunta válida.";

/// Classification + response selection engine
pub struct Responder {
    classifier: IntentClassifier,
    bank: ResponseBank,
}

impl Default for Responder {
    fn default() -> Self {
        Self::new()
    }
}

impl Responder {
    /// Create a responder with the default vocabulary and templates
    pub fn new() -> Self {
        Self {
            classifier: IntentClassifier::new(),
            bank: ResponseBank::new(),
        }
    }

    /// Create a responder whose topic gate uses a custom vocabulary
    pub fn with_topic_filter(topic_filter: TopicFilter) -> Self {
        Self {
            classifier: IntentClassifier::with_topic_filter(topic_filter),
            bank: ResponseBank::new(),
        }
    }

    pub fn classifier(&self) -> &IntentClassifier {
        &self.classifier
    }

    pub fn bank(&self) -> &ResponseBank {
        &self.bank
    }

    pub fn is_on_topic(&self, text: &str) -> bool {
        self.classifier.topic_filter().is_on_topic(text)
    }

    pub fn classify(&self, text: &str) -> Classification {
        self.classifier.classify(text)
    }

    /// Respond using the thread-local RNG. Total for every input.
    pub fn respond(&self, text: &str) -> String {
        self.respond_with(text, &mut rand::thread_rng())
    }

    /// Respond using an explicit random source
    pub fn respond_with<R>(&self, text: &str, rng: &mut R) -> String
    where
        R: Rng + ?Sized,
    {
        self.turn_with(text, rng).response
    }

    /// Classify and respond, keeping the full turn record
    pub fn turn_with<R>(&self, text: &str, rng: &mut R) -> Turn
    where
        R: Rng + ?Sized,
    {
        let start = Instant::now();

        let classification = self.classifier.classify(text);
        debug!(
            category = %classification.category,
            topic = ?classification.topic,
            matched = ?classification.matched,
            "classified input"
        );

        let response = self.bank.select(&classification, text, rng);

        let mut turn = Turn::new(text.to_string(), classification, response);
        turn.processing_time_us = start.elapsed().as_micros() as u64;
        turn
    }

    /// Input gate for interactive callers: trims the message and rejects
    /// empty input instead of answering it.
    pub fn handle(&self, text: &str) -> Result<Turn, AppError> {
        let message = text.trim();

        if message.is_empty() {
            warn!("Rejected empty message");
            return Err(AppError::Validation(EMPTY_INPUT_MESSAGE.to_string()));
        }

        let turn = self.turn_with(message, &mut rand::thread_rng());
        debug!("{}", turn.summary());
        Ok(turn)
    }
}
