//! Test Module
//!
//! Test suite for the Hades core.
//!
//! ## Test Categories
//! - `brain_tests`: Topic filter, rule table and sub-topic dispatch
//! - `responder_tests`: Response selection, randomness and robustness
//! - `config_tests`: Environment and file based configuration

pub mod config_tests;
