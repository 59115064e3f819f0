//! Test module for determinism and integration tests.
//!
//! Per-module unit tests live beside the code they exercise; this module
//! holds the tests that cut across the whole engine:
//! - **Determinism tests**: same seed, same transcript
//! - **Integration tests**: full encounter scenarios against the numeric
//!   display contract
//! - **Helper functions**: scripted rollers and party factories

mod helpers;
mod integration;

// Re-export for convenience
pub use helpers::*;
