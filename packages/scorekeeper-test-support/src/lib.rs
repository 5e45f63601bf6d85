//! Scorekeeper test support utilities
//!
//! Shared logging initialization and small fixtures for integration tests.

pub mod fixtures;
pub mod logging;
