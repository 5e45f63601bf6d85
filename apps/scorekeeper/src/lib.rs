#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::{AppConfig, LogFormat};
pub use domain::{
    seat_wind, settle, Action, GameState, HandSelection, ScoreCatalogue, ScoreSheet,
    SettlementRequest, SettlementResult, TileSource, Wind,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use services::replay::{replay, GameScript};
pub use services::score_card::ScoreCardService;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    scorekeeper_test_support::logging::init();
}
