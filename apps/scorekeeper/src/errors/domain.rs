//! Domain-level error type for settlement and score-card edits.
//!
//! Every variant is a caller-input error. Operations that return one
//! leave the game state exactly as it was.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

use crate::domain::rules::MAX_HAND_VALUE;
use crate::domain::state::{PlayerId, Seat};
use crate::errors::error_code::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Winner id does not belong to any seat.
    InvalidWinner(PlayerId),
    /// No hand pattern was selected.
    EmptyHandSelection,
    /// Tile source is neither self-draw nor a seated non-winner.
    InvalidTileSource(String),
    /// Bonus key missing from the catalogue while unknown bonuses are rejected.
    UnknownBonus(String),
    /// Two selected patterns exclude each other.
    ConflictingPatterns(String, String),
    /// Base plus bonus points above `MAX_HAND_VALUE`.
    HandValueTooLarge(u64),
    /// Seat index outside 0..=3.
    InvalidSeat(Seat),
    /// Round index past the end of the history.
    RoundOutOfRange(usize),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InvalidWinner(id) => write!(f, "winner {id} is not seated"),
            DomainError::EmptyHandSelection => write!(f, "no hand pattern selected"),
            DomainError::InvalidTileSource(s) => write!(f, "invalid tile source: {s}"),
            DomainError::UnknownBonus(b) => write!(f, "unknown bonus: {b}"),
            DomainError::ConflictingPatterns(a, b) => {
                write!(f, "patterns '{a}' and '{b}' cannot be combined")
            }
            DomainError::HandValueTooLarge(v) => {
                write!(f, "hand value {v} exceeds {MAX_HAND_VALUE}")
            }
            DomainError::InvalidSeat(s) => write!(f, "seat {s} out of range"),
            DomainError::RoundOutOfRange(r) => write!(f, "round {r} out of range"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn invalid_tile_source(detail: impl Into<String>) -> Self {
        Self::InvalidTileSource(detail.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidWinner(_) => ErrorCode::InvalidWinner,
            DomainError::EmptyHandSelection => ErrorCode::EmptyHandSelection,
            DomainError::InvalidTileSource(_) => ErrorCode::InvalidTileSource,
            DomainError::UnknownBonus(_) => ErrorCode::UnknownBonus,
            DomainError::ConflictingPatterns(..) => ErrorCode::ConflictingPatterns,
            DomainError::HandValueTooLarge(_) => ErrorCode::HandValueTooLarge,
            DomainError::InvalidSeat(_) => ErrorCode::InvalidSeat,
            DomainError::RoundOutOfRange(_) => ErrorCode::RoundOutOfRange,
        }
    }
}
