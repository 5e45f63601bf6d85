//! Error codes surfaced by the scorekeeper CLI and service.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Settlement input
    /// Winner is not one of the seated players
    InvalidWinner,
    /// No hand pattern selected
    EmptyHandSelection,
    /// Tile source is not self-draw or a seated non-winner
    InvalidTileSource,
    /// Bonus not in the catalogue (reject policy only)
    UnknownBonus,
    /// Mutually exclusive patterns in one hand
    ConflictingPatterns,
    /// Hand worth more than settlement accepts
    HandValueTooLarge,

    // Score card edits
    /// Seat index out of range
    InvalidSeat,
    /// Round index out of range
    RoundOutOfRange,

    // Runtime
    /// Invalid configuration value
    ConfigError,
    /// Reading or writing a file failed
    IoError,
    /// Malformed JSON input
    InvalidJson,
}

impl ErrorCode {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidWinner => "INVALID_WINNER",
            Self::EmptyHandSelection => "EMPTY_HAND_SELECTION",
            Self::InvalidTileSource => "INVALID_TILE_SOURCE",
            Self::UnknownBonus => "UNKNOWN_BONUS",
            Self::ConflictingPatterns => "CONFLICTING_PATTERNS",
            Self::HandValueTooLarge => "HAND_VALUE_TOO_LARGE",
            Self::InvalidSeat => "INVALID_SEAT",
            Self::RoundOutOfRange => "ROUND_OUT_OF_RANGE",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::InvalidJson => "INVALID_JSON",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
