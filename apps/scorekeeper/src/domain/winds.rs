//! Seat winds relative to the current dealer.
//!
//! Always derived on demand from `GameState::dealer`; the dealer moves every
//! round, so nothing here is cached.

use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameState, Seat};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Wind {
    East,
    South,
    West,
    North,
}

impl Wind {
    /// Winds in seating order starting from the dealer.
    pub const ORDER: [Wind; PLAYERS] = [Wind::East, Wind::South, Wind::West, Wind::North];

    pub fn ordinal(self) -> u8 {
        match self {
            Wind::East => 0,
            Wind::South => 1,
            Wind::West => 2,
            Wind::North => 3,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Wind::East => "East",
            Wind::South => "South",
            Wind::West => "West",
            Wind::North => "North",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Wind::East => '東',
            Wind::South => '南',
            Wind::West => '西',
            Wind::North => '北',
        }
    }
}

/// Wind of `seat` when `dealer` holds East; None while no dealer is set.
#[inline]
pub fn seat_wind(seat: Seat, dealer: Option<Seat>) -> Option<Wind> {
    let dealer = dealer?;
    let ordinal = (seat as usize + PLAYERS - dealer as usize % PLAYERS) % PLAYERS;
    Some(Wind::ORDER[ordinal])
}

/// Winds for every seat of `state`.
pub fn seat_winds(state: &GameState) -> [Option<Wind>; PLAYERS] {
    std::array::from_fn(|seat| seat_wind(seat as Seat, state.dealer))
}
