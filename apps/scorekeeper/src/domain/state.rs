use serde::{Deserialize, Serialize};

use crate::domain::rules::PLAYERS;
use crate::errors::domain::DomainError;

/// Stable player identity, assigned at game creation.
pub type PlayerId = u32;
pub type Seat = u8; // 0..=3, index into `GameState::players`

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    /// Display only; never used to resolve a player.
    pub name: String,
}

/// Signed score deltas for one round, index-aligned with the seats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Round {
    pub deltas: [i32; PLAYERS],
}

impl Round {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_deltas(deltas: [i32; PLAYERS]) -> Self {
        Self { deltas }
    }

    /// A round with every delta at zero is still waiting for a result.
    pub fn is_pending(&self) -> bool {
        self.deltas.iter().all(|d| *d == 0)
    }
}

/// Entire score card, sufficient for pure domain operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Seating order; fixed once the game starts.
    pub players: [Player; PLAYERS],
    /// Append-only round history.
    pub rounds: Vec<Round>,
    /// Seat currently holding East.
    /// - None until a dealer is set explicitly, and again after a reset.
    pub dealer: Option<Seat>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Four default players ("Player 1".."Player 4"), no rounds, no dealer.
    pub fn new() -> Self {
        Self::with_names(default_player_names())
    }

    pub fn with_names(names: [String; PLAYERS]) -> Self {
        let mut seat_id: PlayerId = 0;
        let players = names.map(|name| {
            seat_id += 1;
            Player { id: seat_id, name }
        });
        Self {
            players,
            rounds: Vec::new(),
            dealer: None,
        }
    }

    /// Seat of the player with the given id.
    pub fn seat_of(&self, id: PlayerId) -> Option<Seat> {
        self.players
            .iter()
            .position(|p| p.id == id)
            .map(|idx| idx as Seat)
    }

    /// Index of the last round if it is still pending.
    pub fn pending_round(&self) -> Option<usize> {
        match self.rounds.last() {
            Some(round) if round.is_pending() => Some(self.rounds.len() - 1),
            _ => None,
        }
    }

    /// Running total per seat: the sum of that seat's deltas over all rounds.
    pub fn totals(&self) -> [i64; PLAYERS] {
        let mut totals = [0i64; PLAYERS];
        for round in &self.rounds {
            for (total, delta) in totals.iter_mut().zip(round.deltas) {
                *total += delta as i64;
            }
        }
        totals
    }
}

pub fn default_player_names() -> [String; PLAYERS] {
    std::array::from_fn(|idx| format!("Player {}", idx + 1))
}

/// Seat math helpers (4 fixed seats: 0..=3).
///
/// Counter-clockwise play order is positive (+1): East → South → West → North.
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

/// Returns the seat that takes the deal after `seat` (0 → 1 → 2 → 3 → 0).
#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

pub fn require_seat(seat: Seat) -> Result<Seat, DomainError> {
    if (seat as usize) < PLAYERS {
        Ok(seat)
    } else {
        Err(DomainError::InvalidSeat(seat))
    }
}
