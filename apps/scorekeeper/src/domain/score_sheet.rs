//! Read-only view of the score card for display.

use std::fmt;

use serde::Serialize;

use crate::domain::rules::PLAYERS;
use crate::domain::state::{GameState, PlayerId, Seat};
use crate::domain::winds::{seat_wind, Wind};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatWindView {
    pub label: &'static str,
    pub symbol: char,
}

impl From<Wind> for SeatWindView {
    fn from(wind: Wind) -> Self {
        Self {
            label: wind.label(),
            symbol: wind.symbol(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerLine {
    pub seat: Seat,
    pub id: PlayerId,
    pub name: String,
    pub is_dealer: bool,
    /// None until a dealer has been set.
    pub wind: Option<SeatWindView>,
    pub total: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSheet {
    pub players: Vec<PlayerLine>,
    pub rounds: Vec<[i32; PLAYERS]>,
}

impl ScoreSheet {
    pub fn build(state: &GameState) -> Self {
        let totals = state.totals();
        let players = state
            .players
            .iter()
            .enumerate()
            .map(|(idx, player)| {
                let seat = idx as Seat;
                PlayerLine {
                    seat,
                    id: player.id,
                    name: player.name.clone(),
                    is_dealer: state.dealer == Some(seat),
                    wind: seat_wind(seat, state.dealer).map(SeatWindView::from),
                    total: totals[idx],
                }
            })
            .collect();
        Self {
            players,
            rounds: state.rounds.iter().map(|r| r.deltas).collect(),
        }
    }
}

/// One line per player: wind, name, each round, then the total.
impl fmt::Display for ScoreSheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<4}{:<16}", "", "Player")?;
        for round_no in 1..=self.rounds.len() {
            write!(f, "{:>7}", format!("R{round_no}"))?;
        }
        writeln!(f, "{:>8}", "Total")?;

        for line in &self.players {
            let wind = line
                .wind
                .as_ref()
                .map(|w| w.symbol.to_string())
                .unwrap_or_else(|| "-".to_string());
            let marker = if line.is_dealer { "*" } else { " " };
            write!(f, "{wind}{marker:<3}{:<16}", line.name)?;
            for round in &self.rounds {
                write!(f, "{:>7}", round[line.seat as usize])?;
            }
            writeln!(f, "{:>8}", line.total)?;
        }
        Ok(())
    }
}
