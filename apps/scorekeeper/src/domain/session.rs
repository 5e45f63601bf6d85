//! Score-card reducers.
//!
//! Each function takes the current state by reference and returns the next
//! state, leaving the input untouched. Failed operations return an error and
//! no state.

use serde::{Deserialize, Serialize};

use crate::domain::catalogue::ScoreCatalogue;
use crate::domain::settlement::{settle, SettlementRequest, SettlementResult};
use crate::domain::state::{require_seat, GameState, Round, Seat};
use crate::errors::domain::DomainError;

/// Start the dealer rotation at `seat` (Unset → AssignedTo(seat)).
pub fn set_dealer(state: &GameState, seat: Seat) -> Result<GameState, DomainError> {
    let seat = require_seat(seat)?;
    let mut next = state.clone();
    next.dealer = Some(seat);
    Ok(next)
}

/// Append an empty round. The dealer does not move.
pub fn add_round(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.rounds.push(Round::empty());
    next
}

/// Clear rounds and dealer; players keep their ids and names.
pub fn reset_game(state: &GameState) -> GameState {
    GameState {
        players: state.players.clone(),
        rounds: Vec::new(),
        dealer: None,
    }
}

pub fn rename_player(
    state: &GameState,
    seat: Seat,
    name: impl Into<String>,
) -> Result<GameState, DomainError> {
    let seat = require_seat(seat)?;
    let mut next = state.clone();
    next.players[seat as usize].name = name.into();
    Ok(next)
}

/// Manual correction: overwrite one cell, bypassing settlement.
pub fn apply_manual_edit(
    state: &GameState,
    round_index: usize,
    seat: Seat,
    value: i32,
) -> Result<GameState, DomainError> {
    let seat = require_seat(seat)?;
    if round_index >= state.rounds.len() {
        return Err(DomainError::RoundOutOfRange(round_index));
    }
    let mut next = state.clone();
    next.rounds[round_index].deltas[seat as usize] = value;
    Ok(next)
}

/// Settle `request` against `state` and record it: fill the pending round
/// if there is one, otherwise append a new round; then hand the deal to the
/// next seat.
pub fn apply_settlement(
    catalogue: &ScoreCatalogue,
    state: &GameState,
    request: &SettlementRequest,
) -> Result<(GameState, SettlementResult), DomainError> {
    let result = settle(catalogue, request, state)?;
    let mut next = state.clone();
    let round = Round::from_deltas(result.deltas);
    match next.pending_round() {
        Some(idx) => next.rounds[idx] = round,
        None => next.rounds.push(round),
    }
    next.dealer = result.next_dealer;
    Ok((next, result))
}

/// One user action on the score card, as recorded in a game script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    SetDealer {
        seat: Seat,
    },
    AddRound,
    Reset,
    EditScore {
        round: usize,
        seat: Seat,
        value: i32,
    },
    Rename {
        seat: Seat,
        name: String,
    },
    Settle(SettlementRequest),
}

/// Apply one action; returns the next state and, for `Settle`, its result.
pub fn apply_action(
    catalogue: &ScoreCatalogue,
    state: &GameState,
    action: &Action,
) -> Result<(GameState, Option<SettlementResult>), DomainError> {
    let next = match action {
        Action::SetDealer { seat } => set_dealer(state, *seat)?,
        Action::AddRound => add_round(state),
        Action::Reset => reset_game(state),
        Action::EditScore { round, seat, value } => {
            apply_manual_edit(state, *round, *seat, *value)?
        }
        Action::Rename { seat, name } => rename_player(state, *seat, name.clone())?,
        Action::Settle(request) => {
            let (next, result) = apply_settlement(catalogue, state, request)?;
            return Ok((next, Some(result)));
        }
    };
    Ok((next, None))
}
