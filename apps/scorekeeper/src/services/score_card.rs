//! Score card service - the single writer over the pure domain reducers.
//!
//! Holds the current `GameState`, applies one action at a time, logs each
//! transition, and keeps the prior states so edits can be undone.

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::domain::catalogue::{ScoreCatalogue, UnknownBonusPolicy};
use crate::domain::rules::PLAYERS;
use crate::domain::score_sheet::ScoreSheet;
use crate::domain::session::{apply_action, apply_settlement, Action};
use crate::domain::settlement::{SettlementRequest, SettlementResult};
use crate::domain::state::{GameState, Seat};
use crate::domain::winds::{seat_wind, Wind};
use crate::errors::domain::DomainError;

#[derive(Debug)]
pub struct ScoreCardService {
    catalogue: ScoreCatalogue,
    state: GameState,
    history: Vec<GameState>,
}

impl ScoreCardService {
    pub fn new(catalogue: ScoreCatalogue, state: GameState) -> Self {
        Self {
            catalogue,
            state,
            history: Vec::new(),
        }
    }

    /// New game using the configured seat names. A `reject` policy from the
    /// config overrides the catalogue's own.
    pub fn from_config(config: &AppConfig, catalogue: ScoreCatalogue) -> Self {
        let catalogue = match config.unknown_bonus {
            UnknownBonusPolicy::Reject => {
                catalogue.with_unknown_bonus_policy(UnknownBonusPolicy::Reject)
            }
            UnknownBonusPolicy::Default => catalogue,
        };
        Self::new(catalogue, GameState::with_names(config.player_names.clone()))
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn catalogue(&self) -> &ScoreCatalogue {
        &self.catalogue
    }

    pub fn sheet(&self) -> ScoreSheet {
        ScoreSheet::build(&self.state)
    }

    pub fn totals(&self) -> [i64; PLAYERS] {
        self.state.totals()
    }

    pub fn seat_wind(&self, seat: Seat) -> Option<Wind> {
        seat_wind(seat, self.state.dealer)
    }

    /// Apply one action. On error the current state is kept as is.
    pub fn apply(&mut self, action: &Action) -> Result<Option<SettlementResult>, DomainError> {
        debug!(?action, "Applying action");

        let (next, result) =
            apply_action(&self.catalogue, &self.state, action).map_err(log_rejection)?;
        match &result {
            Some(settled) => log_settlement(settled),
            None => info!(
                action = action_name(action),
                rounds = next.rounds.len(),
                dealer = ?next.dealer,
                "Score card updated"
            ),
        }
        self.commit(next);
        Ok(result)
    }

    pub fn settle(&mut self, request: SettlementRequest) -> Result<SettlementResult, DomainError> {
        let (next, result) =
            apply_settlement(&self.catalogue, &self.state, &request).map_err(log_rejection)?;
        log_settlement(&result);
        self.commit(next);
        Ok(result)
    }

    fn commit(&mut self, next: GameState) {
        self.history.push(std::mem::replace(&mut self.state, next));
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Restore the state before the last applied action.
    pub fn undo(&mut self) -> bool {
        match self.history.pop() {
            Some(prev) => {
                self.state = prev;
                info!(rounds = self.state.rounds.len(), "Undid last action");
                true
            }
            None => false,
        }
    }
}

fn log_rejection(e: DomainError) -> DomainError {
    warn!(code = %e.code(), error = %e, "Action rejected");
    e
}

fn log_settlement(settled: &SettlementResult) {
    info!(
        winner = settled.winner,
        hand_value = settled.hand_value.total(),
        deltas = ?settled.deltas,
        next_dealer = ?settled.next_dealer,
        "Round settled"
    );
}

fn action_name(action: &Action) -> &'static str {
    match action {
        Action::SetDealer { .. } => "set_dealer",
        Action::AddRound => "add_round",
        Action::Reset => "reset",
        Action::EditScore { .. } => "edit_score",
        Action::Rename { .. } => "rename",
        Action::Settle(_) => "settle",
    }
}
