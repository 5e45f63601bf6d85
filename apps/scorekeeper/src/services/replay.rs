//! Replay a recorded game script through the score card service.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::{info, info_span, warn};

use crate::config::AppConfig;
use crate::domain::catalogue::ScoreCatalogue;
use crate::domain::rules::PLAYERS;
use crate::domain::selection::check_exclusions;
use crate::domain::session::Action;
use crate::domain::state::GameState;
use crate::error::AppError;
use crate::services::score_card::ScoreCardService;

/// A game as a list of actions, optionally with seat names.
///
/// ```json
/// {
///   "players": ["Ann", "Bo", "Cy", "Dee"],
///   "actions": [
///     {"action": "set_dealer", "seat": 0},
///     {"action": "settle", "winner": 2, "patterns": ["Seven Pairs"], "source": "self_draw"}
///   ]
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct GameScript {
    /// Overrides the configured seat names when present.
    #[serde(default)]
    pub players: Option<[String; PLAYERS]>,
    pub actions: Vec<Action>,
}

impl GameScript {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

/// Apply every action in order; stops at the first rejected action.
pub fn replay(
    config: &AppConfig,
    catalogue: ScoreCatalogue,
    script: &GameScript,
) -> Result<ScoreCardService, AppError> {
    let span = info_span!("replay", actions = script.actions.len());
    let _guard = span.enter();

    let mut service = ScoreCardService::from_config(config, catalogue);
    if let Some(names) = &script.players {
        let catalogue = service.catalogue().clone();
        service = ScoreCardService::new(catalogue, GameState::with_names(names.clone()));
    }

    for (index, action) in script.actions.iter().enumerate() {
        if let Action::Settle(request) = action {
            check_exclusions(service.catalogue(), request).map_err(|source| {
                warn!(index, error = %source, "Script hand rejected");
                AppError::Script { index, source }
            })?;
        }
        service
            .apply(action)
            .map_err(|source| AppError::Script { index, source })?;
    }

    info!(
        rounds = service.state().rounds.len(),
        totals = ?service.totals(),
        "Replay finished"
    );
    Ok(service)
}
