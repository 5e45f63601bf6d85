//! Domain layer: pure scoring logic types and helpers.

pub mod catalogue;
pub mod rules;
pub mod score_sheet;
pub mod selection;
pub mod session;
pub mod settlement;
pub mod state;
pub mod winds;

#[cfg(test)]
mod test_gens;
#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_props_settlement;
#[cfg(test)]
mod tests_session;

// Re-exports for ergonomics
pub use catalogue::{Bonus, Category, Pattern, ScoreCatalogue, UnknownBonusPolicy};
pub use score_sheet::ScoreSheet;
pub use selection::HandSelection;
pub use session::{apply_action, Action};
pub use settlement::{settle, HandValue, Payout, SettlementRequest, SettlementResult, TileSource};
pub use state::{GameState, Player, PlayerId, Round, Seat};
pub use winds::{seat_wind, seat_winds, Wind};
