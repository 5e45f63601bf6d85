//! Round settlement: turns a declared hand into per-seat score deltas.
//!
//! `settle` is a pure function of the catalogue, the request and a snapshot
//! of the game state. `session::apply_settlement` settles and records the
//! result in one step.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::catalogue::{ScoreCatalogue, UnknownBonusPolicy};
use crate::domain::rules::{
    discarder_share, self_draw_share, MAX_HAND_VALUE, PAR_SCORE, PLAYERS,
};
use crate::domain::state::{next_seat, GameState, PlayerId, Seat};
use crate::errors::domain::DomainError;

/// Where the winning tile came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TileSource {
    SelfDraw,
    Discard(PlayerId),
}

/// A declared winning hand, as submitted by the hand form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRequest {
    pub winner: PlayerId,
    /// Pattern names or rulebook indexes.
    pub patterns: BTreeSet<String>,
    #[serde(default)]
    pub bonuses: BTreeSet<String>,
    pub source: TileSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HandValue {
    pub base: u32,
    pub bonus: u32,
}

impl HandValue {
    pub fn total(&self) -> u32 {
        self.base + self.bonus
    }
}

/// How the losers split the bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum Payout {
    /// Self-draw: every loser pays `share` (rounded up).
    SelfDraw { share: u32 },
    /// Discard at or below par: every loser pays the hand value.
    Even { share: u32 },
    /// Discard above par: the others pay par, the discarder pays the rest.
    Capped { discarder: Seat, discarder_pays: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettlementResult {
    pub winner: Seat,
    pub hand_value: HandValue,
    pub payout: Payout,
    /// Index-aligned with the seats; always sums to zero. On a self-draw the
    /// winner collects up to 2 points more than the hand value.
    pub deltas: [i32; PLAYERS],
    /// Dealer after this round; stays None while no dealer is set.
    pub next_dealer: Option<Seat>,
}

/// Base and bonus points of the request.
///
/// Keys are counted once per pattern or bonus they resolve to, so a name,
/// its rulebook index and a padded spelling of either add up to one entry.
pub fn hand_value(
    catalogue: &ScoreCatalogue,
    request: &SettlementRequest,
) -> Result<HandValue, DomainError> {
    if request.patterns.is_empty() {
        return Err(DomainError::EmptyHandSelection);
    }
    if catalogue.unknown_bonus_policy() == UnknownBonusPolicy::Reject {
        if let Some(unknown) = request.bonuses.iter().find(|b| catalogue.bonus(b).is_none()) {
            return Err(DomainError::UnknownBonus(unknown.clone()));
        }
    }

    let base = distinct_points(
        request
            .patterns
            .iter()
            .map(|k| (catalogue.pattern_key(k), catalogue.pattern_value(k))),
    );
    let bonus = distinct_points(
        request
            .bonuses
            .iter()
            .map(|k| (catalogue.bonus_key(k), catalogue.bonus_value(k))),
    );

    let total = base + bonus;
    if total > u64::from(MAX_HAND_VALUE) {
        return Err(DomainError::HandValueTooLarge(total));
    }
    // Both parts fit: their sum is at most MAX_HAND_VALUE.
    Ok(HandValue {
        base: base as u32,
        bonus: bonus as u32,
    })
}

fn distinct_points<'a>(entries: impl Iterator<Item = (&'a str, u32)>) -> u64 {
    let mut seen = BTreeSet::new();
    entries
        .filter(|(key, _)| seen.insert(*key))
        .map(|(_, points)| u64::from(points))
        .sum()
}

/// Settle one winning hand against `state`.
///
/// All-or-nothing: on error nothing has been computed that the caller
/// could partially apply.
pub fn settle(
    catalogue: &ScoreCatalogue,
    request: &SettlementRequest,
    state: &GameState,
) -> Result<SettlementResult, DomainError> {
    let value = hand_value(catalogue, request)?;

    let winner = state
        .seat_of(request.winner)
        .ok_or(DomainError::InvalidWinner(request.winner))?;

    let discarder = match request.source {
        TileSource::SelfDraw => None,
        TileSource::Discard(id) => {
            let seat = state.seat_of(id).ok_or_else(|| {
                DomainError::invalid_tile_source(format!("player {id} is not seated"))
            })?;
            if seat == winner {
                return Err(DomainError::invalid_tile_source(
                    "winner cannot claim their own discard",
                ));
            }
            Some(seat)
        }
    };

    let payout = payout_for(value.total(), discarder);
    let deltas = distribute(winner, payout);
    let next_dealer = state.dealer.map(next_seat);

    debug!(
        winner,
        base = value.base,
        bonus = value.bonus,
        ?payout,
        ?deltas,
        "Settled hand"
    );

    Ok(SettlementResult {
        winner,
        hand_value: value,
        payout,
        deltas,
        next_dealer,
    })
}

/// Payment rule for a hand of `total` points, at most `MAX_HAND_VALUE`.
pub fn payout_for(total: u32, discarder: Option<Seat>) -> Payout {
    match discarder {
        None => Payout::SelfDraw {
            share: self_draw_share(total),
        },
        Some(_) if total <= PAR_SCORE => Payout::Even { share: total },
        Some(discarder) => Payout::Capped {
            discarder,
            discarder_pays: discarder_share(total),
        },
    }
}

/// Per-seat deltas for `payout`; the winner collects every payment.
pub fn distribute(winner: Seat, payout: Payout) -> [i32; PLAYERS] {
    let mut deltas = [0i32; PLAYERS];
    for (seat, delta) in deltas.iter_mut().enumerate() {
        let seat = seat as Seat;
        if seat == winner {
            continue;
        }
        let pays = match payout {
            Payout::SelfDraw { share } | Payout::Even { share } => share,
            Payout::Capped {
                discarder,
                discarder_pays,
            } => {
                if seat == discarder {
                    discarder_pays
                } else {
                    PAR_SCORE
                }
            }
        };
        // pays <= 3 * MAX_HAND_VALUE
        *delta = -(pays as i32);
    }
    deltas[winner as usize] = -deltas.iter().sum::<i32>();
    deltas
}
