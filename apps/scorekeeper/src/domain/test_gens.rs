// Proptest generators for scoring types.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::domain::catalogue::ScoreCatalogue;
use crate::domain::settlement::{SettlementRequest, TileSource};
use crate::domain::state::{GameState, PlayerId, Seat};

/// Generate a seat index
pub fn seat() -> impl Strategy<Value = Seat> {
    0u8..4
}

/// Generate an optional dealer seat
pub fn dealer() -> impl Strategy<Value = Option<Seat>> {
    prop_oneof![Just(None), seat().prop_map(Some)]
}

/// Generate a non-empty set of canonical pattern names
pub fn pattern_names() -> impl Strategy<Value = BTreeSet<String>> {
    let names: Vec<String> = ScoreCatalogue::zung_jung()
        .patterns()
        .iter()
        .map(|p| p.name.clone())
        .collect();
    proptest::sample::subsequence(names, 1..=4).prop_map(|v| v.into_iter().collect())
}

/// Generate any subset of canonical bonus names
pub fn bonus_names() -> impl Strategy<Value = BTreeSet<String>> {
    let names: Vec<String> = ScoreCatalogue::zung_jung()
        .bonuses()
        .iter()
        .map(|b| b.name.clone())
        .collect();
    proptest::sample::subsequence(names.clone(), 0..=names.len())
        .prop_map(|v| v.into_iter().collect())
}

/// Generate a (winner seat, discarder seat) pair with distinct seats
pub fn winner_and_discarder() -> impl Strategy<Value = (Seat, Seat)> {
    (seat(), 1u8..4).prop_map(|(winner, step)| (winner, (winner + step) % 4))
}

/// Player id seated at `seat` in a default game
pub fn id_at(state: &GameState, seat: Seat) -> PlayerId {
    state.players[seat as usize].id
}

/// Generate a valid request against a default game, plus winner and discarder seats
pub fn request() -> impl Strategy<Value = (SettlementRequest, Seat, Option<Seat>)> {
    (
        pattern_names(),
        bonus_names(),
        winner_and_discarder(),
        any::<bool>(),
    )
        .prop_map(|(patterns, bonuses, (winner, discarder), self_draw)| {
            let state = GameState::new();
            let discarder = (!self_draw).then_some(discarder);
            let source = match discarder {
                Some(seat) => TileSource::Discard(id_at(&state, seat)),
                None => TileSource::SelfDraw,
            };
            let request = SettlementRequest {
                winner: id_at(&state, winner),
                patterns,
                bonuses,
                source,
            };
            (request, winner, discarder)
        })
}
