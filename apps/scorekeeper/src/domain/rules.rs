pub const PLAYERS: usize = 4;

/// Threshold above which the discarder carries the excess of a discard win.
pub const PAR_SCORE: u32 = 25;

/// Points credited for a pattern or bonus key missing from the catalogue.
pub const UNKNOWN_ENTRY_POINTS: u32 = 5;

/// Largest point value a catalogue entry may carry.
pub const MAX_ENTRY_POINTS: u32 = 10_000;

/// Largest hand value settlement accepts; keeps `3 * H` inside `i32`.
pub const MAX_HAND_VALUE: u32 = 1_000_000;

/// Name of the sentinel pattern that excludes every other pattern.
pub const CHICKEN_HAND: &str = "Chicken Hand";

/// Amount each loser pays on a self-drawn win worth `hand_value`.
///
/// Rounds up, so the winner may collect up to 2 points more than
/// `hand_value`.
pub fn self_draw_share(hand_value: u32) -> u32 {
    hand_value.div_ceil(3)
}

/// Amount the discarder pays on a discard win worth more than par.
pub fn discarder_share(hand_value: u32) -> u32 {
    debug_assert!(hand_value > PAR_SCORE, "only defined above par");
    debug_assert!(hand_value <= MAX_HAND_VALUE, "hand value not bounded");
    hand_value * 3 - PAR_SCORE * 2
}
