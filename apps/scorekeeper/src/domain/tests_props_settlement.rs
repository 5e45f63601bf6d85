//! Property-based tests for settlement and seat-wind invariants.

use proptest::prelude::*;

use crate::domain::catalogue::ScoreCatalogue;
use crate::domain::rules::{MAX_HAND_VALUE, PAR_SCORE};
use crate::domain::session::apply_settlement;
use crate::domain::settlement::{distribute, payout_for, settle};
use crate::domain::state::GameState;
use crate::domain::winds::{seat_wind, Wind};
use crate::domain::{test_gens, test_prelude};

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Property: a discard win moves points between players without
    /// creating or destroying any.
    #[test]
    fn prop_discard_win_is_zero_sum(
        total in 1u32..=MAX_HAND_VALUE,
        (winner, discarder) in test_gens::winner_and_discarder(),
    ) {
        let deltas = distribute(winner, payout_for(total, Some(discarder)));
        prop_assert_eq!(deltas.iter().sum::<i32>(), 0);
        prop_assert_eq!(deltas[winner as usize], 3 * total as i32);
    }

    /// Property: on a discard win above par, only the discarder pays more
    /// than par.
    #[test]
    fn prop_above_par_discarder_carries_excess(
        total in (PAR_SCORE + 1)..=2000,
        (winner, discarder) in test_gens::winner_and_discarder(),
    ) {
        let deltas = distribute(winner, payout_for(total, Some(discarder)));
        for (seat, delta) in deltas.iter().enumerate() {
            let seat = seat as u8;
            if seat == winner {
                continue;
            }
            if seat == discarder {
                prop_assert_eq!(*delta, -(3 * total as i32 - 50));
            } else {
                prop_assert_eq!(*delta, -(PAR_SCORE as i32));
            }
        }
    }

    /// Property: self-draw shares round up, so the winner collects the
    /// hand value plus a surplus of 0, 1 or 2.
    #[test]
    fn prop_self_draw_surplus_is_bounded(
        total in 1u32..=2000,
        winner in test_gens::seat(),
    ) {
        let deltas = distribute(winner, payout_for(total, None));
        let share = total.div_ceil(3) as i32;
        prop_assert_eq!(deltas.iter().sum::<i32>(), 0);
        prop_assert_eq!(deltas[winner as usize], 3 * share);
        let surplus = deltas[winner as usize] - total as i32;
        prop_assert!((0..=2).contains(&surplus), "surplus {} for {}", surplus, total);
        for (seat, delta) in deltas.iter().enumerate() {
            if seat != winner as usize {
                prop_assert_eq!(*delta, -share);
            }
        }
    }

    /// Property: every successful settlement hands the deal to the next seat.
    #[test]
    fn prop_dealer_rotates_after_settlement(
        (request, _, _) in test_gens::request(),
        dealer in test_gens::seat(),
    ) {
        let cat = ScoreCatalogue::zung_jung();
        let mut state = GameState::new();
        state.dealer = Some(dealer);

        let (next, result) =
            apply_settlement(&cat, &state, &request).expect("generated requests are valid");
        prop_assert_eq!(result.next_dealer, Some((dealer + 1) % 4));

        prop_assert_eq!(next.dealer, Some((dealer + 1) % 4));
        prop_assert_eq!(next.rounds.len(), 1);
        prop_assert_eq!(next.rounds[0].deltas, result.deltas);
    }

    /// Property: settlement of any generated request is zero-sum and only
    /// the winner gains.
    #[test]
    fn prop_only_winner_gains(
        (request, winner, discarder) in test_gens::request(),
    ) {
        let cat = ScoreCatalogue::zung_jung();
        let result = settle(&cat, &request, &GameState::new()).expect("generated requests are valid");
        prop_assert_eq!(result.winner, winner);
        prop_assert_eq!(result.deltas.iter().sum::<i32>(), 0);
        for (seat, delta) in result.deltas.iter().enumerate() {
            if seat == winner as usize {
                prop_assert!(*delta > 0);
            } else {
                prop_assert!(*delta < 0);
            }
        }
        if let Some(d) = discarder {
            let max_loss = result.deltas.iter().copied().min();
            prop_assert_eq!(max_loss, Some(result.deltas[d as usize]));
        }
    }

    /// Property: the dealer is East and winds follow counter-clockwise.
    #[test]
    fn prop_wind_is_offset_from_dealer(
        seat in test_gens::seat(),
        dealer in test_gens::seat(),
    ) {
        let wind = seat_wind(seat, Some(dealer)).expect("dealer is set");
        let expected = (seat as usize + 4 - dealer as usize) % 4;
        prop_assert_eq!(wind.ordinal() as usize, expected);
        prop_assert_eq!(wind == Wind::East, seat == dealer);
    }

    /// Property: without a dealer no seat has a wind.
    #[test]
    fn prop_no_dealer_no_wind(dealer in test_gens::dealer(), seat in test_gens::seat()) {
        prop_assert_eq!(seat_wind(seat, dealer).is_some(), dealer.is_some());
    }
}
