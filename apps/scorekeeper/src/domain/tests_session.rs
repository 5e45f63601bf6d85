use crate::domain::catalogue::ScoreCatalogue;
use crate::domain::session::{
    add_round, apply_action, apply_manual_edit, apply_settlement, rename_player, reset_game,
    set_dealer, Action,
};
use crate::domain::settlement::{SettlementRequest, TileSource};
use crate::domain::state::{GameState, Round};
use crate::errors::domain::DomainError;

fn chicken_self_draw(winner: u32) -> SettlementRequest {
    SettlementRequest {
        winner,
        patterns: ["Chicken Hand".to_string()].into_iter().collect(),
        bonuses: Default::default(),
        source: TileSource::SelfDraw,
    }
}

#[test]
fn set_dealer_assigns_and_validates_seat() {
    let state = GameState::new();
    let next = set_dealer(&state, 2).expect("seat in range");
    assert_eq!(next.dealer, Some(2));
    assert_eq!(state.dealer, None, "input state untouched");
    assert_eq!(set_dealer(&state, 4), Err(DomainError::InvalidSeat(4)));
}

#[test]
fn add_round_appends_pending_round_without_moving_dealer() {
    let state = set_dealer(&GameState::new(), 1).expect("seat in range");
    let next = add_round(&state);
    assert_eq!(next.rounds, vec![Round::empty()]);
    assert_eq!(next.dealer, Some(1));
    assert_eq!(next.pending_round(), Some(0));
}

#[test]
fn settlement_fills_pending_round_before_appending() {
    let cat = ScoreCatalogue::zung_jung();
    let state = add_round(&set_dealer(&GameState::new(), 0).expect("seat in range"));

    let (state, _) =
        apply_settlement(&cat, &state, &chicken_self_draw(1)).expect("valid settlement");
    assert_eq!(state.rounds.len(), 1, "pending round reused");
    assert_eq!(state.rounds[0].deltas, [3, -1, -1, -1]);
    assert_eq!(state.dealer, Some(1));

    let (state, _) =
        apply_settlement(&cat, &state, &chicken_self_draw(2)).expect("valid settlement");
    assert_eq!(state.rounds.len(), 2, "completed round kept");
    assert_eq!(state.rounds[1].deltas, [-1, 3, -1, -1]);
    assert_eq!(state.dealer, Some(2));
    assert_eq!(state.totals(), [2, 2, -2, -2]);
}

#[test]
fn settlement_rotates_from_the_state_it_is_applied_to() {
    let cat = ScoreCatalogue::zung_jung();
    let start = set_dealer(&GameState::new(), 3).expect("seat in range");
    let request = chicken_self_draw(2);

    let (after_one, first) = apply_settlement(&cat, &start, &request).expect("valid settlement");
    let (after_two, second) =
        apply_settlement(&cat, &after_one, &request).expect("valid settlement");

    assert_eq!(first.next_dealer, Some(0));
    assert_eq!(second.next_dealer, Some(1));
    assert_eq!(after_two.dealer, Some(1));
    assert_eq!(after_two.rounds.len(), 2);
}

#[test]
fn reset_keeps_players_but_clears_rounds_and_dealer() {
    let state = set_dealer(&GameState::new(), 3).expect("seat in range");
    let state = rename_player(&state, 0, "Mei").expect("seat in range");
    let state = add_round(&state);

    let reset = reset_game(&state);
    assert!(reset.rounds.is_empty());
    assert_eq!(reset.dealer, None);
    assert_eq!(reset.players, state.players);
    assert_eq!(reset.players[0].name, "Mei");
    assert_eq!(reset.players[0].id, 1);
}

#[test]
fn manual_edit_overwrites_one_cell_only() {
    let mut state = GameState::new();
    state.rounds.push(Round::from_deltas([3, -1, -1, -1]));
    state.rounds.push(Round::from_deltas([-10, 30, -10, -10]));

    let edited = apply_manual_edit(&state, 0, 1, 7).expect("cell in range");
    assert_eq!(edited.rounds[0].deltas, [3, 7, -1, -1]);
    assert_eq!(edited.rounds[1], state.rounds[1]);
    assert_eq!(edited.totals(), [-7, 37, -11, -11]);
}

#[test]
fn manual_edit_rejects_bad_indexes() {
    let state = add_round(&GameState::new());
    assert_eq!(
        apply_manual_edit(&state, 1, 0, 5),
        Err(DomainError::RoundOutOfRange(1))
    );
    assert_eq!(
        apply_manual_edit(&state, 0, 7, 5),
        Err(DomainError::InvalidSeat(7))
    );
}

#[test]
fn apply_action_returns_settlement_result() {
    let cat = ScoreCatalogue::zung_jung();
    let state = GameState::new();

    let (state, result) =
        apply_action(&cat, &state, &Action::SetDealer { seat: 0 }).expect("valid action");
    assert!(result.is_none());

    let (state, result) = apply_action(&cat, &state, &Action::Settle(chicken_self_draw(4)))
        .expect("valid action");
    assert_eq!(result.map(|r| r.deltas), Some([-1, -1, -1, 3]));
    assert_eq!(state.dealer, Some(1));
}

#[test]
fn failed_action_leaves_no_partial_state() {
    let cat = ScoreCatalogue::zung_jung();
    let state = add_round(&set_dealer(&GameState::new(), 0).expect("seat in range"));
    let before = state.clone();

    let err = apply_action(&cat, &state, &Action::Settle(chicken_self_draw(99)))
        .expect_err("unknown winner");
    assert_eq!(err, DomainError::InvalidWinner(99));
    assert_eq!(state, before);
}

#[test]
fn actions_deserialize_from_script_json() {
    let json = r#"[
        {"action": "set_dealer", "seat": 2},
        {"action": "add_round"},
        {"action": "rename", "seat": 1, "name": "Lin"},
        {"action": "edit_score", "round": 0, "seat": 3, "value": -4},
        {"action": "reset"},
        {"action": "settle", "winner": 2, "patterns": ["Seven Pairs"], "source": {"discard": 1}},
        {"action": "settle", "winner": 3, "patterns": ["1.1"], "bonuses": ["Final Draw"], "source": "self_draw"}
    ]"#;
    let actions: Vec<Action> = serde_json::from_str(json).expect("valid script");
    assert_eq!(actions.len(), 7);
    assert_eq!(actions[0], Action::SetDealer { seat: 2 });
    assert_eq!(actions[1], Action::AddRound);
    match &actions[5] {
        Action::Settle(req) => {
            assert_eq!(req.winner, 2);
            assert_eq!(req.source, TileSource::Discard(1));
            assert!(req.bonuses.is_empty());
        }
        other => panic!("expected settle, got {other:?}"),
    }
    match &actions[6] {
        Action::Settle(req) => assert_eq!(req.source, TileSource::SelfDraw),
        other => panic!("expected settle, got {other:?}"),
    }
}
