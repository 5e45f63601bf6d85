//! JSON building blocks for game scripts.

/// `set_dealer` action for `seat`.
pub fn set_dealer(seat: u8) -> String {
    format!(r#"{{"action": "set_dealer", "seat": {seat}}}"#)
}

/// Self-drawn win for player `winner` with the given pattern keys.
pub fn self_draw(winner: u32, patterns: &[&str]) -> String {
    format!(
        r#"{{"action": "settle", "winner": {winner}, "patterns": {}, "source": "self_draw"}}"#,
        string_list(patterns)
    )
}

/// Discard win for player `winner`, claimed from player `discarder`.
pub fn discard_win(winner: u32, discarder: u32, patterns: &[&str], bonuses: &[&str]) -> String {
    format!(
        r#"{{"action": "settle", "winner": {winner}, "patterns": {}, "bonuses": {}, "source": {{"discard": {discarder}}}}}"#,
        string_list(patterns),
        string_list(bonuses)
    )
}

/// Full script document from action fragments.
pub fn script(actions: &[String]) -> String {
    format!(r#"{{"actions": [{}]}}"#, actions.join(", "))
}

fn string_list(items: &[&str]) -> String {
    let quoted: Vec<String> = items.iter().map(|s| format!("{s:?}")).collect();
    format!("[{}]", quoted.join(", "))
}
