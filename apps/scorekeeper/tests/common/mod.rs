#![allow(dead_code)]

// tests/common/mod.rs
use std::collections::BTreeSet;

use proptest::prelude::ProptestConfig;
use scorekeeper::domain::settlement::{SettlementRequest, TileSource};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    scorekeeper_test_support::logging::init();
}

/// Proptest config honouring `PROPTEST_CASES`.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(128);
    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

pub fn request(
    winner: u32,
    patterns: &[&str],
    bonuses: &[&str],
    source: TileSource,
) -> SettlementRequest {
    SettlementRequest {
        winner,
        patterns: names(patterns),
        bonuses: names(bonuses),
        source,
    }
}

fn names(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
