use std::env;

use proptest::prelude::ProptestConfig;

/// Proptest config; raise locally with `PROPTEST_CASES=2000`.
pub fn proptest_config() -> ProptestConfig {
    let cases = env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(256);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}
