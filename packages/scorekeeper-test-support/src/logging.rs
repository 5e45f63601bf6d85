//! Test logging for unit and integration tests.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Variables consulted for the test log filter, first match wins.
const FILTER_VARS: [&str; 3] = ["TEST_LOG", "SCOREKEEPER_LOG", "RUST_LOG"];

/// Install a test-writer subscriber once per test binary.
///
/// Safe to call from every test and from `#[ctor]` hooks; later calls and
/// an already installed global subscriber are ignored. Without any of
/// `TEST_LOG`, `SCOREKEEPER_LOG` or `RUST_LOG` only warnings are shown.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        fmt()
            .with_env_filter(test_filter())
            .with_test_writer()
            .without_time()
            .with_target(false)
            .try_init()
            .ok();
    });
}

fn test_filter() -> EnvFilter {
    FILTER_VARS
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}
