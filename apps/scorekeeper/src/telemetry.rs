use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::{AppConfig, LogFormat};

/// Install the global subscriber; logs go to stderr so stdout stays clean
/// for score sheets and JSON output.
pub fn init_tracing(config: &AppConfig) {
    let env_filter =
        EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.with_ansi(false).json())
            .init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.without_time())
            .init(),
    }
}
