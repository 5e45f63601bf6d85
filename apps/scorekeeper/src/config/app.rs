use std::env;

use crate::domain::catalogue::UnknownBonusPolicy;
use crate::domain::rules::PLAYERS;
use crate::domain::state::default_player_names;
use crate::error::AppError;

/// Log output format for the CLI subscriber
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines
    Pretty,
    /// One JSON object per event
    Json,
}

/// Settings read from the environment, with defaults for everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `EnvFilter` directive for the tracing subscriber.
    pub log_filter: String,
    pub log_format: LogFormat,
    /// Seat names for a new game, in seating order.
    pub player_names: [String; PLAYERS],
    pub unknown_bonus: UnknownBonusPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "warn".to_string(),
            log_format: LogFormat::Pretty,
            player_names: default_player_names(),
            unknown_bonus: UnknownBonusPolicy::Default,
        }
    }
}

impl AppConfig {
    /// Build the config from `SCOREKEEPER_*` environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            log_filter: log_filter(),
            log_format: log_format()?,
            player_names: player_names()?,
            unknown_bonus: unknown_bonus()?,
        })
    }
}

/// Log filter from environment (SCOREKEEPER_LOG, then RUST_LOG, then "warn")
fn log_filter() -> String {
    env::var("SCOREKEEPER_LOG")
        .or_else(|_| env::var("RUST_LOG"))
        .unwrap_or_else(|_| "warn".to_string())
}

fn log_format() -> Result<LogFormat, AppError> {
    let value = optional_var("SCOREKEEPER_LOG_FORMAT").map(|v| v.to_ascii_lowercase());
    match value.as_deref() {
        None | Some("pretty") => Ok(LogFormat::Pretty),
        Some("json") => Ok(LogFormat::Json),
        Some(other) => Err(AppError::config(format!(
            "SCOREKEEPER_LOG_FORMAT must be 'pretty' or 'json', got '{other}'"
        ))),
    }
}

/// Seat names from SCOREKEEPER_PLAYERS (comma-separated, exactly four)
fn player_names() -> Result<[String; PLAYERS], AppError> {
    let Some(raw) = optional_var("SCOREKEEPER_PLAYERS") else {
        return Ok(default_player_names());
    };
    parse_player_names(&raw)
}

pub fn parse_player_names(raw: &str) -> Result<[String; PLAYERS], AppError> {
    let names: Vec<String> = raw.split(',').map(|s| s.trim().to_string()).collect();
    if names.iter().any(String::is_empty) {
        return Err(AppError::config("player names must not be empty"));
    }
    names.try_into().map_err(|names: Vec<String>| {
        AppError::config(format!(
            "expected {PLAYERS} player names, got {}",
            names.len()
        ))
    })
}

fn unknown_bonus() -> Result<UnknownBonusPolicy, AppError> {
    let value = optional_var("SCOREKEEPER_UNKNOWN_BONUS").map(|v| v.to_ascii_lowercase());
    match value.as_deref() {
        None | Some("default") => Ok(UnknownBonusPolicy::Default),
        Some("reject") => Ok(UnknownBonusPolicy::Reject),
        Some(other) => Err(AppError::config(format!(
            "SCOREKEEPER_UNKNOWN_BONUS must be 'default' or 'reject', got '{other}'"
        ))),
    }
}

/// Get an environment variable, treating blank values as unset
fn optional_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
