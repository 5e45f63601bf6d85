use thiserror::Error;

use crate::errors::domain::DomainError;
use crate::errors::error_code::ErrorCode;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Script action {index} rejected: {source}")]
    Script { index: usize, source: DomainError },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Domain(e) => e.code(),
            AppError::Script { source, .. } => source.code(),
            AppError::Config { .. } => ErrorCode::ConfigError,
            AppError::Io(_) => ErrorCode::IoError,
            AppError::Json(_) => ErrorCode::InvalidJson,
        }
    }
}
