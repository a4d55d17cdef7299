//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// Boilerplate rendering failed.
    #[error("Rendering failed: {reason}")]
    RenderingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// In-memory state lock was poisoned.
    #[error("Filesystem state lock poisoned")]
    LockPoisoned,

    /// Application directory already exists.
    #[error("Application already exists at {path}")]
    AppExists { path: PathBuf },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
                "Ensure the parent directory exists".into(),
            ],
            Self::AppExists { path } => vec![
                format!("Directory already exists: {}", path.display()),
                "Choose a different application name".into(),
            ],
            _ => vec!["Check the error details above".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::AppExists { .. } => ErrorCategory::Conflict,
            Self::RenderingFailed { .. }
            | Self::FilesystemError { .. }
            | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}
