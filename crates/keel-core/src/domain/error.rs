// ============================================================================
// domain/error.rs - GENERATOR ERROR DOMAIN
// ============================================================================

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::generator::GeneratorKind;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (carried inside `GenerationResult` and `KeelError`)
/// - Categorizable (for CLI display and exit codes)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Rejected input
    // ========================================================================
    #[error("Missing name for the '{kind}' generator")]
    MissingArgument { kind: GeneratorKind },

    #[error("Unknown generator '{name}'")]
    UnknownGenerator { name: String },

    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("{path} already exists")]
    AlreadyExists { path: PathBuf },

    // ========================================================================
    // Structural violations
    // ========================================================================
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Duplicate path in structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingArgument { kind } => vec![
                format!("Provide a name: keel generate {kind} <name>"),
                "Run 'keel generate' to see every generator".into(),
            ],
            Self::UnknownGenerator { name } => {
                let mut out = vec![format!("'{name}' is not a generator. Available generators:")];
                out.extend(GeneratorKind::ALL.iter().map(|k| format!("  • {k}")));
                out
            }
            Self::InvalidName { .. } => vec![
                "Use a single word made of letters, digits, '-' or '_'".into(),
                "Examples: user, blogPost, mongo".into(),
            ],
            Self::AlreadyExists { path } => vec![
                format!("Remove or rename {} first", path.display()),
                "Or choose a different name".into(),
            ],
            Self::InvalidLayout(_) => vec![
                "Check the [layout] section of keel.toml".into(),
                "Layout directories must be relative to the application root".into(),
            ],
            _ => vec!["See documentation for more details".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingArgument { .. }
            | Self::UnknownGenerator { .. }
            | Self::InvalidName { .. } => ErrorCategory::Validation,
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::InvalidLayout(_) => ErrorCategory::Configuration,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Conflict,
    Configuration,
    Internal,
}
