//! Unified error handling for Keel Core.
//!
//! Wraps domain and application errors behind one type with
//! user-actionable suggestions and an exit-code category.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for Keel Core operations.
#[derive(Debug, Error, Clone)]
pub enum KeelError {
    /// Errors from the domain layer (rejected requests, invalid layout).
    #[error("{0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl KeelError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::Validation,
                crate::domain::ErrorCategory::Conflict => ErrorCategory::Conflict,
                crate::domain::ErrorCategory::Configuration => ErrorCategory::Configuration,
                crate::domain::ErrorCategory::Internal => ErrorCategory::Internal,
            },
            Self::Application(e) => e.category(),
        }
    }
}

/// Error categories for UI display and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Input rejected before any write.
    Validation,
    /// Target already present on disk.
    Conflict,
    Configuration,
    Internal,
}

impl ErrorCategory {
    /// Process exit code for a failed invocation.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Validation    |  1   |
    /// | Conflict      |  1   |
    /// | Internal      |  1   |
    /// | Configuration |  4   |
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Validation | Self::Conflict | Self::Internal => 1,
            Self::Configuration => 4,
        }
    }
}

/// Convenient result type alias.
pub type KeelResult<T> = Result<T, KeelError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeneratorKind;
    use std::path::PathBuf;

    #[test]
    fn rejected_input_exits_with_one() {
        let missing: KeelError = DomainError::MissingArgument {
            kind: GeneratorKind::Model,
        }
        .into();
        let exists: KeelError = DomainError::AlreadyExists {
            path: PathBuf::from("api/models/User.js"),
        }
        .into();
        assert_eq!(missing.category().exit_code(), 1);
        assert_eq!(exists.category().exit_code(), 1);
    }

    #[test]
    fn invalid_layout_is_configuration() {
        let err: KeelError = DomainError::InvalidLayout("x".into()).into();
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.category().exit_code(), 4);
    }

    #[test]
    fn unknown_generator_suggests_every_kind() {
        let err: KeelError = DomainError::UnknownGenerator { name: "view".into() }.into();
        let s = err.suggestions().join("\n");
        for kind in GeneratorKind::ALL {
            assert!(s.contains(kind.as_str()), "missing {kind} in {s}");
        }
    }
}
