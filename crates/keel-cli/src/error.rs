//! Error handling for the Keel CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use keel_core::error::KeelError;

pub use keel_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration value could not be read or rendered.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `keel-core`.
    #[error("{0}")]
    Core(#[from] KeelError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {message}"),
                "List the effective values with 'keel config list'".into(),
                "Check the [layout] section of keel.toml".into(),
            ],
            Self::Core(core_err) => core_err.suggestions(),
            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
            ],
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            // Validation and conflicts are both the user's to fix.
            Self::Core(core) => match core.category() {
                CoreCategory::Validation | CoreCategory::Conflict => ErrorCategory::UserError,
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  1   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError | ErrorCategory::Internal => 1,
            ErrorCategory::Configuration => 4,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "\n{} {}\n\n",
            "\u{2717}".red().bold(),
            "Error:".red().bold()
        ));
        output.push_str(&format!("  {}\n", self.to_string().red()));

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "\u{2192}".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = format!("\nError: {self}\n");

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        out
    }

    /// Log the error using tracing.
    ///
    /// Kept at debug level: `handle_error` already prints the message to
    /// stderr, and a warn/error event would duplicate it at the default level.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::debug!("User error: {}", self),
            ErrorCategory::Configuration => tracing::debug!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::debug!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Bad input, or a target that already exists.
    UserError,
    Configuration,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use keel_core::domain::{DomainError, GeneratorKind};

    fn core(err: DomainError) -> CliError {
        CliError::Core(KeelError::Domain(err))
    }

    #[test]
    fn already_exists_is_a_user_error_with_exit_one() {
        let err = core(DomainError::AlreadyExists {
            path: PathBuf::from("api/models/User.js"),
        });
        assert_eq!(err.category(), ErrorCategory::UserError);
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "api/models/User.js already exists");
    }

    #[test]
    fn missing_argument_suggests_full_command() {
        let err = core(DomainError::MissingArgument {
            kind: GeneratorKind::Model,
        });
        assert!(
            err.suggestions()
                .iter()
                .any(|s| s.contains("keel generate model"))
        );
    }

    #[test]
    fn config_error_exits_four() {
        let err = CliError::ConfigError {
            message: "x".into(),
            source: None,
        };
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn io_error_is_internal() {
        let err = CliError::from(io::Error::other("disk on fire"));
        assert_eq!(err.category(), ErrorCategory::Internal);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn format_plain_has_no_ansi() {
        let err = core(DomainError::UnknownGenerator {
            name: "view".into(),
        });
        let s = err.format_plain(false);
        assert!(s.contains("Error:"));
        assert!(s.contains("Suggestions:"));
        assert!(!s.contains('\u{1b}'));
    }

    #[test]
    fn format_plain_verbose_walks_sources() {
        let err = CliError::IoError {
            message: "writing".into(),
            source: io::Error::other("denied"),
        };
        assert!(err.format_plain(true).contains("Caused by: denied"));
    }
}
