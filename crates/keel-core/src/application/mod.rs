//! Application layer for Keel.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerateService, AppService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All business rules live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{AppService, GenerateService, GenerationResult, MANIFEST_FILE};

pub use ports::{Filesystem, TemplateRenderer};

pub use error::ApplicationError;
