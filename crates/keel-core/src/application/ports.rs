//! Driven ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `keel-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::{Artifact, Layout, RenderContext};
use crate::error::KeelResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `keel_adapters::filesystem::LocalFilesystem` (production)
/// - `keel_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &Path) -> KeelResult<()>;

    /// Write content to a file, replacing it if present.
    fn write_file(&self, path: &Path, content: &str) -> KeelResult<()>;

    /// Create a file that must not exist yet.
    ///
    /// Fails with `DomainError::AlreadyExists` when the path is taken at the
    /// moment of creation, so a concurrent writer cannot be overwritten.
    fn create_new(&self, path: &Path, content: &str) -> KeelResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Remove a single file.
    fn remove_file(&self, path: &Path) -> KeelResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> KeelResult<()>;
}

/// Port for boilerplate rendering.
///
/// Implemented by `keel_adapters::renderer::SimpleRenderer`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render the boilerplate for one artifact.
    fn render(&self, artifact: Artifact, context: &RenderContext) -> KeelResult<String>;

    /// Render the application manifest (`keel.toml`) written by `keel new`.
    fn render_manifest(&self, app_name: &str, layout: &Layout) -> KeelResult<String>;
}
