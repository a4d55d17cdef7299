//! Infrastructure adapters for Keel.
//!
//! This crate implements the ports defined in `keel-core::application::ports`.
//! It contains all I/O operations and the built-in boilerplate.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
