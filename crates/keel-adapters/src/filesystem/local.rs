//! Local filesystem adapter using std::fs.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

use tracing::warn;

use keel_core::{
    application::{ApplicationError, ports::Filesystem},
    domain::DomainError,
    error::{KeelError, KeelResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> KeelResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> KeelResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write file"))
    }

    fn create_new(&self, path: &Path, content: &str) -> KeelResult<()> {
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::AlreadyExists => DomainError::AlreadyExists {
                    path: path.to_path_buf(),
                }
                .into(),
                _ => map_io_error(path, e, "create file"),
            })?;

        let written = file.write_all(content.as_bytes()).and_then(|()| file.sync_all());
        drop(file);
        discard_on_error(path, written)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn remove_file(&self, path: &Path) -> KeelResult<()> {
        std::fs::remove_file(path).map_err(|e| map_io_error(path, e, "remove file"))
    }

    fn remove_dir_all(&self, path: &Path) -> KeelResult<()> {
        std::fs::remove_dir_all(path).map_err(|e| map_io_error(path, e, "remove directory"))
    }
}

/// The file at `path` was created by this call; a failed write must not
/// leave it behind, or the next run would report it as already existing.
fn discard_on_error(path: &Path, written: io::Result<()>) -> KeelResult<()> {
    written.map_err(|e| {
        if let Err(remove) = std::fs::remove_file(path) {
            warn!(path = %path.display(), error = %remove, "Failed to remove partial file");
        }
        map_io_error(path, e, "write file")
    })
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> KeelError {
    ApplicationError::FilesystemError {
        path: path.to_path_buf(),
        reason: format!("Failed to {}: {}", operation, e),
    }
    .into()
}
