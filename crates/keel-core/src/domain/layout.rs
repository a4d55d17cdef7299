//! Conventional directory layout of a generated application.

use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;

/// Where each artifact lives, relative to the application root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layout {
    pub models_dir: PathBuf,
    pub controllers_dir: PathBuf,
    pub adapters_dir: PathBuf,
    /// File extension without the leading dot.
    pub extension: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            models_dir: PathBuf::from("api/models"),
            controllers_dir: PathBuf::from("api/controllers"),
            adapters_dir: PathBuf::from("api/adapters"),
            extension: "js".into(),
        }
    }
}

impl Layout {
    pub fn validate(&self) -> Result<(), DomainError> {
        for (key, dir) in [
            ("models_dir", &self.models_dir),
            ("controllers_dir", &self.controllers_dir),
            ("adapters_dir", &self.adapters_dir),
        ] {
            if dir.as_os_str().is_empty() {
                return Err(DomainError::InvalidLayout(format!("{key} is empty")));
            }
            if dir.is_absolute() {
                return Err(DomainError::InvalidLayout(format!(
                    "{key} must be relative, got {}",
                    dir.display()
                )));
            }
            // Generated files must stay inside the application root.
            if dir.components().any(|c| matches!(c, Component::ParentDir)) {
                return Err(DomainError::InvalidLayout(format!(
                    "{key} must not contain '..', got {}",
                    dir.display()
                )));
            }
        }

        let ext = self.extension.trim_start_matches('.');
        if ext.is_empty() || ext.contains(['/', '\\']) {
            return Err(DomainError::InvalidLayout(format!(
                "extension '{}' is not a valid file extension",
                self.extension
            )));
        }
        Ok(())
    }

    /// `base` with the configured extension appended.
    pub fn file_name(&self, base: &str) -> String {
        format!("{base}.{}", self.extension.trim_start_matches('.'))
    }

    /// All artifact directories, for skeleton creation.
    pub fn directories(&self) -> [&Path; 3] {
        [
            self.models_dir.as_path(),
            self.controllers_dir.as_path(),
            self.adapters_dir.as_path(),
        ]
    }
}
