//! Pure generation planning.
//!
//! [`plan`] turns a [`GeneratorRequest`] into the list of files to write
//! without touching the filesystem: existence is answered by a caller-supplied
//! predicate. Every target is checked before any is returned, so a composite
//! generator is rejected as a whole when any one of its files exists.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::domain::{
    error::DomainError,
    generator::{Artifact, GeneratorRequest},
    layout::Layout,
    naming::capitalize,
};

/// A file a generator will create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTarget {
    /// Relative to the application root.
    pub file_path: PathBuf,
    /// Name substituted into the boilerplate.
    pub display_name: String,
    pub artifact: Artifact,
}

impl ResolvedTarget {
    /// Derive the target for one artifact.
    ///
    /// | Artifact   | Path                                      | Display            |
    /// |------------|-------------------------------------------|--------------------|
    /// | Model      | `<models_dir>/<Name>.<ext>`               | `<Name>`           |
    /// | Controller | `<controllers_dir>/<Name>Controller.<ext>`| `<Name>Controller` |
    /// | Adapter    | `<adapters_dir>/<name>/lib/adapter.<ext>` | `<name>`           |
    pub fn resolve(artifact: Artifact, raw_name: &str, layout: &Layout) -> Self {
        match artifact {
            Artifact::Model => {
                let display_name = capitalize(raw_name);
                Self {
                    file_path: layout.models_dir.join(layout.file_name(&display_name)),
                    display_name,
                    artifact,
                }
            }
            Artifact::Controller => {
                let display_name = format!("{}Controller", capitalize(raw_name));
                Self {
                    file_path: layout.controllers_dir.join(layout.file_name(&display_name)),
                    display_name,
                    artifact,
                }
            }
            Artifact::Adapter => Self {
                file_path: layout
                    .adapters_dir
                    .join(raw_name)
                    .join("lib")
                    .join(layout.file_name("adapter")),
                display_name: raw_name.to_string(),
                artifact,
            },
        }
    }
}

/// Ordered targets for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationPlan {
    request: GeneratorRequest,
    targets: Vec<ResolvedTarget>,
}

impl GenerationPlan {
    pub fn request(&self) -> &GeneratorRequest {
        &self.request
    }

    pub fn targets(&self) -> &[ResolvedTarget] {
        &self.targets
    }

    pub fn paths(&self) -> impl Iterator<Item = &Path> {
        self.targets.iter().map(|t| t.file_path.as_path())
    }
}

/// Resolve every target of `request` and reject the request if any exists.
pub fn plan<F>(
    request: &GeneratorRequest,
    layout: &Layout,
    exists: F,
) -> Result<GenerationPlan, DomainError>
where
    F: Fn(&Path) -> bool,
{
    layout.validate()?;

    let targets: Vec<ResolvedTarget> = request
        .kind()
        .artifacts()
        .iter()
        .map(|&artifact| ResolvedTarget::resolve(artifact, request.raw_name(), layout))
        .collect();

    if let Some(taken) = targets.iter().find(|t| exists(&t.file_path)) {
        debug!(path = %taken.file_path.display(), "target already exists");
        return Err(DomainError::AlreadyExists {
            path: taken.file_path.clone(),
        });
    }

    Ok(GenerationPlan {
        request: request.clone(),
        targets,
    })
}
