//! App Service - creates a fresh application skeleton.
//!
//! The skeleton is the manifest plus one empty directory per artifact kind,
//! which is the layout every generator expects to run inside.

use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, TemplateRenderer},
    },
    domain::{DomainError, FsEntry, Layout, ProjectStructure, validate_identifier},
    error::KeelResult,
};

/// Name of the manifest at the application root.
pub const MANIFEST_FILE: &str = "keel.toml";

/// Placeholder keeping empty directories under version control.
const KEEP_FILE: &str = ".gitkeep";

pub struct AppService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    layout: Layout,
}

impl AppService {
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        layout: Layout,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            layout,
        }
    }

    /// Create `<parent>/<app_name>` and return its path.
    #[instrument(skip_all, fields(app = %app_name, parent = %parent.as_ref().display()))]
    pub fn create(&self, app_name: &str, parent: impl AsRef<Path>) -> KeelResult<PathBuf> {
        if app_name.trim().is_empty() {
            return Err(DomainError::InvalidName {
                name: app_name.into(),
                reason: "name cannot be empty".into(),
            }
            .into());
        }
        validate_identifier(app_name)?;
        self.layout.validate()?;

        let root = parent.as_ref().join(app_name);
        if self.filesystem.exists(&root) {
            return Err(ApplicationError::AppExists { path: root }.into());
        }

        let structure = self.skeleton(app_name, &root)?;
        structure.validate()?;

        match self.write_all(&structure) {
            Ok(()) => {
                info!(path = %root.display(), "Application created");
                Ok(root)
            }
            Err(e) => {
                warn!("Write failed, attempting rollback");
                self.rollback(&root);
                Err(e)
            }
        }
    }

    fn skeleton(&self, app_name: &str, root: &Path) -> KeelResult<ProjectStructure> {
        let manifest = self.renderer.render_manifest(app_name, &self.layout)?;
        let mut structure = ProjectStructure::new(root).with_file(MANIFEST_FILE, manifest);
        for dir in self.layout.directories() {
            structure.add_directory(dir);
            structure.add_file(dir.join(KEEP_FILE), String::new());
        }
        Ok(structure)
    }

    fn write_all(&self, structure: &ProjectStructure) -> KeelResult<()> {
        self.filesystem.create_dir_all(structure.root())?;

        for entry in structure.entries() {
            let path = structure.root().join(entry.path());
            match entry {
                FsEntry::Directory(_) => self.filesystem.create_dir_all(&path)?,
                FsEntry::File(file) => {
                    if let Some(parent) = path.parent() {
                        self.filesystem.create_dir_all(parent)?;
                    }
                    self.filesystem.write_file(&path, &file.content)?;
                }
            }
        }
        Ok(())
    }

    /// Best-effort rollback on failure.
    fn rollback(&self, root: &Path) {
        if let Err(e) = self.filesystem.remove_dir_all(root) {
            warn!(error = %e, path = %root.display(), "Rollback failed");
        } else {
            info!("Rollback successful");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::{MockFilesystem, MockTemplateRenderer};
    use crate::error::KeelError;

    fn manifest_renderer() -> MockTemplateRenderer {
        let mut renderer = MockTemplateRenderer::new();
        renderer
            .expect_render_manifest()
            .returning(|name, _| Ok(format!("name = \"{name}\"\n")));
        renderer
    }

    #[test]
    fn existing_directory_is_rejected() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_write_file().never();

        let service = AppService::new(Box::new(manifest_renderer()), Box::new(fs), Layout::default());
        let err = service.create("blog", "/tmp").unwrap_err();
        assert!(matches!(
            err,
            KeelError::Application(ApplicationError::AppExists { .. })
        ));
    }

    #[test]
    fn writes_manifest_and_keep_files() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file()
            .withf(|p, c| p == Path::new("/tmp/blog/keel.toml") && c.contains("blog"))
            .times(1)
            .returning(|_, _| Ok(()));
        fs.expect_write_file()
            .withf(|p, _| p.ends_with(KEEP_FILE))
            .times(3)
            .returning(|_, _| Ok(()));

        let service = AppService::new(Box::new(manifest_renderer()), Box::new(fs), Layout::default());
        let root = service.create("blog", "/tmp").unwrap();
        assert_eq!(root, PathBuf::from("/tmp/blog"));
    }

    #[test]
    fn failed_write_removes_partial_app() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::FilesystemError {
                path: p.to_path_buf(),
                reason: "disk full".into(),
            }
            .into())
        });
        fs.expect_remove_dir_all()
            .withf(|p| p == Path::new("/tmp/blog"))
            .times(1)
            .returning(|_| Ok(()));

        let service = AppService::new(Box::new(manifest_renderer()), Box::new(fs), Layout::default());
        assert!(service.create("blog", "/tmp").is_err());
    }

    #[test]
    fn hidden_name_is_rejected() {
        let fs = MockFilesystem::new();
        let service = AppService::new(Box::new(manifest_renderer()), Box::new(fs), Layout::default());
        assert!(matches!(
            service.create(".blog", "/tmp"),
            Err(KeelError::Domain(DomainError::InvalidName { .. }))
        ));
    }
}
