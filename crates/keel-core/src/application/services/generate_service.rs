//! Generate Service - runs one generator against an application root.
//!
//! Workflow:
//! 1. Plan every target and reject the request if any already exists
//! 2. Render all boilerplate in memory
//! 3. Create each file exclusively, rolling back this invocation's files if
//!    a later create fails

use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer},
    domain::{GenerationPlan, GeneratorRequest, Layout, ProjectStructure, RenderContext, plan},
    error::{KeelError, KeelResult},
};

/// Outcome of one generator invocation.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResult {
    pub success: bool,
    pub exit_code: u8,
    /// Relative to the application root, in write order.
    pub created_paths: Vec<PathBuf>,
    #[serde(skip)]
    pub error: Option<KeelError>,
}

impl GenerationResult {
    pub fn from_outcome(outcome: KeelResult<Vec<PathBuf>>) -> Self {
        match outcome {
            Ok(created_paths) => Self {
                success: true,
                exit_code: 0,
                created_paths,
                error: None,
            },
            Err(e) => Self {
                success: false,
                exit_code: e.category().exit_code(),
                created_paths: Vec::new(),
                error: Some(e),
            },
        }
    }
}

/// Generator orchestration over the filesystem and renderer ports.
pub struct GenerateService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    layout: Layout,
}

impl GenerateService {
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

    /// Run a generator and return the created paths, relative to `root`.
    #[instrument(
        skip_all,
        fields(
            kind = %request.kind(),
            name = %request.raw_name(),
            root = %root.as_ref().display()
        )
    )]
    pub fn generate(
        &self,
        request: &GeneratorRequest,
        root: impl AsRef<Path>,
    ) -> KeelResult<Vec<PathBuf>> {
        let root = root.as_ref();

        let plan = self.plan(request, root)?;
        debug!(targets = plan.targets().len(), "plan resolved");

        let structure = self.render(&plan, root)?;
        let created = self.write_structure(&structure)?;

        info!(files = created.len(), "generation completed");
        Ok(created)
    }

    /// [`Self::generate`], folded into a [`GenerationResult`].
    pub fn run(&self, request: &GeneratorRequest, root: impl AsRef<Path>) -> GenerationResult {
        GenerationResult::from_outcome(self.generate(request, root))
    }

    /// Resolve targets against the filesystem under `root`.
    pub fn plan(&self, request: &GeneratorRequest, root: &Path) -> KeelResult<GenerationPlan> {
        plan(request, &self.layout, |p| self.filesystem.exists(&root.join(p)))
            .map_err(KeelError::Domain)
    }

    /// Render every target of `plan` without writing.
    pub fn render(&self, plan: &GenerationPlan, root: &Path) -> KeelResult<ProjectStructure> {
        let mut structure = ProjectStructure::new(root);
        for target in plan.targets() {
            let ctx = RenderContext::for_target(plan.request().raw_name(), target);
            let content = self.renderer.render(target.artifact, &ctx)?;
            structure.add_file(target.file_path.clone(), content);
        }
        structure.validate()?;
        Ok(structure)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn write_structure(&self, structure: &ProjectStructure) -> KeelResult<Vec<PathBuf>> {
        let root = structure.root();
        let mut created = Vec::new();
        let mut written = Vec::new();
        // Outermost directories this invocation had to create.
        let mut new_dirs = Vec::new();

        for file in structure.files() {
            let path = root.join(&file.path);
            if let Err(e) = self.write_one(root, &path, &file.content, &mut new_dirs) {
                warn!(path = %path.display(), error = %e, "write failed, rolling back");
                self.rollback(&written, &new_dirs);
                return Err(e);
            }
            debug!(path = %path.display(), "created");
            written.push(path);
            created.push(file.path.clone());
        }

        Ok(created)
    }

    fn write_one(
        &self,
        root: &Path,
        path: &Path,
        content: &str,
        new_dirs: &mut Vec<PathBuf>,
    ) -> KeelResult<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            // Recorded before creating, so a half-made chain is still removed.
            if let Some(top) = self.first_missing_dir(root, parent) {
                if !new_dirs.contains(&top) {
                    new_dirs.push(top);
                }
            }
            self.filesystem.create_dir_all(parent)?;
        }
        self.filesystem.create_new(path, content)
    }

    /// Outermost missing directory on the way from `dir` up to `root`.
    ///
    /// `root` itself is never returned.
    fn first_missing_dir(&self, root: &Path, dir: &Path) -> Option<PathBuf> {
        let mut top = None;
        let mut current = Some(dir);
        while let Some(d) = current {
            if d == root || !d.starts_with(root) || self.filesystem.exists(d) {
                break;
            }
            top = Some(d.to_path_buf());
            current = d.parent();
        }
        top
    }

    /// Best-effort removal of files and directories created by this invocation.
    fn rollback(&self, written: &[PathBuf], new_dirs: &[PathBuf]) {
        for path in written.iter().rev() {
            if let Err(e) = self.filesystem.remove_file(path) {
                warn!(error = %e, path = %path.display(), "Rollback failed");
            }
        }
        for dir in new_dirs.iter().rev() {
            if let Err(e) = self.filesystem.remove_dir_all(dir) {
                warn!(error = %e, path = %dir.display(), "Rollback failed");
            }
        }
    }
}
