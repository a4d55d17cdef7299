//! Simple variable substitution renderer.

use serde::Serialize;
use tracing::instrument;

use keel_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::{Artifact, Layout, RenderContext},
    error::KeelResult,
};

use crate::builtin_templates;

/// Renderer using the built-in boilerplate and `{{VARIABLE}}` substitution.
pub struct SimpleRenderer;

impl SimpleRenderer {
    /// Create a new simple renderer.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SimpleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// On-disk shape of `keel.toml`.
#[derive(Serialize)]
struct Manifest<'a> {
    app: AppSection<'a>,
    layout: &'a Layout,
}

#[derive(Serialize)]
struct AppSection<'a> {
    name: &'a str,
    keel_version: &'a str,
}

impl TemplateRenderer for SimpleRenderer {
    #[instrument(skip(self, context))]
    fn render(&self, artifact: Artifact, context: &RenderContext) -> KeelResult<String> {
        Ok(context.render(builtin_templates::source(artifact)))
    }

    fn render_manifest(&self, app_name: &str, layout: &Layout) -> KeelResult<String> {
        let manifest = Manifest {
            app: AppSection {
                name: app_name,
                keel_version: keel_core::VERSION,
            },
            layout,
        };
        toml::to_string_pretty(&manifest).map_err(|e| {
            ApplicationError::RenderingFailed {
                reason: format!("Failed to serialise {}: {e}", keel_core::application::MANIFEST_FILE),
            }
            .into()
        })
    }
}
