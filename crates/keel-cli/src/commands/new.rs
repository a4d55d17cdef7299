//! Implementation of the `keel new` command.

use tracing::{info, instrument};

use keel_adapters::{LocalFilesystem, SimpleRenderer};
use keel_core::application::AppService;

use crate::{
    cli::{NewArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Create `<app-dir>/<name>` with the manifest and empty artifact directories.
#[instrument(skip_all, fields(app = %args.name))]
pub fn execute(
    args: NewArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let parent = global.app_root();
    let service = AppService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        config.layout.clone(),
    );

    output.header(&format!("Creating '{}'...", args.name))?;
    let root = service.create(&args.name, &parent)?;
    info!(path = %root.display(), "Application created");

    output.success(&format!("Application '{}' created!", args.name))?;
    output.print("")?;
    output.print("Next steps:")?;
    output.print(&format!("  cd {}", args.name))?;
    output.print("  keel generate api <name>")?;

    Ok(())
}
