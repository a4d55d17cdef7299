//! `keel generate` - write models, controllers and adapters.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info, instrument};

use keel_adapters::{LocalFilesystem, SimpleRenderer};
use keel_core::{
    application::GenerateService,
    domain::{DomainError, GeneratorKind, GeneratorRequest, Invocation, Layout, parse_invocation},
    error::KeelError,
};

use crate::{
    cli::{GenerateArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Serialize)]
struct DryRun {
    dry_run: bool,
    would_create: Vec<PathBuf>,
}

#[instrument(skip_all, fields(generator = ?args.generator, name = ?args.name))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = match parse_invocation(args.generator.as_deref(), args.name.as_deref()) {
        Ok(Invocation::Generate(request)) => request,
        Ok(Invocation::Usage) => {
            debug!("No generator or name given, printing usage");
            output.banner(&usage(&config.layout))?;
            return Ok(());
        }
        Err(e @ DomainError::MissingArgument { .. }) => {
            output.banner(&usage(&config.layout))?;
            return Err(KeelError::from(e).into());
        }
        Err(e) => return Err(KeelError::from(e).into()),
    };

    let root = global.app_root();
    let service = GenerateService::new(
        Box::new(SimpleRenderer::new()),
        Box::new(LocalFilesystem::new()),
        config.layout,
    );

    if args.dry_run {
        return dry_run(&service, &request, &root, &output);
    }

    let result = service.run(&request, &root);
    output.json(&result)?;

    if let Some(err) = result.error {
        return Err(CliError::Core(err));
    }

    info!(count = result.created_paths.len(), "Generation finished");
    for path in &result.created_paths {
        output.success(&format!("create {}", path.display()))?;
    }

    Ok(())
}

fn dry_run(
    service: &GenerateService,
    request: &GeneratorRequest,
    root: &std::path::Path,
    output: &OutputManager,
) -> CliResult<()> {
    let plan = service.plan(request, root)?;
    let would_create: Vec<PathBuf> = plan.paths().map(PathBuf::from).collect();

    output.json(&DryRun {
        dry_run: true,
        would_create: would_create.clone(),
    })?;
    for path in &would_create {
        output.info(&format!("would create {}", path.display()))?;
    }
    Ok(())
}

/// Help banner for `keel generate`, showing where each generator writes.
fn usage(layout: &Layout) -> String {
    let mut out = String::from("Usage: keel generate <generator> <name>\n\nGenerators:\n");
    for kind in GeneratorKind::ALL {
        let destination = match kind {
            GeneratorKind::Model => layout
                .models_dir
                .join(layout.file_name("<Name>"))
                .display()
                .to_string(),
            GeneratorKind::Controller => layout
                .controllers_dir
                .join(layout.file_name("<Name>Controller"))
                .display()
                .to_string(),
            GeneratorKind::Adapter => layout
                .adapters_dir
                .join("<name>")
                .join("lib")
                .join(layout.file_name("adapter"))
                .display()
                .to_string(),
            GeneratorKind::Api => "model and controller together".to_owned(),
        };
        out.push_str(&format!("  {:<18} {destination}\n", format!("{kind} <name>")));
    }
    out
}
