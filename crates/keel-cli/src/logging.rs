//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `keel-core` and
//! `keel-adapters` only emit spans and events.
//!
//! # Verbosity mapping
//!
//! | Flag(s)  | Filter level |
//! |----------|--------------|
//! | (none)   | WARN         |
//! | `-v`     | INFO         |
//! | `-vv`    | DEBUG        |
//! | `-vvv`   | TRACE        |
//! | `--quiet`| ERROR        |
//!
//! `RUST_LOG` overrides all of the above if set.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{GlobalArgs, OutputFormat};

/// Initialise the global tracing subscriber.
///
/// Must be called once, before any tracing macros fire. Logs always go to
/// stderr so stdout stays reserved for command output.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let level = derive_level(args);

    // RUST_LOG wins; otherwise every keel crate gets the same level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "keel={level},keel_core={level},keel_adapters={level}"
        ))
    });

    // In JSON mode the log lines are JSON as well. Only one of the two
    // layers is Some; `Option<Layer>` is itself a layer that does nothing
    // when None, which keeps the subscriber type the same either way.
    let json = args.output_format == OutputFormat::Json;
    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
    });

    let fmt_layer = (!json).then(|| {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_ids(false)
            .with_file(false)
            .with_line_number(false)
            .with_ansi(use_ansi)
            .with_writer(std::io::stderr)
    });

    // `try_init` returns an error instead of panicking if a global subscriber
    // is already set, so a second call surfaces as a startup error rather
    // than an abort.
    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Translate the verbosity counter and quiet flag to a level string.
fn derive_level(args: &GlobalArgs) -> &'static str {
    if args.quiet {
        return "error";
    }
    match args.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
