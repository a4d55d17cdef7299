//! Flags accepted by every subcommand.

use clap::Args;
use std::path::PathBuf;

/// Global arguments, flattened into [`super::Cli`].
#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity (`-v` info, `-vv` debug, `-vvv` trace).
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,

    /// Only print errors and usage banners.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Suppress non-error output"
    )]
    pub quiet: bool,

    /// Honours `NO_COLOR` (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Extra configuration file, layered above `keel.toml`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Configuration file path"
    )]
    pub config: Option<PathBuf>,

    /// Application root to operate in instead of the current directory.
    #[arg(
        short = 'C',
        long = "app-dir",
        global = true,
        value_name = "DIR",
        help = "Run as if started in DIR"
    )]
    pub app_dir: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "Output format"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Directory generators resolve their paths against.
    pub fn app_root(&self) -> PathBuf {
        self.app_dir.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// How the CLI should render its output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colored, decorated output.
    Human,
    /// Plain text without colors.
    Plain,
    /// One JSON document per command.
    Json,
}
