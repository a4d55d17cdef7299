//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! and help text. No business logic lives here.

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "keel",
    bin_name = "keel",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Application scaffolding and generators",
    long_about = "Keel creates applications and generates models, controllers \
                  and adapters inside them.",
    after_help = "EXAMPLES:\n\
        \x20 keel new blog\n\
        \x20 keel generate model user\n\
        \x20 keel generate api post\n\
        \x20 keel generate adapter mongo",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new application.
    #[command(
        about = "Create a new application",
        after_help = "EXAMPLES:\n\
            \x20 keel new blog"
    )]
    New(NewArgs),

    /// Generate files inside the current application.
    ///
    /// Both positionals are optional; a missing name is handled by the
    /// generate command, not by clap.
    #[command(
        visible_alias = "g",
        about = "Generate a model, controller, adapter or api"
    )]
    Generate(GenerateArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 keel completions bash > ~/.local/share/bash-completion/completions/keel\n\
            \x20 keel completions zsh  > ~/.zfunc/_keel"
    )]
    Completions(CompletionsArgs),

    /// Inspect the effective configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 keel config get layout.models_dir\n\
            \x20 keel config list"
    )]
    Config(ConfigCommands),
}

// ── new ───────────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct NewArgs {
    /// Directory name of the application, created in the current directory.
    #[arg(value_name = "NAME")]
    pub name: String,
}

// ── generate ──────────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// One of: model, controller, adapter, api.
    #[arg(value_name = "GENERATOR")]
    pub generator: Option<String>,

    /// Name of the thing to generate.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Print the files that would be created without writing them.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `layout.extension`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the global configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parse_generate_with_name() {
        let cli = Cli::parse_from(["keel", "generate", "model", "user"]);
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert_eq!(args.generator.as_deref(), Some("model"));
        assert_eq!(args.name.as_deref(), Some("user"));
    }

    #[test]
    fn generate_without_arguments_parses() {
        let cli = Cli::try_parse_from(["keel", "generate"]).unwrap();
        let Commands::Generate(args) = cli.command else {
            panic!("expected Generate command");
        };
        assert!(args.generator.is_none());
        assert!(args.name.is_none());
    }

    #[test]
    fn generate_alias() {
        let cli = Cli::parse_from(["keel", "g", "api", "foo"]);
        assert!(matches!(cli.command, Commands::Generate(_)));
    }

    #[test]
    fn global_app_dir_after_subcommand() {
        let cli = Cli::parse_from(["keel", "generate", "model", "user", "-C", "/srv/app"]);
        assert_eq!(cli.global.app_root(), std::path::PathBuf::from("/srv/app"));
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["keel", "--quiet", "--verbose", "generate"]);
        assert!(result.is_err());
    }
}
