//! Shell completion generation.

use clap::CommandFactory;
use clap_complete::{Generator, generate, shells};

use crate::cli::{Cli, CompletionsArgs, Shell};

const BIN: &str = "keel";

pub fn execute(args: CompletionsArgs) -> crate::error::CliResult<()> {
    match args.shell {
        Shell::Bash => emit(shells::Bash),
        Shell::Zsh => emit(shells::Zsh),
        Shell::Fish => emit(shells::Fish),
        Shell::PowerShell => emit(shells::PowerShell),
        Shell::Elvish => emit(shells::Elvish),
    }
    Ok(())
}

fn emit<G: Generator>(shell: G) {
    let mut cmd = Cli::command();
    generate(shell, &mut cmd, BIN, &mut std::io::stdout());
}
