//! Shell completion generation
//!
//! Writes a completion script for bash, elvish, fish, PowerShell or zsh to
//! stdout, covering every subcommand and global flag.
//!
//! # Usage
//!
//! ```bash
//! # Bash - add to ~/.bashrc
//! source <(autoshop completions bash)
//!
//! # Zsh - add to ~/.zshrc
//! source <(autoshop completions zsh)
//!
//! # Fish
//! autoshop completions fish > ~/.config/fish/completions/autoshop.fish
//!
//! # PowerShell - add to $PROFILE
//! autoshop completions powershell >> $PROFILE
//! ```

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use miette::Result;
use std::io;

use crate::cli::Cli;

#[derive(clap::Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

pub fn run(args: CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "autoshop", &mut io::stdout());
    Ok(())
}
