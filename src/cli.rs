// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "gavel",
    about = "A terminal client for an LLM-as-a-judge Q&A evaluation service",
    version,
    long_about = None,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Optional question submitted immediately on startup
    #[arg(value_name = "QUESTION")]
    pub question: Option<String>,

    /// Base URL of the evaluation service (overrides config)
    #[arg(long, short = 'u', env = "GAVEL_BASE_URL")]
    pub base_url: Option<String>,

    /// Path to config file (overrides auto-discovery)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Use plain ASCII borders/indicators instead of Unicode glyphs
    #[arg(long)]
    pub ascii: bool,

    /// Increase log verbosity (-v: debug, -vv: trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the merged configuration and exit
    ShowConfig,
    /// Generate shell completion scripts
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_bare_question() {
        let cli = Cli::try_parse_from(["gavel", "How do I improve team productivity?"]).unwrap();
        assert_eq!(
            cli.question.as_deref(),
            Some("How do I improve team productivity?")
        );
        assert!(cli.command.is_none());
    }

    #[test]
    fn cli_parses_base_url_override() {
        let cli = Cli::try_parse_from(["gavel", "-u", "https://judge.example.com/api"]).unwrap();
        assert_eq!(cli.base_url.as_deref(), Some("https://judge.example.com/api"));
    }

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
