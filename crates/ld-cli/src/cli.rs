//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Lookdiff - find Looker content broken by a development branch
#[derive(Parser, Debug)]
#[command(name = "lookdiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to lookdiff.yml (default: ./lookdiff.yml)
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare content validator results between production and the dev branch
    Compare(CompareArgs),

    /// Write a starter lookdiff.yml
    Init(InitArgs),
}

/// Arguments for the compare command
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Report destination (overrides output_path)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Saved look used for dashboard usage (overrides usage.look_id)
    #[arg(long)]
    pub usage_look: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Exit with status 1 when new broken content is found
    #[arg(long)]
    pub fail_on_new: bool,
}

/// Output formats for the compare command
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable progress messages
    Text,
    /// JSON summary on stdout
    Json,
}

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the config file
    #[arg(long, default_value = "lookdiff.yml")]
    pub path: String,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
