//! Lookdiff CLI - report content newly broken by a Looker development branch

use anyhow::Result;
use clap::Parser;

mod cli;
mod commands;
mod context;
mod logging;

use cli::Cli;
use commands::common::ExitCode;
use commands::{compare, init};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.global.verbose);

    let result = match &cli.command {
        cli::Commands::Compare(args) => compare::execute(args, &cli.global).await,
        cli::Commands::Init(args) => init::execute(args).await,
    };

    if let Err(err) = &result {
        if let Some(ExitCode(code)) = err.downcast_ref::<ExitCode>() {
            std::process::exit(*code);
        }
    }
    result
}
