//! Runtime context for CLI commands

use anyhow::{Context, Result};
use ld_core::Config;
use ld_looker::{HttpLooker, LookerApi};
use std::path::Path;
use std::sync::Arc;

use crate::cli::GlobalArgs;

/// Runtime context containing loaded configuration and the Looker client
pub struct RuntimeContext {
    /// The loaded configuration
    pub config: Config,

    /// Looker API client
    pub api: Arc<dyn LookerApi>,

    /// Verbose output enabled
    pub verbose: bool,
}

impl RuntimeContext {
    /// Create a new runtime context from global arguments
    pub fn new(args: &GlobalArgs) -> Result<Self> {
        let config = match &args.config {
            Some(path) => {
                Config::load(Path::new(path)).context("Failed to load configuration file")?
            }
            None => Config::load_from_dir(Path::new("."))
                .context("Failed to load lookdiff.yml from the current directory")?,
        };

        let api: Arc<dyn LookerApi> = Arc::new(
            HttpLooker::new(config.api_url(), &config.looker)
                .context("Failed to create Looker client")?,
        );

        Ok(Self {
            config,
            api,
            verbose: args.verbose,
        })
    }

    /// Print verbose output if enabled
    pub fn verbose(&self, msg: &str) {
        if self.verbose {
            eprintln!("[verbose] {}", msg);
        }
    }
}
