//! Command-line options shared by the tools

use crate::config::ToolConfig;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Exit status for a successful run
pub const EXIT_OK: u8 = 0;
/// Exit status when the candidate does not match the source version
pub const EXIT_MISMATCH: u8 = 1;
/// Exit status for bad arguments (same as clap's usage errors)
pub const EXIT_USAGE: u8 = 2;
/// Exit status when the version source or configuration is unusable
pub const EXIT_SOURCE: u8 = 3;

/// Options selecting where the version record comes from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Engine checkout containing the version module [default: ./git]
    #[arg(short = 'C', long, value_name = "DIR")]
    pub source_dir: Option<PathBuf>,

    /// Version file name inside the checkout [default: version.py]
    #[arg(short, long, value_name = "FILE")]
    pub module: Option<String>,

    /// Path to configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl SourceArgs {
    /// Load the configuration file and apply command-line overrides
    pub fn resolve(&self) -> Result<ToolConfig> {
        let mut config = if let Some(ref path) = self.config {
            ToolConfig::load(Some(path.clone())).context("Failed to load configuration")?
        } else {
            ToolConfig::load_or_default().context("Failed to load configuration")?
        };

        if let Some(ref dir) = self.source_dir {
            config.source.dir = dir.clone();
        }
        if let Some(ref module) = self.module {
            config.source.module = module.clone();
        }
        if let Some(ref level) = self.log_level {
            config.tool.log_level = level.clone();
        }

        config.validate().context("Invalid options")?;
        Ok(config)
    }
}
