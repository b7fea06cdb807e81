//! Common utilities for the engine version tools
//!
//! This crate provides what the command-line tools share around the version
//! record: configuration, command-line source options, logging setup,
//! error handling, and loading a record from a checkout.

pub mod cli;
pub mod config;
pub mod error;
pub mod loader;
pub mod logging;

pub use cli::{EXIT_MISMATCH, EXIT_OK, EXIT_SOURCE, EXIT_USAGE, SourceArgs};
pub use config::ToolConfig;
pub use error::{Error, Result};
pub use loader::load_version_record;
pub use logging::setup_logging;
