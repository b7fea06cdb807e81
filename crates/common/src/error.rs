//! Common error types

use record::RecordError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Version source unavailable at {shown}: {reason}", shown = .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        reason: RecordError,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
