//! Error types for the mindleap-cli crate.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse graph model in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Schema error: {0}")]
    Schema(#[from] mindleap_core::SchemaError),
}

pub type Result<T> = std::result::Result<T, CliError>;
