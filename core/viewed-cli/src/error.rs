use std::path::PathBuf;

use thiserror::Error;
use viewed_core::ViewedError;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Failed to read items file {path}: {source}")]
    ReadItems {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Items file {path} is not a JSON array of articles: {source}")]
    ParseItems {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),

    #[error("Failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),

    #[error(transparent)]
    Store(#[from] ViewedError),
}
