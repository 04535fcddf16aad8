use std::path::PathBuf;

use hn_client::HnError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, WhoIsHiringError>;

/// Fatal errors. Per-comment retrieval failures never reach this type; they
/// are collected in [`crate::aggregator::BatchOutcome::failures`].
#[derive(Error, Debug)]
pub enum WhoIsHiringError {
    #[error("Could not parse month/year from thread title: {0:?}")]
    ThreadTitle(String),

    #[error("Failed to fetch item {id}: {source}")]
    Retrieval {
        id: u64,
        #[source]
        source: HnError,
    },

    #[error("Failed to write report {}: {source}", path.display())]
    Render {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),
}
