//! Error types for the queue crate

use std::collections::TryReserveError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueueError>;

#[derive(Error, Debug)]
pub enum QueueError {
    /// Storage for an element value could not be obtained.
    #[error("Could not allocate {requested} bytes for element value")]
    Allocation {
        requested: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
