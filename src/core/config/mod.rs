use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::error::Result;

/// Settings for a [`RecordedQueue`](crate::core::buildcore::RecordedQueue)
/// and the demo binary. Missing fields fall back to [`Default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Name stamped on every log entry.
    pub label: String,
    /// NDJSON file the operation log is appended to.
    pub log_path: String,
    /// Whether log entries carry element text.
    pub record_values: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            label: "queue".to_string(),
            log_path: "output.ndjson".to_string(),
            record_values: true,
        }
    }
}

impl QueueConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}
