use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{ReportError, Result};

/// One call as it appears in the input JSON array.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PhoneCall {
    #[serde(rename = "call_id", alias = "id")]
    pub id: i64,
    pub from: String,
    pub to: String,
    /// Seconds.
    pub talktime: u64,
    /// Unix seconds.
    pub timestamp: i64,
}

/// Reads and decodes the whole call log. An empty array is rejected here so
/// that nothing downstream has to divide by zero.
pub fn load_calls(path: &Path) -> Result<Vec<PhoneCall>> {
    let raw = fs::read_to_string(path).map_err(|source| ReportError::InputRead {
        path: path.to_path_buf(),
        source,
    })?;

    let calls = parse_calls(&raw).map_err(|source| ReportError::InputDecode {
        path: path.to_path_buf(),
        source,
    })?;

    if calls.is_empty() {
        return Err(ReportError::EmptyDataset {
            path: path.to_path_buf(),
        });
    }

    tracing::debug!(count = calls.len(), path = %path.display(), "loaded calls");
    Ok(calls)
}

pub fn parse_calls(raw: &str) -> serde_json::Result<Vec<PhoneCall>> {
    serde_json::from_str(raw)
}
