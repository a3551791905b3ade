//! JSON file cache for raw pulls and normalized collections.
//!
//! The cache format is plain JSON on disk: raw API responses are stored
//! as fetched, and the normalized [`MyData`] payload round-trips through
//! its serde derives.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::Result;
use crate::types::MyData;

/// Read and parse one JSON file (raw leaderboard, roster, or draftables).
pub fn load_json(path: &Path) -> Result<Value> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

/// Write a raw JSON resource as fetched.
pub fn save_json(path: &Path, value: &Value) -> Result<()> {
    fs::write(path, serde_json::to_vec(value)?)?;
    Ok(())
}

/// Load the normalized data payload.
pub fn load_data(path: &Path) -> Result<MyData> {
    Ok(serde_json::from_str(&fs::read_to_string(path)?)?)
}

/// Persist the normalized data payload.
pub fn save_data(path: &Path, data: &MyData) -> Result<()> {
    fs::write(path, serde_json::to_vec_pretty(data)?)?;
    Ok(())
}
