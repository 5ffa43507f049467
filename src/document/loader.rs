//! Loading directory records from JSON or JSON Lines files.
//!
//! A file whose first non-blank character is `[` is read as a JSON array;
//! anything else is read as JSON Lines, one record per non-empty line:
//! ```jsonl
//! {"name": {"en": "Blue Café", "ar": "مقهى الأزرق"}, "city": "Muscat"}
//! {"name": {"en": "Al Noor Pharmacy"}, "tags": ["pharmacy"]}
//! ```

use std::fs;
use std::path::Path;

use log::debug;
use serde::de::DeserializeOwned;

use crate::document::record::{CandidateRecord, CategoryRecord};
use crate::error::{DalilError, Result};

/// Parse records from a JSON array or JSON Lines string.
pub fn parse_records<T: DeserializeOwned>(content: &str) -> Result<Vec<T>> {
    if content.trim_start().starts_with('[') {
        return Ok(serde_json::from_str(content)?);
    }

    let mut records = Vec::new();
    for (line_num, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let record = serde_json::from_str(line).map_err(|e| {
            DalilError::invalid_argument(format!("Error parsing line {}: {}", line_num + 1, e))
        })?;
        records.push(record);
    }
    Ok(records)
}

fn load_records<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = fs::read_to_string(path)?;
    let records = parse_records(&content)?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Load candidate records from a file.
pub fn load_candidates<P: AsRef<Path>>(path: P) -> Result<Vec<CandidateRecord>> {
    load_records(path.as_ref())
}

/// Load category records from a file.
pub fn load_categories<P: AsRef<Path>>(path: P) -> Result<Vec<CategoryRecord>> {
    load_records(path.as_ref())
}
