use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use clinic_model::{EventKind, EventRecord, Patient};

use crate::events::events_from_values;
use crate::roster::roster_from_values;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a JSON array in {0}")]
    NotAnArray(PathBuf),
}

/// Load a JSON array of raw rows from disk.
pub fn load_values(path: &Path) -> Result<Vec<Value>, IngestError> {
    let text = fs::read_to_string(path)?;
    match serde_json::from_str(&text)? {
        Value::Array(rows) => {
            debug!(path = %path.display(), rows = rows.len(), "loaded source rows");
            Ok(rows)
        }
        _ => Err(IngestError::NotAnArray(path.to_path_buf())),
    }
}

pub fn load_roster(path: &Path) -> Result<Vec<Patient>, IngestError> {
    Ok(roster_from_values(&load_values(path)?))
}

pub fn load_events(path: &Path, kind: EventKind) -> Result<Vec<EventRecord>, IngestError> {
    Ok(events_from_values(&load_values(path)?, kind))
}
