//! Export sinks for reconciled attendance data. Pure I/O: the engine
//! computes, this crate serializes.

pub mod attendance;
pub mod summary;

use thiserror::Error;

pub use attendance::{export_filename, write_matrix_csv, write_matrix_file};
pub use summary::{summary_filename, write_summary_json};

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
