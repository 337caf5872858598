//! Patient identity resolution and temporal record reconciliation.
//!
//! Synchronous, pure, and single-threaded: every operation is a
//! deterministic function of its inputs (roster snapshot, event snapshot,
//! window) with no hidden state and no I/O. Given the same snapshots, every
//! call is idempotent, so callers may recompute on every render or cache
//! aggressively without correctness risk. Malformed input degrades to
//! explicit sentinels (`PatientKey::Unresolved`, `DayKey::Invalid`,
//! `NotMarked`) instead of errors.

pub mod aggregate;
pub mod datetime;
pub mod identity;
pub mod intent;
pub mod matcher;
pub mod matrix;
pub mod reconcile;

pub use aggregate::{payment_total_cents, summarize_day, summarize_window};
pub use datetime::{parse_day, parse_day_value, parse_timestamp_ms};
pub use identity::normalize_value;
pub use intent::apply;
pub use matrix::{AttendanceMatrix, MatrixRow, NO_EVENT_CELL, to_matrix};
pub use reconcile::{day_entries, latest_event, reconcile_day, reconcile_window};
