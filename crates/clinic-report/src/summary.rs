//! Aggregate summary JSON serialization.

use std::io::Write;

use clinic_model::{AggregateSummary, SummaryScope};

use crate::ReportError;

/// Canonical summary filename for the scope the summary was computed over.
pub fn summary_filename(summary: &AggregateSummary) -> String {
    match summary.scope {
        SummaryScope::Day(day) => format!("attendance-summary-{}.json", day),
        SummaryScope::Month(window) => format!("attendance-summary-{}.json", window.label()),
    }
}

/// Write the summary as pretty-printed JSON.
pub fn write_summary_json<W: Write>(
    summary: &AggregateSummary,
    writer: W,
) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(writer, summary)?;
    Ok(())
}
