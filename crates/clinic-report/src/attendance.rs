//! Attendance matrix CSV serialization.
//!
//! The engine hands over a dense grid; this sink owns the literal CSV
//! bytes, the canonical filename, and nothing else.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use clinic_core::AttendanceMatrix;

use crate::ReportError;

/// Canonical export filename: `patient-attendance-<yyyy-MM>.csv`.
pub fn export_filename(matrix: &AttendanceMatrix) -> String {
    format!("patient-attendance-{}.csv", matrix.window.label())
}

/// Write the matrix as CSV: one column per day of the window, one row per
/// patient. Cell columns always align because every row carries every day.
pub fn write_matrix_csv<W: Write>(matrix: &AttendanceMatrix, writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let mut header = vec!["Patient ID".to_string(), "Name".to_string()];
    header.extend(matrix.days.iter().map(ToString::to_string));
    csv_writer.write_record(&header)?;

    for row in &matrix.rows {
        let mut record = vec![row.display_id.clone(), row.name.clone()];
        for day in &matrix.days {
            record.push(row.cells.get(day).cloned().unwrap_or_default());
        }
        csv_writer.write_record(&record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Write the matrix into `dir` under its canonical filename and return
/// the full path.
pub fn write_matrix_file(matrix: &AttendanceMatrix, dir: &Path) -> Result<PathBuf, ReportError> {
    let path = dir.join(export_filename(matrix));
    let file = File::create(&path)?;
    write_matrix_csv(matrix, file)?;
    Ok(path)
}
