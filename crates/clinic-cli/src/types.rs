use std::path::PathBuf;

use clinic_ingest::IngestReport;
use clinic_model::{AggregateSummary, AttendanceStatus, DayKey, MonthWindow};

pub struct DayRow {
    pub display_id: String,
    pub name: String,
    pub status: AttendanceStatus,
}

pub struct DayResult {
    pub day: DayKey,
    pub rows: Vec<DayRow>,
    pub summary: AggregateSummary,
    pub report: IngestReport,
}

pub struct MonthResult {
    pub window: MonthWindow,
    pub summary: AggregateSummary,
    pub reports: Vec<IngestReport>,
}

pub struct ExportResult {
    pub path: PathBuf,
    pub rows: usize,
    pub days: usize,
}

pub struct CheckResult {
    pub roster: Option<RosterCheck>,
    pub reports: Vec<IngestReport>,
}

pub struct RosterCheck {
    pub total: usize,
    pub active: usize,
    pub unresolved: usize,
}
