use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::dates::{DayKey, MonthWindow};
use crate::event::{AttendanceStatus, EventRecord};
use crate::ids::PatientKey;

/// The single authoritative status for one patient on one day, after
/// merging all raw events. A view: recomputed from snapshots, never
/// persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReconciledSlot {
    pub patient: PatientKey,
    pub day: DayKey,
    pub status: AttendanceStatus,
    /// The winning event (greatest `(created_at, id)`), or `None` for a
    /// `NotMarked` slot. Discarded duplicates stay in the raw event set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest_event: Option<EventRecord>,
}

impl ReconciledSlot {
    pub fn not_marked(patient: PatientKey, day: DayKey) -> Self {
        Self {
            patient,
            day,
            status: AttendanceStatus::NotMarked,
            latest_event: None,
        }
    }
}

/// What an `AggregateSummary` was computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryScope {
    Day(DayKey),
    Month(MonthWindow),
}

/// Rollup over a reconciled slot set. Derived strictly from the slots it
/// was computed from and recomputed whole, never incrementally patched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateSummary {
    pub scope: SummaryScope,
    /// Distinct patients, not slot count: a month of slots for one
    /// patient is still one patient.
    pub total_patients: usize,
    /// Slot count per status; every status is present, zero or not.
    pub counts: BTreeMap<AttendanceStatus, usize>,
    pub not_marked: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub financial_total_cents: Option<i64>,
}

impl AggregateSummary {
    /// Total number of slots the summary was computed over.
    pub fn slot_count(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn count(&self, status: AttendanceStatus) -> usize {
        self.counts.get(&status).copied().unwrap_or(0)
    }
}
