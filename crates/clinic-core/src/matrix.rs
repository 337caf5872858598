//! Dense patient x day projection for tabular export.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use clinic_model::{DayKey, EventRecord, MonthWindow, Patient, PatientKey};

use crate::reconcile::best_by_patient_day;

/// Cell sentinel for a day with no event. Exported columns always align
/// across the window because every cell is present, sentinel or not.
pub const NO_EVENT_CELL: &str = "-";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatrixRow {
    pub patient: PatientKey,
    pub display_id: String,
    /// Empty for patients that appear only in events (removed from the
    /// roster after the event was recorded).
    pub name: String,
    pub cells: BTreeMap<DayKey, String>,
}

/// A month of reconciled attendance as a dense grid. Serialization to
/// CSV/XLSX is the export sink's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceMatrix {
    pub window: MonthWindow,
    pub days: Vec<DayKey>,
    pub rows: Vec<MatrixRow>,
}

/// Project a month of events onto the roster.
///
/// The row set is the union of roster patients and patients appearing only
/// in events for the window, deduplicated by canonical key, so one patient
/// spelled two ways across the sources cannot produce two rows. Rows are
/// ordered by key.
pub fn to_matrix(
    roster: &[Patient],
    events: &[EventRecord],
    window: &MonthWindow,
) -> AttendanceMatrix {
    let days = window.days();
    let best = best_by_patient_day(events);

    let mut names: BTreeMap<&PatientKey, &str> = BTreeMap::new();
    for patient in roster {
        names.entry(&patient.key).or_insert(patient.name.as_str());
    }

    let mut keys: BTreeSet<&PatientKey> = roster.iter().map(|patient| &patient.key).collect();
    for event in events {
        if window.contains(event.day) {
            keys.insert(&event.patient);
        }
    }

    let rows = keys
        .into_iter()
        .map(|key| {
            let cells = days
                .iter()
                .map(|day| {
                    let value = best
                        .get(&(key, *day))
                        .and_then(|event| event.attendance_status())
                        .map_or(NO_EVENT_CELL.to_string(), |status| {
                            status.as_str().to_string()
                        });
                    (*day, value)
                })
                .collect();
            MatrixRow {
                patient: key.clone(),
                display_id: key.display_id(),
                name: names.get(key).copied().unwrap_or_default().to_string(),
                cells,
            }
        })
        .collect();

    AttendanceMatrix {
        window: *window,
        days,
        rows,
    }
}
