//! Event filtering by canonical identity and calendar window.
//!
//! Matching always goes through the normalized [`PatientKey`] and
//! [`DayKey`], never raw string or number comparison, so format drift
//! between the roster source and an event source cannot cause false
//! negatives.

use clinic_model::{DayKey, EventRecord, MonthWindow, PatientKey};

/// Every event belonging to the given patient.
pub fn for_patient<'a>(events: &'a [EventRecord], key: &PatientKey) -> Vec<&'a EventRecord> {
    events.iter().filter(|event| &event.patient == key).collect()
}

/// Events for one patient on one calendar day. An `Invalid` day never
/// matches anything: excluded, not wildcarded.
pub fn for_patient_on_day<'a>(
    events: &'a [EventRecord],
    key: &PatientKey,
    day: DayKey,
) -> Vec<&'a EventRecord> {
    if !day.is_valid() {
        return Vec::new();
    }
    events
        .iter()
        .filter(|event| &event.patient == key && event.day == day)
        .collect()
}

/// Events whose day falls inside the month window. Undated events are
/// excluded here but stay in the caller's raw set for diagnostics.
pub fn for_window<'a>(events: &'a [EventRecord], window: &MonthWindow) -> Vec<&'a EventRecord> {
    events
        .iter()
        .filter(|event| window.contains(event.day))
        .collect()
}

/// Events whose date could not be parsed. Retained so callers can surface
/// "N records could not be dated" instead of letting rows vanish.
pub fn undated<'a>(events: &'a [EventRecord]) -> Vec<&'a EventRecord> {
    events.iter().filter(|event| !event.day.is_valid()).collect()
}

/// Events whose identity normalized to the sentinel bucket.
pub fn unresolved<'a>(events: &'a [EventRecord]) -> Vec<&'a EventRecord> {
    events
        .iter()
        .filter(|event| !event.patient.is_resolved())
        .collect()
}
