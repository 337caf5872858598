//! Per-patient-per-day reconciliation.
//!
//! The merge that every patient-records screen needs: given a roster
//! snapshot and an event snapshot, produce exactly one slot per active
//! patient per requested day. When several events compete for the same
//! (patient, day), e.g. a correction submitted twice, the winner is the
//! greatest `(created_at, id)`, a total order, never array position.

use std::collections::BTreeMap;

use tracing::warn;

use clinic_model::{DayKey, EventRecord, MonthWindow, Patient, PatientKey, ReconciledSlot};

use crate::matcher;

/// One slot per active roster patient for a single day. Patients with no
/// matching event get an explicit `NotMarked` slot, so aggregates can
/// count them instead of silently skipping them.
pub fn reconcile_day(
    roster: &[Patient],
    events: &[EventRecord],
    day: DayKey,
) -> Vec<ReconciledSlot> {
    active_patients(roster)
        .iter()
        .map(|patient| slot_for(&patient.key, events, day))
        .collect()
}

/// Slots for every active patient across every day of the window:
/// exactly `active_count x day_count` slots in total.
pub fn reconcile_window(
    roster: &[Patient],
    events: &[EventRecord],
    window: &MonthWindow,
) -> BTreeMap<PatientKey, Vec<ReconciledSlot>> {
    let days = window.days();
    let best = best_by_patient_day(events);
    let mut slots = BTreeMap::new();
    for patient in active_patients(roster) {
        let patient_slots = days
            .iter()
            .map(|day| match best.get(&(&patient.key, *day)) {
                Some(event) => slot_from_event(&patient.key, *day, event),
                None => ReconciledSlot::not_marked(patient.key.clone(), *day),
            })
            .collect();
        slots.insert(patient.key.clone(), patient_slots);
    }
    slots
}

/// Free-form kinds (calls, history) keep zero or more entries per patient
/// per day rather than collapsing to one slot. Entries are ordered by the
/// same `(created_at, id)` key reconciliation uses.
pub fn day_entries<'a>(
    roster: &[Patient],
    events: &'a [EventRecord],
    day: DayKey,
) -> BTreeMap<PatientKey, Vec<&'a EventRecord>> {
    let mut entries = BTreeMap::new();
    for patient in active_patients(roster) {
        let mut matched = matcher::for_patient_on_day(events, &patient.key, day);
        matched.sort_by_key(|event| event.sort_key());
        entries.insert(patient.key.clone(), matched);
    }
    entries
}

/// The winning event for one (patient, day), by the deterministic
/// tie-break. Used by both reconciliation and the matrix export so the
/// two can never disagree.
pub fn latest_event<'a>(
    events: &'a [EventRecord],
    key: &PatientKey,
    day: DayKey,
) -> Option<&'a EventRecord> {
    matcher::for_patient_on_day(events, key, day)
        .into_iter()
        .max_by_key(|event| event.sort_key())
}

/// Index of winning events keyed by (patient, day). Undated events never
/// enter the index.
pub(crate) fn best_by_patient_day(
    events: &[EventRecord],
) -> BTreeMap<(&PatientKey, DayKey), &EventRecord> {
    let mut best: BTreeMap<(&PatientKey, DayKey), &EventRecord> = BTreeMap::new();
    for event in events {
        if !event.day.is_valid() {
            continue;
        }
        best.entry((&event.patient, event.day))
            .and_modify(|current| {
                if event.sort_key() > current.sort_key() {
                    *current = event;
                }
            })
            .or_insert(event);
    }
    best
}

fn slot_for(key: &PatientKey, events: &[EventRecord], day: DayKey) -> ReconciledSlot {
    match latest_event(events, key, day) {
        Some(event) => slot_from_event(key, day, event),
        None => ReconciledSlot::not_marked(key.clone(), day),
    }
}

fn slot_from_event(key: &PatientKey, day: DayKey, event: &EventRecord) -> ReconciledSlot {
    ReconciledSlot {
        patient: key.clone(),
        day,
        status: event.attendance_status().unwrap_or_default(),
        latest_event: Some(event.clone()),
    }
}

/// Active roster members, deduplicated by canonical key. Duplicate roster
/// rows for the same identity would otherwise double-count every slot.
fn active_patients(roster: &[Patient]) -> Vec<&Patient> {
    let mut seen: Vec<&PatientKey> = Vec::new();
    let mut active = Vec::new();
    for patient in roster.iter().filter(|patient| patient.is_active()) {
        if seen.contains(&&patient.key) {
            warn!(key = %patient.key, "duplicate roster entry ignored");
            continue;
        }
        seen.push(&patient.key);
        active.push(patient);
    }
    active
}
