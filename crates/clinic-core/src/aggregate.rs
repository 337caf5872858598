//! Rollup statistics over reconciled slot sets.

use std::collections::{BTreeMap, BTreeSet};

use clinic_model::{
    AggregateSummary, AttendanceStatus, DayKey, EventRecord, MonthWindow, PatientKey,
    ReconciledSlot, SummaryScope,
};

/// Summarize a single day's slots.
pub fn summarize_day(slots: &[ReconciledSlot], day: DayKey) -> AggregateSummary {
    fold(slots.iter(), SummaryScope::Day(day))
}

/// Summarize a whole window. `total_patients` is the distinct patient
/// count, not the slot count: a month of slots for one patient is still
/// one patient.
pub fn summarize_window(
    slots: &BTreeMap<PatientKey, Vec<ReconciledSlot>>,
    window: &MonthWindow,
) -> AggregateSummary {
    fold(slots.values().flatten(), SummaryScope::Month(*window))
}

/// Sum payment amounts whose day falls inside the window. Undated or
/// out-of-window payments are never included; partial windows are never
/// silently extrapolated.
pub fn payment_total_cents(events: &[EventRecord], window: &MonthWindow) -> i64 {
    events
        .iter()
        .filter(|event| window.contains(event.day))
        .filter_map(EventRecord::amount_cents)
        .sum()
}

fn fold<'a>(
    slots: impl Iterator<Item = &'a ReconciledSlot>,
    scope: SummaryScope,
) -> AggregateSummary {
    let mut counts: BTreeMap<AttendanceStatus, usize> = AttendanceStatus::ALL
        .iter()
        .map(|status| (*status, 0))
        .collect();
    let mut patients: BTreeSet<&PatientKey> = BTreeSet::new();
    for slot in slots {
        *counts.entry(slot.status).or_insert(0) += 1;
        patients.insert(&slot.patient);
    }
    let not_marked = counts
        .get(&AttendanceStatus::NotMarked)
        .copied()
        .unwrap_or(0);
    AggregateSummary {
        scope,
        total_patients: patients.len(),
        counts,
        not_marked,
        financial_total_cents: None,
    }
}
