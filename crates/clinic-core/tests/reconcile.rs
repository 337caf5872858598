//! Reconciliation semantics: slot totality, tie-breaks, roster filtering.

use std::str::FromStr;

use clinic_core::{day_entries, latest_event, reconcile_day, reconcile_window};
use clinic_model::{
    AttendanceStatus, DayKey, EventPayload, EventRecord, MonthWindow, Patient, PatientKey,
    PatientStatus,
};

fn patient(id: u64, name: &str, status: PatientStatus) -> Patient {
    Patient {
        key: PatientKey::Id(id),
        name: name.to_string(),
        status,
        phone: None,
        photo: None,
        extra: serde_json::Map::new(),
    }
}

fn mark(id: &str, raw_patient: &str, raw_day: &str, status: &str, created_at: i64) -> EventRecord {
    EventRecord {
        id: id.to_string(),
        patient: PatientKey::normalize(raw_patient),
        day: clinic_core::parse_day(raw_day),
        created_at,
        payload: EventPayload::Attendance {
            status: AttendanceStatus::from_str(status).expect("valid status"),
        },
    }
}

#[test]
fn one_slot_per_active_patient() {
    let roster = vec![
        patient(1, "Asha Rao", PatientStatus::Active),
        patient(2, "Ben Okafor", PatientStatus::Inactive),
        patient(3, "Carmen Silva", PatientStatus::Active),
    ];
    let events = vec![mark("a1", "1", "2025-03-05", "Present", 100)];
    let slots = reconcile_day(&roster, &events, DayKey::from_ymd(2025, 3, 5));

    assert_eq!(slots.len(), 2);
    assert_eq!(slots[0].patient, PatientKey::Id(1));
    assert_eq!(slots[0].status, AttendanceStatus::Present);
    assert_eq!(slots[1].patient, PatientKey::Id(3));
    assert_eq!(slots[1].status, AttendanceStatus::NotMarked);
    assert!(slots[1].latest_event.is_none());
}

#[test]
fn later_correction_wins_despite_format_drift() {
    // Roster id is numeric, the first event carries a bare numeric string,
    // the correction a formatted id and a day-first date. All of it is one
    // patient, one day; the later correction wins.
    let roster = vec![patient(1, "Asha Rao", PatientStatus::Active)];
    let first = mark("a1", "1", "2025-03-05", "Present", 100);
    let correction = mark("a2", "P0001", "05-03-2025", "Absent", 200);

    for events in [
        vec![first.clone(), correction.clone()],
        vec![correction.clone(), first.clone()],
    ] {
        let slots = reconcile_day(&roster, &events, DayKey::from_ymd(2025, 3, 5));
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].status, AttendanceStatus::Absent);
        assert_eq!(
            slots[0].latest_event.as_ref().map(|event| event.id.as_str()),
            Some("a2")
        );
    }
}

#[test]
fn equal_timestamps_break_ties_by_id() {
    let roster = vec![patient(1, "Asha Rao", PatientStatus::Active)];
    let a = mark("a1", "1", "2025-03-05", "Present", 100);
    let b = mark("a2", "1", "2025-03-05", "Late", 100);

    for events in [vec![a.clone(), b.clone()], vec![b.clone(), a.clone()]] {
        let slots = reconcile_day(&roster, &events, DayKey::from_ymd(2025, 3, 5));
        assert_eq!(slots[0].status, AttendanceStatus::Late, "id a2 wins the tie");
    }
}

#[test]
fn window_yields_active_times_day_count_slots() {
    let roster = vec![
        patient(1, "Asha Rao", PatientStatus::Active),
        patient(2, "Ben Okafor", PatientStatus::Discharged),
        patient(3, "Carmen Silva", PatientStatus::Active),
    ];
    let window = MonthWindow::new(3, 2025).expect("valid window");
    let events = vec![mark("a1", "3", "2025-03-10", "Present", 50)];
    let slots = reconcile_window(&roster, &events, &window);

    assert_eq!(slots.len(), 2);
    let total: usize = slots.values().map(Vec::len).sum();
    assert_eq!(total, 2 * 31);

    let marked: Vec<_> = slots[&PatientKey::Id(3)]
        .iter()
        .filter(|slot| slot.status != AttendanceStatus::NotMarked)
        .collect();
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].day, DayKey::from_ymd(2025, 3, 10));
}

#[test]
fn events_for_unknown_patients_do_not_create_slots() {
    // Roster/event desync: the event references a patient no longer on the
    // roster. Day reconciliation skips it; the export matrix keeps it.
    let roster = vec![patient(1, "Asha Rao", PatientStatus::Active)];
    let events = vec![mark("a9", "99", "2025-03-05", "Present", 10)];
    let slots = reconcile_day(&roster, &events, DayKey::from_ymd(2025, 3, 5));
    assert_eq!(slots.len(), 1);
    assert_eq!(slots[0].status, AttendanceStatus::NotMarked);
}

#[test]
fn invalid_event_days_never_match() {
    let roster = vec![patient(1, "Asha Rao", PatientStatus::Active)];
    let events = vec![mark("a1", "1", "not a date", "Present", 10)];
    let slots = reconcile_day(&roster, &events, DayKey::from_ymd(2025, 3, 5));
    assert_eq!(slots[0].status, AttendanceStatus::NotMarked);

    // Querying an invalid day wildcards nothing either.
    assert!(latest_event(&events, &PatientKey::Id(1), DayKey::Invalid).is_none());
}

#[test]
fn day_entries_keep_every_log_in_order() {
    let roster = vec![patient(1, "Asha Rao", PatientStatus::Active)];
    let day = DayKey::from_ymd(2025, 3, 5);
    let call = |id: &str, created_at: i64| EventRecord {
        id: id.to_string(),
        patient: PatientKey::Id(1),
        day,
        created_at,
        payload: EventPayload::Call {
            notes: "follow-up".to_string(),
            outcome: None,
        },
    };
    let events = vec![call("c2", 200), call("c1", 100)];
    let entries = day_entries(&roster, &events, day);
    let ids: Vec<_> = entries[&PatientKey::Id(1)]
        .iter()
        .map(|event| event.id.as_str())
        .collect();
    assert_eq!(ids, vec!["c1", "c2"]);
}
