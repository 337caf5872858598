//! Intent application: the attendance state machine over snapshots.

use clinic_core::{apply, reconcile_day};
use clinic_model::{
    AttendanceStatus, DayKey, EventPayload, EventRecord, MutationIntent, Patient, PatientKey,
    PatientStatus,
};

fn roster() -> Vec<Patient> {
    vec![Patient {
        key: PatientKey::Id(1),
        name: "Asha Rao".to_string(),
        status: PatientStatus::Active,
        phone: None,
        photo: None,
        extra: serde_json::Map::new(),
    }]
}

fn status_on(events: &[EventRecord], day: DayKey) -> AttendanceStatus {
    reconcile_day(&roster(), events, day)[0].status
}

#[test]
fn mark_then_correct_then_reset() {
    let day = DayKey::from_ymd(2025, 3, 5);
    let key = PatientKey::Id(1);
    let events: Vec<EventRecord> = Vec::new();
    assert_eq!(status_on(&events, day), AttendanceStatus::NotMarked);

    let events = apply(
        &events,
        &MutationIntent::MarkAttendance {
            id: "a1".to_string(),
            patient: key.clone(),
            day,
            status: AttendanceStatus::Present,
        },
        100,
    );
    assert_eq!(status_on(&events, day), AttendanceStatus::Present);

    // A correction overwrites by tie-break; the first mark is retained.
    let events = apply(
        &events,
        &MutationIntent::MarkAttendance {
            id: "a2".to_string(),
            patient: key.clone(),
            day,
            status: AttendanceStatus::Late,
        },
        200,
    );
    assert_eq!(events.len(), 2);
    assert_eq!(status_on(&events, day), AttendanceStatus::Late);

    // Reset deletes the underlying events, not just the selection.
    let events = apply(&events, &MutationIntent::ResetAttendance { patient: key, day }, 300);
    assert!(events.is_empty());
    assert_eq!(status_on(&events, day), AttendanceStatus::NotMarked);
}

#[test]
fn reset_only_touches_its_own_day_and_patient() {
    let day = DayKey::from_ymd(2025, 3, 5);
    let other_day = DayKey::from_ymd(2025, 3, 6);
    let mark = |id: &str, patient: u64, day: DayKey| EventRecord {
        id: id.to_string(),
        patient: PatientKey::Id(patient),
        day,
        created_at: 100,
        payload: EventPayload::Attendance {
            status: AttendanceStatus::Present,
        },
    };
    let events = vec![mark("a1", 1, day), mark("a2", 1, other_day), mark("a3", 2, day)];
    let next = apply(
        &events,
        &MutationIntent::ResetAttendance {
            patient: PatientKey::Id(1),
            day,
        },
        300,
    );
    let ids: Vec<_> = next.iter().map(|event| event.id.as_str()).collect();
    assert_eq!(ids, vec!["a2", "a3"]);
    // Inputs are snapshots; the original is untouched.
    assert_eq!(events.len(), 3);
}

#[test]
fn delete_event_removes_by_kind_and_id() {
    let day = DayKey::from_ymd(2025, 3, 5);
    let call = EventRecord {
        id: "x1".to_string(),
        patient: PatientKey::Id(1),
        day,
        created_at: 50,
        payload: EventPayload::Call {
            notes: "no answer".to_string(),
            outcome: None,
        },
    };
    let attendance = EventRecord {
        id: "x1".to_string(),
        patient: PatientKey::Id(1),
        day,
        created_at: 60,
        payload: EventPayload::Attendance {
            status: AttendanceStatus::Present,
        },
    };
    let events = vec![call.clone(), attendance.clone()];

    // Ids are unique per kind, not across kinds; only the call goes.
    let next = apply(
        &events,
        &MutationIntent::DeleteEvent {
            kind: clinic_model::EventKind::Call,
            id: "x1".to_string(),
        },
        0,
    );
    assert_eq!(next, vec![attendance]);
}

#[test]
fn add_event_appends_without_mutating_input() {
    let events: Vec<EventRecord> = Vec::new();
    let added = EventRecord {
        id: "h1".to_string(),
        patient: PatientKey::Id(1),
        day: DayKey::from_ymd(2025, 3, 5),
        created_at: 10,
        payload: EventPayload::History {
            entry: "BP check".to_string(),
            category: Some("vitals".to_string()),
        },
    };
    let next = apply(&events, &MutationIntent::AddEvent { event: added.clone() }, 0);
    assert!(events.is_empty());
    assert_eq!(next, vec![added]);
}
