//! Matching semantics: canonical-key filtering, window bounds, diagnostics.

use clinic_core::matcher;
use clinic_model::{
    AttendanceStatus, DayKey, EventPayload, EventRecord, MonthWindow, PatientKey,
};

fn mark(id: &str, raw_patient: &str, raw_day: &str) -> EventRecord {
    EventRecord {
        id: id.to_string(),
        patient: PatientKey::normalize(raw_patient),
        day: clinic_core::parse_day(raw_day),
        created_at: 0,
        payload: EventPayload::Attendance {
            status: AttendanceStatus::Present,
        },
    }
}

#[test]
fn patient_filter_sees_through_format_drift() {
    let events = vec![
        mark("a1", "1", "2025-03-05"),
        mark("a2", "P0001", "2025-03-06"),
        mark("a3", "P1", "2025-03-07"),
        mark("a4", "2", "2025-03-05"),
    ];
    let matched = matcher::for_patient(&events, &PatientKey::Id(1));
    let ids: Vec<_> = matched.iter().map(|event| event.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2", "a3"]);
}

#[test]
fn day_filter_is_exact() {
    let events = vec![
        mark("a1", "1", "2025-03-05"),
        mark("a2", "1", "2025-03-06"),
    ];
    let day = DayKey::from_ymd(2025, 3, 5);
    let matched = matcher::for_patient_on_day(&events, &PatientKey::Id(1), day);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "a1");
}

#[test]
fn invalid_day_matches_nothing_in_either_direction() {
    let events = vec![mark("a1", "1", "garbage"), mark("a2", "1", "2025-03-05")];
    // An undated event never matches a real day...
    let matched =
        matcher::for_patient_on_day(&events, &PatientKey::Id(1), DayKey::from_ymd(2025, 3, 5));
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].id, "a2");
    // ...and querying the Invalid key is not a wildcard.
    assert!(matcher::for_patient_on_day(&events, &PatientKey::Id(1), DayKey::Invalid).is_empty());
}

#[test]
fn window_filter_keeps_only_the_month() {
    let window = MonthWindow::new(3, 2025).expect("valid window");
    let events = vec![
        mark("a1", "1", "2025-03-01"),
        mark("a2", "1", "2025-03-31"),
        mark("a3", "1", "2025-02-28"),
        mark("a4", "1", "2025-04-01"),
        mark("a5", "1", "not a date"),
    ];
    let matched = matcher::for_window(&events, &window);
    let ids: Vec<_> = matched.iter().map(|event| event.id.as_str()).collect();
    assert_eq!(ids, vec!["a1", "a2"]);
}

#[test]
fn diagnostics_partition_problem_rows() {
    let events = vec![
        mark("a1", "1", "2025-03-05"),
        mark("a2", "ward-7", "2025-03-05"),
        mark("a3", "1", "someday"),
    ];
    let undated: Vec<_> = matcher::undated(&events)
        .iter()
        .map(|event| event.id.as_str())
        .collect();
    let unresolved: Vec<_> = matcher::unresolved(&events)
        .iter()
        .map(|event| event.id.as_str())
        .collect();
    assert_eq!(undated, vec!["a3"]);
    assert_eq!(unresolved, vec!["a2"]);
}
