//! Pure intent application: the attendance state machine.
//!
//! Writes are the caller's job; the engine only computes what the event
//! snapshot looks like after a write has been persisted. Applying an
//! intent never mutates the input slice; it returns the new snapshot the
//! mutation sink would hand back.

use clinic_model::{EventKind, EventPayload, EventRecord, MutationIntent};

/// Fold one intent into an event snapshot.
///
/// `MarkAttendance` appends a correction; earlier marks for the same
/// (patient, day) are retained and simply lose the `(created_at, id)`
/// tie-break. `ResetAttendance` is the transition back to `NotMarked`: it
/// removes the underlying attendance events outright rather than hiding
/// them, so a reset day reconciles identically to a never-marked day.
pub fn apply(events: &[EventRecord], intent: &MutationIntent, created_at: i64) -> Vec<EventRecord> {
    match intent {
        MutationIntent::MarkAttendance {
            id,
            patient,
            day,
            status,
        } => {
            let mut next = events.to_vec();
            next.push(EventRecord {
                id: id.clone(),
                patient: patient.clone(),
                day: *day,
                created_at,
                payload: EventPayload::Attendance { status: *status },
            });
            next
        }
        MutationIntent::ResetAttendance { patient, day } => events
            .iter()
            .filter(|event| {
                !(event.kind() == EventKind::Attendance
                    && &event.patient == patient
                    && event.day == *day)
            })
            .cloned()
            .collect(),
        MutationIntent::AddEvent { event } => {
            let mut next = events.to_vec();
            next.push(event.clone());
            next
        }
        MutationIntent::DeleteEvent { kind, id } => events
            .iter()
            .filter(|event| !(event.kind() == *kind && event.id == *id))
            .cloned()
            .collect(),
    }
}
