use serde::{Deserialize, Serialize};

use crate::dates::DayKey;
use crate::event::{AttendanceStatus, EventKind, EventRecord};
use crate::ids::PatientKey;

/// A caller-side write expressed as data.
///
/// The engine never performs create/update/delete itself; the caller hands
/// an intent to its storage layer, then passes the engine the resulting new
/// event snapshot. `clinic_core::intent::apply` computes that snapshot as a
/// pure function, which is also how the attendance state machine
/// (`NotMarked -> Present|Absent|Late -> NotMarked`) is realized: a reset
/// removes the underlying events rather than hiding them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum MutationIntent {
    MarkAttendance {
        id: String,
        patient: PatientKey,
        day: DayKey,
        status: AttendanceStatus,
    },
    ResetAttendance {
        patient: PatientKey,
        day: DayKey,
    },
    AddEvent {
        event: EventRecord,
    },
    DeleteEvent {
        kind: EventKind,
        id: String,
    },
}
