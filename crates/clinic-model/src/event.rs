use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dates::DayKey;
use crate::ids::PatientKey;

/// The bounded set of record kinds the engine reconciles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Attendance,
    Call,
    History,
    Payment,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Attendance => "attendance",
            EventKind::Call => "call",
            EventKind::History => "history",
            EventKind::Payment => "payment",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Attendance slot status. `NotMarked` is the initial state and a
/// first-class value, not the absence of a map entry; aggregates count
/// it like any other status.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum AttendanceStatus {
    #[default]
    NotMarked,
    Present,
    Absent,
    Late,
}

impl AttendanceStatus {
    pub const ALL: [AttendanceStatus; 4] = [
        AttendanceStatus::NotMarked,
        AttendanceStatus::Present,
        AttendanceStatus::Absent,
        AttendanceStatus::Late,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::NotMarked => "NotMarked",
            AttendanceStatus::Present => "Present",
            AttendanceStatus::Absent => "Absent",
            AttendanceStatus::Late => "Late",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    /// Case-insensitive; tolerates space/underscore spellings of NotMarked.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace(['_', ' '], "");
        match normalized.as_str() {
            "NOTMARKED" => Ok(AttendanceStatus::NotMarked),
            "PRESENT" => Ok(AttendanceStatus::Present),
            "ABSENT" => Ok(AttendanceStatus::Absent),
            "LATE" => Ok(AttendanceStatus::Late),
            _ => Err(format!("Unknown attendance status: {}", s)),
        }
    }
}

/// Kind-specific event data, already translated from source field names
/// by the ingest adapters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventPayload {
    Attendance {
        status: AttendanceStatus,
    },
    Call {
        notes: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        outcome: Option<String>,
    },
    History {
        entry: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        category: Option<String>,
    },
    Payment {
        amount_cents: i64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        description: Option<String>,
    },
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::Attendance { .. } => EventKind::Attendance,
            EventPayload::Call { .. } => EventKind::Call,
            EventPayload::History { .. } => EventKind::History,
            EventPayload::Payment { .. } => EventKind::Payment,
        }
    }
}

/// One immutable event row: an attendance mark, a call log entry, a
/// medical-history entry, or a payment.
///
/// `created_at` (epoch milliseconds) is the tie-break when several events
/// exist for the same (patient, day); `(created_at, id)` is a total order,
/// so reconciliation is deterministic regardless of input array order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub patient: PatientKey,
    pub day: DayKey,
    pub created_at: i64,
    pub payload: EventPayload,
}

impl EventRecord {
    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }

    /// Deterministic ordering key: latest `created_at` wins, event id
    /// breaks exact timestamp ties.
    pub fn sort_key(&self) -> (i64, &str) {
        (self.created_at, self.id.as_str())
    }

    pub fn attendance_status(&self) -> Option<AttendanceStatus> {
        match &self.payload {
            EventPayload::Attendance { status } => Some(*status),
            _ => None,
        }
    }

    pub fn amount_cents(&self) -> Option<i64> {
        match &self.payload {
            EventPayload::Payment { amount_cents, .. } => Some(*amount_cents),
            _ => None,
        }
    }
}
