//! Event adapters, one thin mapping per kind.
//!
//! This is the only place source-specific field names may appear: each
//! source spells the patient identifier, the date, and the payload fields
//! its own way, and everything funnels into the canonical `EventRecord`
//! before any engine logic runs.

use std::str::FromStr;

use serde_json::{Map, Value};
use tracing::warn;

use clinic_core::{datetime, identity};
use clinic_model::{AttendanceStatus, EventKind, EventPayload, EventRecord};

use crate::fields::{amount_cents_field, field, string_field};

const EVENT_ID_FIELDS: [&str; 2] = ["id", "_id"];
const PATIENT_FIELDS: [&str; 3] = ["patient_id", "patientId", "patient"];
const CREATED_AT_FIELDS: [&str; 3] = ["created_at", "createdAt", "timestamp"];

pub fn attendance_from_values(rows: &[Value]) -> Vec<EventRecord> {
    events_from_values(rows, EventKind::Attendance)
}

pub fn calls_from_values(rows: &[Value]) -> Vec<EventRecord> {
    events_from_values(rows, EventKind::Call)
}

pub fn history_from_values(rows: &[Value]) -> Vec<EventRecord> {
    events_from_values(rows, EventKind::History)
}

pub fn payments_from_values(rows: &[Value]) -> Vec<EventRecord> {
    events_from_values(rows, EventKind::Payment)
}

pub fn events_from_values(rows: &[Value], kind: EventKind) -> Vec<EventRecord> {
    rows.iter()
        .enumerate()
        .filter_map(|(index, row)| {
            row.as_object()
                .map(|object| event_from_row(object, kind, index))
        })
        .collect()
}

fn event_from_row(row: &Map<String, Value>, kind: EventKind, index: usize) -> EventRecord {
    EventRecord {
        // Sources that omit the row id get a deterministic synthesized one
        // so tie-breaking and deletion stay total.
        id: string_field(row, &EVENT_ID_FIELDS)
            .unwrap_or_else(|| format!("{}:{}", kind.as_str(), index)),
        patient: identity::normalize_value(field(row, &PATIENT_FIELDS)),
        day: datetime::parse_day_value(field(row, date_fields(kind))),
        created_at: datetime::parse_timestamp_ms(field(row, &CREATED_AT_FIELDS)),
        payload: payload_from_row(row, kind),
    }
}

fn date_fields(kind: EventKind) -> &'static [&'static str] {
    match kind {
        EventKind::Attendance => &["date", "attendance_date", "day"],
        EventKind::Call => &["call_date", "date", "called_at"],
        EventKind::History => &["date", "entry_date", "visit_date"],
        EventKind::Payment => &["date", "paid_on", "payment_date"],
    }
}

fn payload_from_row(row: &Map<String, Value>, kind: EventKind) -> EventPayload {
    match kind {
        EventKind::Attendance => EventPayload::Attendance {
            status: attendance_status(row),
        },
        EventKind::Call => EventPayload::Call {
            notes: string_field(row, &["notes", "remarks"]).unwrap_or_default(),
            outcome: string_field(row, &["outcome", "result"]),
        },
        EventKind::History => EventPayload::History {
            entry: string_field(row, &["entry", "description", "details"]).unwrap_or_default(),
            category: string_field(row, &["category", "type"]),
        },
        EventKind::Payment => EventPayload::Payment {
            amount_cents: amount_cents_field(row, &["amount", "fee", "paid_amount"]),
            description: string_field(row, &["description", "note"]),
        },
    }
}

fn attendance_status(row: &Map<String, Value>) -> AttendanceStatus {
    match string_field(row, &["status"]) {
        None => AttendanceStatus::NotMarked,
        Some(raw) => AttendanceStatus::from_str(&raw).unwrap_or_else(|_| {
            warn!(status = %raw, "unknown attendance status, treating as NotMarked");
            AttendanceStatus::NotMarked
        }),
    }
}
