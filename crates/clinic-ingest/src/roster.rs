//! Roster adapter.
//!
//! Tolerates `id` as number or string, a null `patient_id`, and `status`
//! in any casing. Unconsumed columns ride along in `Patient::extra`.

use serde_json::{Map, Value};
use tracing::warn;

use clinic_core::identity;
use clinic_model::{Patient, PatientStatus};

use crate::fields::{field, string_field};

const ID_FIELDS: [&str; 3] = ["id", "patient_id", "patientId"];
const NAME_FIELDS: [&str; 3] = ["name", "patient_name", "full_name"];
const PHONE_FIELDS: [&str; 2] = ["phone", "mobile"];
const PHOTO_FIELDS: [&str; 2] = ["photo", "photo_url"];

pub fn roster_from_values(rows: &[Value]) -> Vec<Patient> {
    rows.iter()
        .filter_map(Value::as_object)
        .map(patient_from_row)
        .collect()
}

fn patient_from_row(row: &Map<String, Value>) -> Patient {
    let key = identity::normalize_value(field(row, &ID_FIELDS));
    let status = match string_field(row, &["status"]) {
        // A roster that does not track status means every listed patient
        // is current.
        None => PatientStatus::Active,
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(status = %raw, key = %key, "unknown patient status, treating as Inactive");
            PatientStatus::Inactive
        }),
    };
    let consumed: Vec<&str> = ID_FIELDS
        .iter()
        .chain(NAME_FIELDS.iter())
        .chain(PHONE_FIELDS.iter())
        .chain(PHOTO_FIELDS.iter())
        .chain(["status"].iter())
        .copied()
        .collect();
    let extra: Map<String, Value> = row
        .iter()
        .filter(|(name, _)| !consumed.contains(&name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect();
    Patient {
        key,
        name: string_field(row, &NAME_FIELDS).unwrap_or_default(),
        status,
        phone: string_field(row, &PHONE_FIELDS),
        photo: string_field(row, &PHOTO_FIELDS),
        extra,
    }
}
