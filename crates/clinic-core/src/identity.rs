//! Identifier normalization over raw JSON values.
//!
//! Roster and event sources disagree about how a patient is identified:
//! some rows carry a numeric primary key, some a formatted `P0001` string,
//! some a bare numeric string, some nothing at all. Everything funnels
//! through [`normalize_value`] so format drift between sources can never
//! split one patient into two identities.

use serde_json::Value;

use clinic_model::PatientKey;

/// Normalize any raw identifier representation. Total: never fails, never
/// drops. Unresolvable input yields a stable `Unresolved` sentinel so the
/// record stays visible in an unmatched bucket.
pub fn normalize_value(raw: Option<&Value>) -> PatientKey {
    match raw {
        Some(Value::Number(number)) => {
            if let Some(value) = number.as_i64() {
                PatientKey::from_numeric(value)
            } else if let Some(value) = number.as_f64() {
                normalize_float(value, number)
            } else {
                PatientKey::normalize(&number.to_string())
            }
        }
        Some(Value::String(text)) => PatientKey::normalize(text),
        Some(Value::Null) | None => PatientKey::normalize(""),
        Some(other) => PatientKey::normalize(&other.to_string()),
    }
}

/// JSON sources occasionally hand ids through as floats (`1.0`); a whole,
/// positive float is still a numeric id.
fn normalize_float(value: f64, original: &serde_json::Number) -> PatientKey {
    if value.fract() == 0.0 && value > 0.0 && value <= u64::MAX as f64 {
        PatientKey::Id(value as u64)
    } else {
        PatientKey::normalize(&original.to_string())
    }
}
