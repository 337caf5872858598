use serde_json::{Map, Value};

/// First non-null value under any of the aliased field names.
pub(crate) fn field<'a>(row: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| row.get(*name))
        .find(|value| !value.is_null())
}

/// String form of an aliased field, trimmed. Numbers are rendered so a
/// numeric phone or note column does not vanish.
pub(crate) fn string_field(row: &Map<String, Value>, names: &[&str]) -> Option<String> {
    match field(row, names)? {
        Value::String(text) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

/// Monetary amount in integer cents. Accepts JSON numbers and numeric
/// strings; anything else is zero.
pub(crate) fn amount_cents_field(row: &Map<String, Value>, names: &[&str]) -> i64 {
    let amount = match field(row, names) {
        Some(Value::Number(number)) => number.as_f64(),
        Some(Value::String(text)) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    match amount {
        Some(value) if value.is_finite() => (value * 100.0).round() as i64,
        _ => 0,
    }
}
