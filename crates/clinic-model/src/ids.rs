#![deny(unsafe_code)]

use std::fmt;

/// Canonical, format-independent patient identity.
///
/// Roster rows and event rows reach us with the same patient spelled three
/// ways: a numeric primary key, a zero-padded formatted string (`P0001`), or
/// a bare numeric string. All of them must collapse to the same key:
/// `PatientKey::normalize("P0001")`, `normalize("1")`, `normalize("P1")` and
/// `from_numeric(1)` are equal. Identifiers with no extractable positive
/// integer become `Unresolved` sentinels so the record stays visible instead
/// of being silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PatientKey {
    /// Resolved numeric identity.
    Id(u64),
    /// Stable sentinel derived from the raw identifier (empty for missing).
    Unresolved(String),
}

impl PatientKey {
    /// Normalize a raw string identifier. Total: never fails.
    pub fn normalize(raw: &str) -> Self {
        let trimmed = raw.trim();
        if let Some(id) = parse_positive(trimmed) {
            return Self::Id(id);
        }
        let unprefixed = trimmed
            .strip_prefix('P')
            .or_else(|| trimmed.strip_prefix('p'));
        if let Some(digits) = unprefixed
            && let Some(id) = parse_positive(digits)
        {
            return Self::Id(id);
        }
        Self::Unresolved(trimmed.to_string())
    }

    /// Normalize a raw numeric identifier.
    pub fn from_numeric(raw: i64) -> Self {
        if raw > 0 {
            Self::Id(raw as u64)
        } else {
            Self::Unresolved(raw.to_string())
        }
    }

    /// The single source of truth for display formatting: `P` + digits
    /// zero-padded to 4 places. Unresolved keys render their raw form,
    /// or `-` when there is none.
    pub fn display_id(&self) -> String {
        match self {
            Self::Id(id) => format!("P{:04}", id),
            Self::Unresolved(raw) if raw.is_empty() => "-".to_string(),
            Self::Unresolved(raw) => raw.clone(),
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Id(_))
    }
}

/// Parse a trimmed string as a positive integer. Leading zeros are
/// tolerated; zero itself is not a valid patient id.
fn parse_positive(value: &str) -> Option<u64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match value.parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(id) => Some(id),
    }
}

impl fmt::Display for PatientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_id())
    }
}

impl serde::Serialize for PatientKey {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Id(_) => serializer.serialize_str(&self.display_id()),
            Self::Unresolved(raw) => serializer.serialize_str(raw),
        }
    }
}

impl<'de> serde::Deserialize<'de> for PatientKey {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct KeyVisitor;

        impl serde::de::Visitor<'_> for KeyVisitor {
            type Value = PatientKey;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a patient identifier string or number")
            }

            fn visit_str<E: serde::de::Error>(self, value: &str) -> Result<Self::Value, E> {
                Ok(PatientKey::normalize(value))
            }

            fn visit_u64<E: serde::de::Error>(self, value: u64) -> Result<Self::Value, E> {
                Ok(if value > 0 {
                    PatientKey::Id(value)
                } else {
                    PatientKey::Unresolved(value.to_string())
                })
            }

            fn visit_i64<E: serde::de::Error>(self, value: i64) -> Result<Self::Value, E> {
                Ok(PatientKey::from_numeric(value))
            }
        }

        deserializer.deserialize_any(KeyVisitor)
    }
}
