use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ids::PatientKey;

/// Roster lifecycle status. Input tolerates any casing; storage is
/// normalized to these variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatientStatus {
    Active,
    Inactive,
    Discharged,
    Critical,
}

impl PatientStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PatientStatus::Active => "Active",
            PatientStatus::Inactive => "Inactive",
            PatientStatus::Discharged => "Discharged",
            PatientStatus::Critical => "Critical",
        }
    }
}

impl fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatientStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "ACTIVE" => Ok(PatientStatus::Active),
            "INACTIVE" => Ok(PatientStatus::Inactive),
            "DISCHARGED" => Ok(PatientStatus::Discharged),
            "CRITICAL" => Ok(PatientStatus::Critical),
            _ => Err(format!("Unknown patient status: {}", s)),
        }
    }
}

/// A roster entry. The engine only ever reads patients; domain attributes
/// it does not interpret ride along in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Patient {
    pub key: PatientKey,
    pub name: String,
    pub status: PatientStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Patient {
    pub fn display_id(&self) -> String {
        self.key.display_id()
    }

    /// Only active patients are schedulable for attendance.
    pub fn is_active(&self) -> bool {
        self.status == PatientStatus::Active
    }
}
