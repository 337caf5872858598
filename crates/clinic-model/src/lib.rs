pub mod dates;
pub mod error;
pub mod event;
pub mod ids;
pub mod intent;
pub mod patient;
pub mod slot;

pub use dates::{DayKey, MonthWindow};
pub use error::{ModelError, Result};
pub use event::{AttendanceStatus, EventKind, EventPayload, EventRecord};
pub use ids::PatientKey;
pub use intent::MutationIntent;
pub use patient::{Patient, PatientStatus};
pub use slot::{AggregateSummary, ReconciledSlot, SummaryScope};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_any_casing() {
        assert_eq!("active".parse(), Ok(PatientStatus::Active));
        assert_eq!("DISCHARGED".parse(), Ok(PatientStatus::Discharged));
        assert_eq!(" Critical ".parse(), Ok(PatientStatus::Critical));
        assert!("retired".parse::<PatientStatus>().is_err());
    }

    #[test]
    fn event_record_serializes() {
        let event = EventRecord {
            id: "a1".to_string(),
            patient: PatientKey::normalize("P0007"),
            day: DayKey::from_ymd(2025, 3, 5),
            created_at: 100,
            payload: EventPayload::Attendance {
                status: AttendanceStatus::Present,
            },
        };
        let json = serde_json::to_string(&event).expect("serialize event");
        let round: EventRecord = serde_json::from_str(&json).expect("deserialize event");
        assert_eq!(round, event);
        assert_eq!(round.patient, PatientKey::Id(7));
        assert_eq!(round.kind(), EventKind::Attendance);
    }
}
