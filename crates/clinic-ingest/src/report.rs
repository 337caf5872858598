use serde::Serialize;

use clinic_core::matcher;
use clinic_model::{EventKind, EventRecord};

/// Ingest diagnostics for one event batch. Undated and unresolved rows are
/// retained in the batch; this report exists so the caller can say
/// "N records could not be dated" instead of letting them vanish.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub kind: EventKind,
    pub total: usize,
    pub undated: usize,
    pub unresolved: usize,
}

impl IngestReport {
    pub fn for_events(kind: EventKind, events: &[EventRecord]) -> Self {
        Self {
            kind,
            total: events.len(),
            undated: matcher::undated(events).len(),
            unresolved: matcher::unresolved(events).len(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.undated == 0 && self.unresolved == 0
    }
}
