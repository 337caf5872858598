//! Source adapters for the reconciliation engine.
//!
//! External collaborators hand the engine raw JSON-like rows with
//! inconsistent identifiers, date encodings, and field names. The adapters
//! here translate each source's spelling into the canonical model shapes;
//! no engine logic ever sees a source-specific field name.

mod fields;

pub mod events;
pub mod loader;
pub mod report;
pub mod roster;

pub use events::{
    attendance_from_values, calls_from_values, events_from_values, history_from_values,
    payments_from_values,
};
pub use loader::{IngestError, load_events, load_roster, load_values};
pub use report::IngestReport;
pub use roster::roster_from_values;
