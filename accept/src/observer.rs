//! Best-effort acceptance notification seam.

use std::fmt;

use serde::Serialize;

/// Which kind of source produced the accepted suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    Structured,
    Tail,
}

/// Telemetry payload emitted after a successful acceptance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AcceptEvent {
    pub provenance: Provenance,
    pub replace_start: u32,
    pub replace_end: u32,
    pub inserted_len: u32,
    pub caret_after: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverError(pub String);

impl fmt::Display for ObserverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Fire-and-forget hook invoked after an accept is applied.
///
/// A failing or slow observer must never delay or fail the accept itself;
/// the controller logs the error and moves on.
pub trait AcceptObserver {
    fn on_accepted(&self, event: &AcceptEvent) -> Result<(), ObserverError>;
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl AcceptObserver for NullObserver {
    fn on_accepted(&self, _event: &AcceptEvent) -> Result<(), ObserverError> {
        Ok(())
    }
}
