//! JSON Event Sink
//!
//! Outputs selection changes as NDJSON for scripts and hosts.

use std::io::{self, Write};

use serde::Serialize;

use crate::domain::ports::ChangeSink;
use crate::domain::value_objects::Selection;

/// Custom event dispatched after a selection was written back
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeEvent {
    event: &'static str,
    pub selection: Selection,
}

impl ChangeEvent {
    pub fn new(selection: Selection) -> Self {
        Self {
            event: "change",
            selection,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "event": self.event,
            "selection": self.selection,
        })
    }
}

/// Change sink that writes one JSON line per change
pub struct JsonEventSink {
    writer: Box<dyn Write>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout()),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    pub fn with_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: Box::new(writer),
        }
    }

    fn write_event(&mut self, event: serde_json::Value) {
        if let Err(err) = writeln!(self.writer, "{}", event).and_then(|_| self.writer.flush()) {
            tracing::warn!(%err, "failed to write change event");
        }
    }
}

impl ChangeSink for JsonEventSink {
    fn on_change(&mut self, selection: &Selection) {
        self.write_event(ChangeEvent::new(selection.clone()).to_json());
    }
}
