//! Event Sink Implementations
//!
//! Provides concrete implementations of ChangeSink:
//! - JsonEventSink: NDJSON output for scripts and hosts

mod json;

pub use json::{ChangeEvent, JsonEventSink};
