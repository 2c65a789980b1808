//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure and hosts provide concrete implementations.

pub mod change_sink;
pub mod overlay_surface;

pub use change_sink::ChangeSink;
pub use overlay_surface::{OverlaySurface, RecordingSurface};
