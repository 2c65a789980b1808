//! Infrastructure Layer
//!
//! Concrete implementations of domain ports and host-facing adapters.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `control` - Select control adapter (TOML/JSON in, write-back out)
//! - `events/` - Change event sinks
//! - `terminal_surface` - OverlaySurface on a crossterm terminal

pub mod control;
pub mod events;
pub mod terminal_surface;

// Re-export for convenience
pub use control::{ControlNode, ControlOption, ParsedControl, SelectControl};
pub use events::{ChangeEvent, JsonEventSink};
pub use terminal_surface::TerminalSurface;
