//! Domain Layer
//!
//! The dropdown's behaviour as pure data and state machines, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Choices, groups and host input entries
//! - `value_objects/` - Selection, selection type, geometry
//! - `services/` - Choice model, filter, render groups, selection, focus, placement
//! - `ports/` - Interfaces for the overlay surface and change notifications
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the terminal or the file system
//! 2. **Value identity** - Selection and focus are keyed by choice value
//! 3. **Ports & Adapters** - Rendering and host callbacks go through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
