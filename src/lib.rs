//! Choosy - grouped, searchable select widget
//!
//! Choosy turns a list of choices and groups into a dropdown that supports
//! single, multiple and tags selection, search, keyboard navigation and an
//! overlay that places itself next to its trigger. The widget core is front
//! end agnostic; a crossterm front end and a select-control adapter ship
//! with the crate.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;

// Re-exports for convenience
pub use application::{Dropdown, DropdownProps, DropdownView, Labels, WidgetEvent};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{Choice, ChoiceValue, Entry, Group, RawEntry};
pub use domain::ports::{ChangeSink, OverlaySurface};
pub use domain::value_objects::{Selection, SelectionType};
pub use error::{ChoosyError, ChoosyResult, ConfigurationError};
pub use infrastructure::{ChangeEvent, JsonEventSink, ParsedControl, SelectControl};
