//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod config_warning;
mod geometry;
mod selection;
mod selection_type;

pub use config_warning::ConfigWarning;
pub use geometry::{Rect, Size};
pub use selection::Selection;
pub use selection_type::SelectionType;
