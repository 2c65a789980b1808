//! Domain Entities
//!
//! - `Choice` - A selectable item keyed by its value
//! - `Group` - An ordered bucket of choices
//! - `Entry` / `RawEntry` - Host input before normalization

mod choice;
mod group;

pub use choice::{Choice, ChoiceValue, GroupRef};
pub use group::{Entry, Group, RawEntry};
