//! Selection type value object
//!
//! - `Single`: exactly one choice, the overlay closes after picking
//! - `Multiple`: any number of choices, selected ones pinned to the top
//! - `Tags`: `Multiple` semantics with chips and an inline search field

use serde::{Deserialize, Serialize};

/// How many choices can be selected and how the closed view looks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectionType {
    #[default]
    Single,
    Multiple,
    Tags,
}

impl SelectionType {
    /// Returns true for `Multiple` and `Tags`
    pub fn is_multi(&self) -> bool {
        !matches!(self, SelectionType::Single)
    }

    /// Parse from a string (case-insensitive)
    pub fn from_str_loose(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "single" => Some(SelectionType::Single),
            "multiple" | "multi" => Some(SelectionType::Multiple),
            "tags" | "tag" => Some(SelectionType::Tags),
            _ => None,
        }
    }
}

impl std::fmt::Display for SelectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionType::Single => write!(f, "single"),
            SelectionType::Multiple => write!(f, "multiple"),
            SelectionType::Tags => write!(f, "tags"),
        }
    }
}
