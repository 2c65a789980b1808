//! Design tokens for the dropdown front end.
//!
//! Design constraints:
//! - Only 4 semantic colors (`colors::*`)
//! - All icons must be sourced from this module, with an ASCII twin

use crossterm::style::Color;

pub mod colors {
    use super::Color;

    /// #06B6D4
    pub const FOCUS: Color = Color::Cyan;
    /// #22C55E
    pub const SELECTED: Color = Color::Green;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";

    pub const CURSOR: &str = "›";
    pub const CHEVRON_DOWN: &str = "▾";
    pub const CHEVRON_UP: &str = "▴";
    pub const SEARCH: &str = "⌕";
    pub const REMOVE: &str = "×";
    pub const LOCKED: &str = "·";
    pub const RULE: &str = "─";
}

pub mod icons_ascii {
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";

    pub const CURSOR: &str = ">";
    pub const CHEVRON_DOWN: &str = "v";
    pub const CHEVRON_UP: &str = "^";
    pub const SEARCH: &str = "?";
    pub const REMOVE: &str = "x";
    pub const LOCKED: &str = "-";
    pub const RULE: &str = "-";
}

/// Icon set picked once from terminal capabilities
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Icons {
    pub selected: &'static str,
    pub unselected: &'static str,
    pub cursor: &'static str,
    pub chevron_down: &'static str,
    pub chevron_up: &'static str,
    pub search: &'static str,
    pub remove: &'static str,
    pub locked: &'static str,
    pub rule: &'static str,
}

impl Icons {
    pub fn new(unicode: bool) -> Self {
        if unicode {
            Self {
                selected: icons::SELECTED,
                unselected: icons::UNSELECTED,
                cursor: icons::CURSOR,
                chevron_down: icons::CHEVRON_DOWN,
                chevron_up: icons::CHEVRON_UP,
                search: icons::SEARCH,
                remove: icons::REMOVE,
                locked: icons::LOCKED,
                rule: icons::RULE,
            }
        } else {
            Self {
                selected: icons_ascii::SELECTED,
                unselected: icons_ascii::UNSELECTED,
                cursor: icons_ascii::CURSOR,
                chevron_down: icons_ascii::CHEVRON_DOWN,
                chevron_up: icons_ascii::CHEVRON_UP,
                search: icons_ascii::SEARCH,
                remove: icons_ascii::REMOVE,
                locked: icons_ascii::LOCKED,
                rule: icons_ascii::RULE,
            }
        }
    }
}
