//! Terminal front end
//!
//! - `theme` - Colors and icons, each icon with an ASCII twin
//! - `terminal` - Capability probing
//! - `widgets` - Interactive widgets

pub mod terminal;
pub mod theme;
pub mod widgets;
