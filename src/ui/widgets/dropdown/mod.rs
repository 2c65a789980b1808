//! Dropdown Widget
//!
//! Terminal front end for the dropdown shell in `application::widget`.
//!
//! # Module Structure
//!
//! - `render` - View model to text lines, with pointer targets
//! - `input` - Keyboard and mouse mapping and the interactive loop
//! - `script` - Key scripts for non-interactive runs

mod input;
mod render;
mod script;

// Re-export public API
pub use input::{
    key_to_action, mouse_to_action, run_interactive, InputAction, InputContext, OverlayFrame,
};
pub use render::{
    fit, paint, render_closed, render_help_bar, render_overlay, visible_window, HitTarget,
    LineStyle, OverlayLine,
};
pub use script::{parse_script, run_script};
