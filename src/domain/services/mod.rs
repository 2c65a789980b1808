//! Domain Services
//!
//! Pure functions and state machines over the choice model.
//! These services have no I/O dependencies and are easily testable.

pub mod choice_model;
pub mod filter;
pub mod focus;
pub mod placement;
pub mod render_groups;
pub mod selection_machine;

pub use choice_model::{
    classify, deduplicate, flatten, flatten_for_display, group_to_entry, normalize, normalize_raw,
};
pub use filter::{filter, rank, MatchRank};
pub use focus::{focusable, move_focus, Direction, FocusMove};
pub use placement::{place_overlay, Placement, PlacementRules, Side};
pub use render_groups::{build_render_groups, is_searchable, DEFAULT_SEARCH_THRESHOLD};
pub use selection_machine::{SelectionMachine, ToggleOutcome};
