//! Application Layer
//!
//! Stateful components that orchestrate the domain services.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain selection or filtering rules (those are in Domain)
//! - Owns the interaction state between host, user and surface
//!
//! ## Components
//!
//! - `OverlayController` - Open/close lifecycle, listener registration, placement
//! - `Dropdown` - Widget shell: events in, change notifications and view out

pub mod overlay;
pub mod view;
pub mod widget;

pub use overlay::{OverlayController, OverlaySession};
pub use view::{
    ClosedView, DropdownView, GroupView, OverlayBody, OverlayView, RowView, TagChip,
    ROW_PREFIX_WIDTH,
};
pub use widget::{
    Dropdown, DropdownProps, Key, Labels, Layout, WidgetEvent, DEFAULT_PLACEHOLDER,
};
