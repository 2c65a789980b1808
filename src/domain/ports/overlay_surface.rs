//! Overlay Surface Port
//!
//! The place the overlay is drawn into and the source of "pointer
//! interaction outside the widget" notifications. The overlay controller
//! owns its surface exclusively and drives it strictly from open/close.

use crate::domain::services::Placement;

/// Rendering surface for the dropdown overlay
///
/// Implementations can be:
/// - TerminalSurface: alternate rows of a crossterm terminal
/// - RecordingSurface: headless, keeps counters for scripted runs and tests
pub trait OverlaySurface {
    /// Make the overlay part of the visible output
    fn attach(&mut self);

    /// Remove the overlay from the visible output
    fn detach(&mut self);

    /// Start reporting pointer interaction anywhere on screen
    fn listen_outside(&mut self);

    /// Stop reporting pointer interaction
    fn unlisten_outside(&mut self);

    /// Move the overlay to a newly computed placement
    fn place(&mut self, placement: Placement);
}

/// Headless surface that records what the controller asked for
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSurface {
    pub attached: bool,
    pub listening: bool,
    pub attach_count: usize,
    pub detach_count: usize,
    pub listen_count: usize,
    pub unlisten_count: usize,
    pub placement: Option<Placement>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered listeners not yet removed
    pub fn active_listeners(&self) -> usize {
        self.listen_count.saturating_sub(self.unlisten_count)
    }
}

impl OverlaySurface for RecordingSurface {
    fn attach(&mut self) {
        self.attached = true;
        self.attach_count += 1;
    }

    fn detach(&mut self) {
        self.attached = false;
        self.placement = None;
        self.detach_count += 1;
    }

    fn listen_outside(&mut self) {
        self.listening = true;
        self.listen_count += 1;
    }

    fn unlisten_outside(&mut self) {
        self.listening = false;
        self.unlisten_count += 1;
    }

    fn place(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }
}

impl<S: OverlaySurface + ?Sized> OverlaySurface for &mut S {
    fn attach(&mut self) {
        (**self).attach();
    }

    fn detach(&mut self) {
        (**self).detach();
    }

    fn listen_outside(&mut self) {
        (**self).listen_outside();
    }

    fn unlisten_outside(&mut self) {
        (**self).unlisten_outside();
    }

    fn place(&mut self, placement: Placement) {
        (**self).place(placement);
    }
}
