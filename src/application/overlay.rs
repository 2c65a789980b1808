//! Overlay Lifecycle Controller
//!
//! Owns the overlay surface and the per-open session. Opening attaches the
//! surface and registers the outside-interaction listener; closing undoes
//! both exactly once and drops the session, so search text and focus never
//! survive a close.

use crate::domain::entities::ChoiceValue;
use crate::domain::ports::OverlaySurface;
use crate::domain::services::{place_overlay, Placement, PlacementRules};
use crate::domain::value_objects::{Rect, Size};

/// State that exists only while the overlay is open
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlaySession {
    pub search: String,
    pub focus: Option<ChoiceValue>,
    pub placement: Option<Placement>,
}

/// Closed → Open → Closed state machine around an overlay surface
pub struct OverlayController<S>
where
    S: OverlaySurface,
{
    surface: S,
    session: Option<OverlaySession>,
}

impl<S> OverlayController<S>
where
    S: OverlaySurface,
{
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            session: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Open the overlay. Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        if self.session.is_some() {
            return false;
        }

        self.surface.attach();
        self.surface.listen_outside();
        tracing::trace!("outside listener registered");
        self.session = Some(OverlaySession::default());
        tracing::debug!("overlay opened");
        true
    }

    /// Close the overlay. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if self.session.take().is_none() {
            return false;
        }

        self.surface.unlisten_outside();
        tracing::trace!("outside listener removed");
        self.surface.detach();
        tracing::debug!("overlay closed");
        true
    }

    /// Open if closed, close if open
    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn session(&self) -> Option<&OverlaySession> {
        self.session.as_ref()
    }

    /// Current search text, empty while closed
    pub fn search(&self) -> &str {
        self.session.as_ref().map_or("", |s| s.search.as_str())
    }

    pub fn focus(&self) -> Option<&ChoiceValue> {
        self.session.as_ref().and_then(|s| s.focus.as_ref())
    }

    /// Replace the search text; ignored while closed
    pub fn set_search(&mut self, search: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            session.search = search.into();
        }
    }

    /// Replace the focus; ignored while closed
    pub fn set_focus(&mut self, focus: Option<ChoiceValue>) {
        if let Some(session) = self.session.as_mut() {
            session.focus = focus;
        }
    }

    /// Clear search text and focus after a selection change
    pub fn clear_interaction(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.search.clear();
            session.focus = None;
        }
    }

    /// Recompute the overlay placement. No-op while closed.
    pub fn reposition(
        &mut self,
        trigger: Rect,
        content: Size,
        viewport: Rect,
        rules: PlacementRules,
    ) -> Option<Placement> {
        let session = self.session.as_mut()?;
        let placement = place_overlay(trigger, content, viewport, rules);

        if session.placement != Some(placement) {
            tracing::trace!(?placement, "overlay repositioned");
            session.placement = Some(placement);
            self.surface.place(placement);
        }
        Some(placement)
    }

    /// Whether a pointer press at `(col, row)` lies outside both the trigger
    /// and the overlay
    pub fn is_outside(&self, trigger: Rect, col: u16, row: u16) -> bool {
        if trigger.contains(col, row) {
            return false;
        }
        !self
            .session
            .as_ref()
            .and_then(|s| s.placement)
            .is_some_and(|p| p.area.contains(col, row))
    }

    /// Close on a pointer press outside trigger and overlay.
    /// Returns `true` if the overlay was closed.
    pub fn pointer_down(&mut self, trigger: Rect, col: u16, row: u16) -> bool {
        if self.is_open() && self.is_outside(trigger, col, row) {
            return self.close();
        }
        false
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}
