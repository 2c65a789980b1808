//! Terminal Overlay Surface
//!
//! Implements the OverlaySurface port on top of a crossterm terminal.
//! The outside-interaction listener is terminal mouse capture: enabled when
//! the overlay opens, disabled when it closes. Detaching blanks the rows the
//! overlay occupied.

use std::io::Write;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    queue,
    terminal::{Clear, ClearType},
};

use crate::domain::ports::OverlaySurface;
use crate::domain::services::Placement;

/// Overlay surface writing terminal commands to `W`
pub struct TerminalSurface<W>
where
    W: Write,
{
    out: W,
    attached: bool,
    capturing: bool,
    placement: Option<Placement>,
}

impl<W> TerminalSurface<W>
where
    W: Write,
{
    pub fn new(out: W) -> Self {
        Self {
            out,
            attached: false,
            capturing: false,
            placement: None,
        }
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_capturing(&self) -> bool {
        self.capturing
    }

    pub fn placement(&self) -> Option<Placement> {
        self.placement
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush(&mut self, what: &str, result: std::io::Result<()>) {
        if let Err(err) = result.and_then(|_| self.out.flush()) {
            tracing::warn!(%err, "terminal surface: {what} failed");
        }
    }
}

impl<W> OverlaySurface for TerminalSurface<W>
where
    W: Write,
{
    fn attach(&mut self) {
        self.attached = true;
    }

    fn detach(&mut self) {
        self.attached = false;
        let Some(placement) = self.placement.take() else {
            return;
        };

        let area = placement.area;
        let mut result = Ok(());
        for row in area.y..area.bottom() {
            result = result.and_then(|_| {
                queue!(
                    self.out,
                    cursor::MoveTo(0, row),
                    Clear(ClearType::CurrentLine)
                )
            });
        }
        self.flush("clearing overlay", result);
    }

    fn listen_outside(&mut self) {
        if self.capturing {
            return;
        }
        self.capturing = true;
        let result = queue!(self.out, EnableMouseCapture);
        self.flush("enabling mouse capture", result);
    }

    fn unlisten_outside(&mut self) {
        if !self.capturing {
            return;
        }
        self.capturing = false;
        let result = queue!(self.out, DisableMouseCapture);
        self.flush("disabling mouse capture", result);
    }

    fn place(&mut self, placement: Placement) {
        self.placement = Some(placement);
    }
}

impl<W> Drop for TerminalSurface<W>
where
    W: Write,
{
    fn drop(&mut self) {
        self.unlisten_outside();
    }
}
