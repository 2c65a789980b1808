//! Change Sink Port
//!
//! Receives the full selection after every applied toggle or reset.

use crate::domain::value_objects::Selection;

/// Host callback for selection changes
pub trait ChangeSink {
    fn on_change(&mut self, selection: &Selection);
}

impl<F> ChangeSink for F
where
    F: FnMut(&Selection),
{
    fn on_change(&mut self, selection: &Selection) {
        self(selection)
    }
}
