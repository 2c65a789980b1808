//! Selection state machine
//!
//! Owns the authoritative selection of a widget. All mutation goes through
//! `toggle` and `reset`; the shell decides what to do with the outcome
//! (notify the host, clear the search, close the overlay).

use crate::domain::entities::Choice;
use crate::domain::value_objects::{Selection, SelectionType};

/// Result of a selection transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The transition was applied and the host must be notified
    Changed,
    /// The transition was a no-op (disabled choice, nothing to clear)
    Ignored,
}

impl ToggleOutcome {
    pub fn is_changed(self) -> bool {
        self == ToggleOutcome::Changed
    }
}

/// Value-keyed selection plus the rules of its selection type
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelectionMachine {
    selection_type: SelectionType,
    selection: Selection,
}

impl SelectionMachine {
    pub fn new(selection_type: SelectionType, initial: Selection) -> Self {
        Self {
            selection_type,
            selection: initial,
        }
    }

    pub fn selection_type(&self) -> SelectionType {
        self.selection_type
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Copy of the current selection, as handed to the host
    pub fn snapshot(&self) -> Selection {
        self.selection.clone()
    }

    /// Toggle a choice.
    ///
    /// `single` replaces the selection with `choice` while keeping selected
    /// disabled choices; re-selecting the current choice is accepted.
    /// `multiple` and `tags` flip membership of `choice` only.
    pub fn toggle(&mut self, choice: &Choice, all_choices: &[Choice]) -> ToggleOutcome {
        if choice.disabled {
            return ToggleOutcome::Ignored;
        }

        if self.selection_type.is_multi() {
            self.selection.flip(&choice.value);
        } else {
            let mut next = self.sticky(all_choices);
            next.insert(&choice.value);
            self.selection = next;
        }

        ToggleOutcome::Changed
    }

    /// Clear every selectable choice, keeping selected disabled ones
    pub fn reset(&mut self, all_choices: &[Choice]) -> ToggleOutcome {
        if !self.has_clearable(all_choices) {
            return ToggleOutcome::Ignored;
        }
        self.selection = self.sticky(all_choices);
        ToggleOutcome::Changed
    }

    /// Whether the reset control is offered.
    ///
    /// A single select can only be cleared back to a placeholder.
    pub fn is_clearable(&self, all_choices: &[Choice], has_placeholder: bool) -> bool {
        if !self.selection_type.is_multi() && !has_placeholder {
            return false;
        }
        self.has_clearable(all_choices)
    }

    fn has_clearable(&self, all_choices: &[Choice]) -> bool {
        all_choices
            .iter()
            .any(|c| !c.disabled && self.selection.is_selected(c))
    }

    fn sticky(&self, all_choices: &[Choice]) -> Selection {
        let mut kept = Selection::new();
        for choice in all_choices
            .iter()
            .filter(|c| c.disabled && self.selection.is_selected(c))
        {
            kept.insert(&choice.value);
        }
        kept
    }
}
