//! Focus navigator
//!
//! Keyboard focus moves over the visible, enabled choices in render order.
//! Focus is tracked by value, so it survives the choice records being
//! rebuilt between renders.

use crate::domain::entities::{Choice, ChoiceValue, Group};

/// Arrow direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// What a focus move asks the shell to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusMove {
    /// Focus this value (or clear focus)
    Focus(Option<ChoiceValue>),
    /// Moving up past the first choice closes the overlay
    Close,
}

/// Values that can receive focus, in render order
pub fn focusable(render_groups: &[Group]) -> Vec<ChoiceValue> {
    render_groups
        .iter()
        .flat_map(|g| g.choices.iter())
        .filter(|c: &&Choice| !c.disabled)
        .map(|c| c.value.clone())
        .collect()
}

/// Compute the next focus.
///
/// Moving down past the last choice keeps focus on it; a focus that is no
/// longer visible restarts at the first choice.
pub fn move_focus(
    visible: &[ChoiceValue],
    current: Option<&ChoiceValue>,
    direction: Direction,
) -> FocusMove {
    let first = visible.first().cloned();

    let Some(current) = current else {
        return match direction {
            Direction::Up => FocusMove::Focus(None),
            Direction::Down => FocusMove::Focus(first),
        };
    };

    let Some(index) = visible.iter().position(|v| v == current) else {
        return FocusMove::Focus(first);
    };

    match direction {
        Direction::Up if index == 0 => FocusMove::Close,
        Direction::Up => FocusMove::Focus(Some(visible[index - 1].clone())),
        Direction::Down => {
            let next = (index + 1).min(visible.len() - 1);
            FocusMove::Focus(Some(visible[next].clone()))
        }
    }
}
