//! Scripted key input.
//!
//! Drives the dropdown from a comma separated key list instead of a
//! terminal, for CI and for environments without a TTY.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::application::Dropdown;
use crate::domain::ports::{ChangeSink, OverlaySurface};
use crate::domain::value_objects::Selection;
use crate::error::{ChoosyError, ChoosyResult};

use super::input::{key_to_action, InputAction, InputContext};

/// Parse a key script such as `down,down,space,enter` or `type:kiwi,enter`.
///
/// `type:<text>` expands to one key press per character.
pub fn parse_script(script: &str) -> ChoosyResult<Vec<KeyEvent>> {
    let mut keys = Vec::new();
    for token in script.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if let Some(text) = token.strip_prefix("type:") {
            keys.extend(
                text.chars()
                    .map(|c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)),
            );
            continue;
        }

        let key = match token.to_ascii_lowercase().as_str() {
            "up" => KeyEvent::new(KeyCode::Up, KeyModifiers::NONE),
            "down" => KeyEvent::new(KeyCode::Down, KeyModifiers::NONE),
            "space" => KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE),
            "enter" => KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE),
            "tab" => KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE),
            "esc" | "escape" => KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE),
            "backspace" => KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE),
            "ctrl-c" => KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            "q" => KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE),
            _ => {
                return Err(ChoosyError::InvalidKeyScript {
                    token: token.to_string(),
                })
            }
        };
        keys.push(key);
    }
    Ok(keys)
}

/// Feed `keys` to the dropdown.
///
/// Returns the selection on confirm, `None` on abort. Running out of keys
/// confirms.
pub fn run_script<S, C>(dropdown: &mut Dropdown<S, C>, keys: &[KeyEvent]) -> Option<Selection>
where
    S: OverlaySurface,
    C: ChangeSink,
{
    for key in keys {
        match key_to_action(*key, &InputContext::of(dropdown)) {
            Some(InputAction::Widget(event)) => dropdown.handle(event),
            Some(InputAction::Confirm) => return Some(dropdown.selection().clone()),
            Some(InputAction::Abort) => {
                tracing::debug!("script aborted");
                return None;
            }
            None => {}
        }
    }
    Some(dropdown.selection().clone())
}
