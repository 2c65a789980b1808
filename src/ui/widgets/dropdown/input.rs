//! Keyboard and mouse input handling and the interactive loop.
//!
//! Key and mouse events are mapped to [`InputAction`]s against a snapshot of
//! the widget state, so the mapping stays a pure function.

use std::io::{self, Stdout, Write};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::application::{Dropdown, Key, Layout, WidgetEvent};
use crate::domain::entities::ChoiceValue;
use crate::domain::ports::{ChangeSink, OverlaySurface};
use crate::domain::value_objects::{Rect, Selection, SelectionType};
use crate::infrastructure::TerminalSurface;
use crate::ui::terminal::TerminalCapabilities;
use crate::ui::theme::Icons;

use super::render::{
    paint, render_closed, render_help_bar, render_overlay, visible_window, HitTarget,
};

/// Screen row of the help bar
const HELP_ROW: u16 = 0;
/// Screen row of the opener
const TRIGGER_ROW: u16 = 1;

/// Result of one input event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    Widget(WidgetEvent),
    /// Accept the current selection
    Confirm,
    /// Leave without accepting
    Abort,
}

/// Widget state the mapping depends on
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputContext {
    pub is_open: bool,
    pub has_focus: bool,
    /// Printable keys edit a search text
    pub accepts_text: bool,
    pub search: String,
    /// Tag removed by Backspace on an empty search
    pub last_removable_tag: Option<ChoiceValue>,
}

impl InputContext {
    pub fn of<S, C>(dropdown: &Dropdown<S, C>) -> Self
    where
        S: OverlaySurface,
        C: ChangeSink,
    {
        let tags = dropdown.selection_type() == SelectionType::Tags;
        let last_removable_tag = if tags {
            dropdown
                .selected_choices()
                .iter()
                .rev()
                .find(|c| !c.disabled)
                .map(|c| c.value.clone())
        } else {
            None
        };

        Self {
            is_open: dropdown.is_open(),
            has_focus: dropdown.focus().is_some(),
            accepts_text: tags || (dropdown.is_open() && dropdown.is_searchable()),
            search: dropdown.search().to_string(),
            last_removable_tag,
        }
    }
}

/// Overlay rows as last drawn, for pointer hit testing
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverlayFrame {
    pub area: Rect,
    pub targets: Vec<Option<HitTarget>>,
}

impl OverlayFrame {
    fn target_at(&self, row: u16) -> Option<&HitTarget> {
        let index = usize::from(row.checked_sub(self.area.y)?);
        self.targets.get(index)?.as_ref()
    }
}

fn widget(event: WidgetEvent) -> Option<InputAction> {
    Some(InputAction::Widget(event))
}

/// Convert a keyboard event to an InputAction
pub fn key_to_action(key: KeyEvent, ctx: &InputContext) -> Option<InputAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(InputAction::Abort);
    }

    match key.code {
        KeyCode::Up => widget(WidgetEvent::Key(Key::Up)),
        KeyCode::Down => widget(WidgetEvent::Key(Key::Down)),
        KeyCode::Tab => widget(WidgetEvent::Key(Key::Tab)),
        KeyCode::Esc if ctx.is_open => widget(WidgetEvent::Key(Key::Escape)),
        KeyCode::Esc => Some(InputAction::Abort),
        KeyCode::Enter if ctx.has_focus => widget(WidgetEvent::Key(Key::Enter)),
        KeyCode::Enter => Some(InputAction::Confirm),
        KeyCode::Char(' ') if ctx.has_focus => widget(WidgetEvent::Key(Key::Space)),
        KeyCode::Char(' ') if !ctx.is_open => widget(WidgetEvent::OpenerActivated),
        KeyCode::Backspace if ctx.accepts_text && !ctx.search.is_empty() => {
            let mut search = ctx.search.clone();
            search.pop();
            widget(WidgetEvent::SearchInput(search))
        }
        KeyCode::Backspace => ctx
            .last_removable_tag
            .clone()
            .and_then(|value| widget(WidgetEvent::TagRemoved(value))),
        KeyCode::Char(c) if ctx.accepts_text => {
            widget(WidgetEvent::SearchInput(format!("{}{c}", ctx.search)))
        }
        KeyCode::Char('k') => widget(WidgetEvent::Key(Key::Up)),
        KeyCode::Char('j') => widget(WidgetEvent::Key(Key::Down)),
        KeyCode::Char('q') => Some(InputAction::Abort),
        _ => None,
    }
}

/// Convert a mouse event to an InputAction
pub fn mouse_to_action(
    event: MouseEvent,
    trigger: Rect,
    frame: Option<&OverlayFrame>,
) -> Option<InputAction> {
    let (col, row) = (event.column, event.row);
    let in_overlay = frame.filter(|f| f.area.contains(col, row));

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if trigger.contains(col, row) {
                return widget(WidgetEvent::OpenerActivated);
            }
            let Some(frame) = in_overlay else {
                return widget(WidgetEvent::PointerDown { col, row });
            };
            match frame.target_at(row)? {
                HitTarget::Search => widget(WidgetEvent::SearchFocused),
                HitTarget::Reset => widget(WidgetEvent::ResetActivated),
                HitTarget::Choice(value) => widget(WidgetEvent::ChoiceActivated(value.clone())),
            }
        }
        MouseEventKind::Moved => {
            let frame = in_overlay?;
            match frame.target_at(row) {
                Some(HitTarget::Choice(value)) => {
                    widget(WidgetEvent::ChoiceHovered(Some(value.clone())))
                }
                _ => widget(WidgetEvent::ChoiceHovered(None)),
            }
        }
        _ => None,
    }
}

fn screen_layout(width: u16, height: u16) -> Layout {
    Layout {
        trigger: Rect::new(0, TRIGGER_ROW, width, 1),
        viewport: Rect::new(0, 0, width, height),
    }
}

fn draw<C>(
    out: &mut Stdout,
    dropdown: &Dropdown<TerminalSurface<Stdout>, C>,
    caps: &TerminalCapabilities,
    icons: Icons,
) -> io::Result<Option<OverlayFrame>>
where
    C: ChangeSink,
{
    use crossterm::{
        cursor, queue,
        style::Print,
        terminal::{Clear, ClearType},
    };

    let view = dropdown.view();
    let width = dropdown.layout().map_or(caps.width, |l| l.trigger.width);
    queue!(out, Clear(ClearType::All))?;
    queue!(
        out,
        cursor::MoveTo(0, HELP_ROW),
        Print(render_help_bar(&view)),
        cursor::MoveTo(0, TRIGGER_ROW),
        Print(render_closed(&view, icons, usize::from(width)))
    )?;

    let mut frame = None;
    if let Some(overlay) = &view.overlay {
        if let Some(placement) = overlay.placement {
            let area = placement.area;
            let lines = render_overlay(overlay, icons, usize::from(area.width));
            let window = visible_window(&lines, usize::from(area.height));

            let mut targets = Vec::with_capacity(window.len());
            for (offset, line) in (0u16..).zip(&lines[window]) {
                queue!(
                    out,
                    cursor::MoveTo(area.x, area.y + offset),
                    Print(paint(line, caps.supports_color))
                )?;
                targets.push(line.target.clone());
            }
            frame = Some(OverlayFrame { area, targets });
        }
    }

    out.flush()?;
    Ok(frame)
}

/// Run the dropdown interactively
/// Returns the selection if confirmed, None if aborted
pub fn run_interactive<C>(
    dropdown: &mut Dropdown<TerminalSurface<Stdout>, C>,
    caps: &TerminalCapabilities,
    icons: Icons,
) -> io::Result<Option<Selection>>
where
    C: ChangeSink,
{
    use crossterm::{
        cursor,
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{self, ClearType},
    };

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, cursor::Hide)?;

    dropdown.handle(WidgetEvent::Resized(screen_layout(caps.width, caps.height)));
    tracing::debug!(width = caps.width, height = caps.height, "interactive loop started");

    let mut session = || -> io::Result<Option<Selection>> {
        let mut frame = draw(&mut stdout, dropdown, caps, icons)?;
        loop {
            let action = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    key_to_action(key, &InputContext::of(dropdown))
                }
                Event::Mouse(mouse) => {
                    let trigger = dropdown.layout().map_or(Rect::default(), |l| l.trigger);
                    mouse_to_action(mouse, trigger, frame.as_ref())
                }
                Event::Resize(width, height) => {
                    widget(WidgetEvent::Resized(screen_layout(width, height)))
                }
                _ => None,
            };

            match action {
                Some(InputAction::Confirm) => return Ok(Some(dropdown.selection().clone())),
                Some(InputAction::Abort) => return Ok(None),
                Some(InputAction::Widget(event)) => {
                    dropdown.handle(event);
                    frame = draw(&mut stdout, dropdown, caps, icons)?;
                }
                None => {}
            }
        }
    };
    let result = session();

    // Closing releases the mouse capture through the surface
    if dropdown.is_open() {
        dropdown.handle(WidgetEvent::Key(Key::Escape));
    }
    let mut stdout = io::stdout();
    execute!(
        stdout,
        cursor::Show,
        terminal::Clear(ClearType::All),
        cursor::MoveTo(0, 0)
    )?;
    terminal::disable_raw_mode()?;

    tracing::debug!(confirmed = matches!(result, Ok(Some(_))), "interactive loop finished");
    result
}
