//! Terminal rendering for the dropdown.
//!
//! Turns a [`DropdownView`] into plain text lines. Every overlay line carries
//! the target a pointer press on it hits, so input mapping never has to
//! re-derive the layout.

use std::ops::Range;

use crossterm::style::Stylize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::application::{ClosedView, DropdownView, OverlayBody, OverlayView, RowView};
use crate::domain::entities::ChoiceValue;
use crate::ui::theme::{colors, Icons};

/// Semantic style of one rendered line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Normal,
    Dim,
    Focused,
    Selected,
    Warning,
}

/// What a pointer press on a line activates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HitTarget {
    Search,
    Reset,
    Choice(ChoiceValue),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLine {
    pub text: String,
    pub style: LineStyle,
    pub target: Option<HitTarget>,
}

impl OverlayLine {
    fn new(text: impl Into<String>, style: LineStyle) -> Self {
        Self {
            text: text.into(),
            style,
            target: None,
        }
    }

    fn with_target(mut self, target: HitTarget) -> Self {
        self.target = Some(target);
        self
    }
}

/// Render the opener line, `width` columns wide, chevron at the right edge
pub fn render_closed(view: &DropdownView, icons: Icons, width: usize) -> String {
    let chevron = if view.is_open() {
        icons.chevron_up
    } else {
        icons.chevron_down
    };

    let body = match &view.closed {
        ClosedView::Text { text, .. } => text.clone(),
        ClosedView::Tags {
            chips,
            search,
            placeholder,
        } => {
            let mut parts: Vec<String> = chips
                .iter()
                .map(|chip| {
                    if chip.removable {
                        format!("[{} {}]", chip.label, icons.remove)
                    } else {
                        format!("[{}]", chip.label)
                    }
                })
                .collect();
            if !search.is_empty() {
                parts.push(search.clone());
            } else if chips.is_empty() {
                parts.push(placeholder.clone());
            }
            parts.join(" ")
        }
    };

    let room = width.saturating_sub(chevron.width() + 1);
    format!("{} {}", fit(&body, room), chevron)
}

/// Render the overlay as lines exactly `width` columns wide
pub fn render_overlay(overlay: &OverlayView, icons: Icons, width: usize) -> Vec<OverlayLine> {
    let mut lines = Vec::new();

    if let Some(search) = &overlay.search {
        lines.push(
            OverlayLine::new(format!("{} {}", icons.search, search), LineStyle::Normal)
                .with_target(HitTarget::Search),
        );
    }
    if let Some(reset) = &overlay.reset {
        lines.push(
            OverlayLine::new(format!("{} {}", icons.remove, reset), LineStyle::Warning)
                .with_target(HitTarget::Reset),
        );
    }

    match &overlay.body {
        OverlayBody::Message(message) => {
            lines.push(OverlayLine::new(message.clone(), LineStyle::Dim));
        }
        OverlayBody::Groups(groups) => {
            for group in groups {
                if let Some(headline) = &group.headline {
                    lines.push(OverlayLine::new(headline.clone(), LineStyle::Dim));
                }
                lines.extend(group.rows.iter().map(|row| render_row(row, icons)));
                if group.is_header {
                    lines.push(OverlayLine::new(icons.rule.repeat(width), LineStyle::Dim));
                }
            }
        }
    }

    for line in &mut lines {
        line.text = fit(&line.text, width);
    }
    lines
}

fn render_row(row: &RowView, icons: Icons) -> OverlayLine {
    let cursor = if row.focused { icons.cursor } else { " " };
    let icon = if row.selected {
        icons.selected
    } else {
        icons.unselected
    };

    let style = if row.disabled {
        LineStyle::Dim
    } else if row.focused {
        LineStyle::Focused
    } else if row.selected {
        LineStyle::Selected
    } else {
        LineStyle::Normal
    };

    let line = OverlayLine::new(format!("{cursor} {icon} {}", row.label), style);
    if row.disabled {
        line
    } else {
        line.with_target(HitTarget::Choice(row.value.clone()))
    }
}

/// Lines to show when only `height` rows fit, keeping the focused row visible
pub fn visible_window(lines: &[OverlayLine], height: usize) -> Range<usize> {
    if lines.len() <= height {
        return 0..lines.len();
    }
    let focused = lines
        .iter()
        .position(|line| line.style == LineStyle::Focused)
        .unwrap_or(0);
    let start = (focused + 1).saturating_sub(height);
    start..start + height
}

/// Truncate or pad `text` to exactly `width` columns
pub fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push_str(&" ".repeat(width - used));
    out
}

/// Apply the theme color for a line
pub fn paint(line: &OverlayLine, supports_color: bool) -> String {
    if !supports_color {
        return line.text.clone();
    }
    let text = line.text.as_str();
    match line.style {
        LineStyle::Normal => text.to_string(),
        LineStyle::Dim => format!("{}", text.with(colors::DIM)),
        LineStyle::Focused => format!("{}", text.with(colors::FOCUS).bold()),
        LineStyle::Selected => format!("{}", text.with(colors::SELECTED)),
        LineStyle::Warning => format!("{}", text.with(colors::WARNING)),
    }
}

/// Render the help bar for the current state
pub fn render_help_bar(view: &DropdownView) -> String {
    if view.is_open() {
        String::from("[↑↓] Move    [Space/Enter] Toggle    [Tab/Esc] Close")
    } else {
        String::from("[Space] Open    [Enter] Confirm    [Esc] Quit")
    }
}
