//! Dropdown view model
//!
//! Plain data describing what to draw. Front ends render it without
//! consulting widget state again.

use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::domain::entities::ChoiceValue;
use crate::domain::services::Placement;
use crate::domain::value_objects::{SelectionType, Size};

/// Columns reserved in front of every overlay row for marker and icon
pub const ROW_PREFIX_WIDTH: u16 = 6;

/// Everything a front end needs to draw the widget
#[derive(Debug, Clone, PartialEq)]
pub struct DropdownView {
    pub selection_type: SelectionType,
    pub closed: ClosedView,
    pub overlay: Option<OverlayView>,
}

impl DropdownView {
    pub fn is_open(&self) -> bool {
        self.overlay.is_some()
    }
}

/// The always-visible opener line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClosedView {
    /// Selected labels joined by ", ", or the placeholder
    Text { text: String, is_placeholder: bool },
    /// Tags mode: chips followed by the inline search input
    Tags {
        chips: Vec<TagChip>,
        search: String,
        placeholder: String,
    },
}

/// One selected choice in tags mode
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagChip {
    pub label: String,
    pub value: ChoiceValue,
    pub removable: bool,
}

/// The open overlay
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayView {
    /// Search input text, `None` when no search form is shown
    pub search: Option<String>,
    /// Reset control label, `None` when nothing can be cleared
    pub reset: Option<String>,
    pub body: OverlayBody,
    pub placement: Option<Placement>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayBody {
    /// No choices at all, or no search matches
    Message(String),
    Groups(Vec<GroupView>),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupView {
    pub headline: Option<String>,
    pub is_header: bool,
    pub rows: Vec<RowView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub label: String,
    pub value: ChoiceValue,
    pub selected: bool,
    pub disabled: bool,
    pub focused: bool,
}

impl OverlayView {
    /// Cells needed to show the overlay without clipping
    pub fn content_size(&self) -> Size {
        let mut rows: usize = 0;
        let mut widest: usize = 0;

        let mut line = |text: &str| {
            rows += 1;
            widest = widest.max(text.width());
        };

        if let Some(search) = &self.search {
            line(search);
        }
        if let Some(reset) = &self.reset {
            line(reset);
        }
        match &self.body {
            OverlayBody::Message(message) => line(message),
            OverlayBody::Groups(groups) => {
                for group in groups {
                    if let Some(headline) = &group.headline {
                        line(headline);
                    }
                    for row in &group.rows {
                        line(&row.label);
                    }
                    // rule below the pinned group
                    if group.is_header {
                        line("");
                    }
                }
            }
        }

        let width = u16::try_from(widest)
            .unwrap_or(u16::MAX)
            .saturating_add(ROW_PREFIX_WIDTH);
        let height = u16::try_from(rows).unwrap_or(u16::MAX);
        Size::new(width, height)
    }

    /// Rows of choices in render order
    pub fn rows(&self) -> impl Iterator<Item = &RowView> {
        let groups: &[GroupView] = match &self.body {
            OverlayBody::Groups(groups) => groups,
            OverlayBody::Message(_) => &[],
        };
        groups.iter().flat_map(|g| g.rows.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(label: &str) -> RowView {
        RowView {
            label: label.to_string(),
            value: label.into(),
            selected: false,
            disabled: false,
            focused: false,
        }
    }

    #[test]
    fn content_size_counts_every_line() {
        let view = OverlayView {
            search: Some(String::new()),
            reset: Some("Reset selection".to_string()),
            body: OverlayBody::Groups(vec![
                GroupView {
                    headline: None,
                    is_header: true,
                    rows: vec![row("b")],
                },
                GroupView {
                    headline: Some("Group 1".to_string()),
                    is_header: false,
                    rows: vec![row("a"), row("c")],
                },
            ]),
            placement: None,
        };

        assert_eq!(view.content_size(), Size::new(15 + ROW_PREFIX_WIDTH, 7));
        assert_eq!(view.rows().count(), 3);
    }

    #[test]
    fn content_size_uses_display_width() {
        let view = OverlayView {
            search: None,
            reset: None,
            body: OverlayBody::Groups(vec![GroupView {
                headline: None,
                is_header: false,
                rows: vec![row("日本語")],
            }]),
            placement: None,
        };
        assert_eq!(view.content_size(), Size::new(6 + ROW_PREFIX_WIDTH, 1));
    }

    #[test]
    fn message_body_has_no_rows() {
        let view = OverlayView {
            search: None,
            reset: None,
            body: OverlayBody::Message("No matching entries found.".to_string()),
            placement: None,
        };
        assert_eq!(view.rows().count(), 0);
        assert_eq!(view.content_size().height, 1);
    }
}
