//! Widget Shell
//!
//! Composes the choice model, selection machine, focus navigator and
//! overlay controller into one dropdown. Front ends feed it
//! [`WidgetEvent`]s and draw [`Dropdown::view`]; the host hears about
//! selection changes through its [`ChangeSink`].

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Choice, ChoiceValue, Entry, Group};
use crate::domain::ports::{ChangeSink, OverlaySurface};
use crate::domain::services::{
    build_render_groups, deduplicate, flatten, flatten_for_display, focusable, is_searchable,
    move_focus, normalize, Direction, FocusMove, PlacementRules, SelectionMachine,
    DEFAULT_SEARCH_THRESHOLD,
};
use crate::domain::value_objects::{Rect, Selection, SelectionType};

use super::overlay::OverlayController;
use super::view::{
    ClosedView, DropdownView, GroupView, OverlayBody, OverlayView, RowView, TagChip,
};

/// Closed-view text when no placeholder is configured
pub const DEFAULT_PLACEHOLDER: &str = "Please choose";

/// User-facing texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Labels {
    /// Configured placeholder; a single select is only clearable with one
    pub placeholder: Option<String>,
    pub empty_message: String,
    pub empty_results_message: String,
    pub reset_label: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            placeholder: None,
            empty_message: "No choices available.".to_string(),
            empty_results_message: "No matching entries found.".to_string(),
            reset_label: "Reset selection".to_string(),
        }
    }
}

impl Labels {
    /// Placeholder shown in the closed view
    pub fn placeholder_text(&self) -> &str {
        self.placeholder.as_deref().unwrap_or(DEFAULT_PLACEHOLDER)
    }
}

/// Host-supplied inputs
#[derive(Debug, Clone)]
pub struct DropdownProps {
    /// Choice set; replaced by handing over a different `Arc`.
    /// Values are matched by their printed form, so `1` and `"1"` are one choice.
    pub choices: Arc<[Entry]>,
    pub selection_type: SelectionType,
    pub initial_selection: Selection,
    pub labels: Labels,
    /// Explicit search form switch, `None` to decide by choice count
    pub searchable: Option<bool>,
    pub search_threshold: usize,
    /// Prefix selected labels with their group headline in the closed view
    pub include_group_headline: bool,
    pub placement: PlacementRules,
}

impl DropdownProps {
    pub fn new(choices: impl Into<Arc<[Entry]>>) -> Self {
        Self {
            choices: choices.into(),
            selection_type: SelectionType::default(),
            initial_selection: Selection::new(),
            labels: Labels::default(),
            searchable: None,
            search_threshold: DEFAULT_SEARCH_THRESHOLD,
            include_group_headline: false,
            placement: PlacementRules::default(),
        }
    }

    pub fn with_type(mut self, selection_type: SelectionType) -> Self {
        self.selection_type = selection_type;
        self
    }

    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.initial_selection = selection;
        self
    }

    pub fn with_labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.labels.placeholder = Some(placeholder.into());
        self
    }

    pub fn searchable(mut self, searchable: bool) -> Self {
        self.searchable = Some(searchable);
        self
    }

    pub fn with_search_threshold(mut self, threshold: usize) -> Self {
        self.search_threshold = threshold;
        self
    }

    pub fn include_group_headline(mut self, include: bool) -> Self {
        self.include_group_headline = include;
        self
    }

    pub fn with_placement(mut self, rules: PlacementRules) -> Self {
        self.placement = rules;
        self
    }
}

/// Keys the widget reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Space,
    Enter,
    Tab,
    Escape,
}

/// Where the trigger sits and how much room there is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub trigger: Rect,
    pub viewport: Rect,
}

/// Input to the widget
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    Key(Key),
    /// Opener or chevron activated: open if closed, close if open
    OpenerActivated,
    /// Inline search input focused (tags)
    SearchFocused,
    /// Search text changed
    SearchInput(String),
    /// A choice row was clicked
    ChoiceActivated(ChoiceValue),
    /// Pointer moved over a row, or left all rows
    ChoiceHovered(Option<ChoiceValue>),
    /// Remove button of a tag chip
    TagRemoved(ChoiceValue),
    /// Reset control activated
    ResetActivated,
    /// Pointer pressed anywhere on screen
    PointerDown { col: u16, row: u16 },
    /// Trigger moved or viewport resized
    Resized(Layout),
}

/// A dropdown bound to an overlay surface and a change sink
pub struct Dropdown<S, C>
where
    S: OverlaySurface,
    C: ChangeSink,
{
    props: DropdownProps,
    groups: Vec<Group>,
    choices: Vec<Choice>,
    machine: SelectionMachine,
    overlay: OverlayController<S>,
    sink: C,
    layout: Option<Layout>,
}

impl<S, C> Dropdown<S, C>
where
    S: OverlaySurface,
    C: ChangeSink,
{
    pub fn new(props: DropdownProps, surface: S, sink: C) -> Self {
        let groups = normalize(&props.choices);
        let choices = flatten(&groups);
        let machine = SelectionMachine::new(props.selection_type, props.initial_selection.clone());

        tracing::debug!(
            groups = groups.len(),
            choices = choices.len(),
            selection_type = %props.selection_type,
            "dropdown created"
        );

        Self {
            props,
            groups,
            choices,
            machine,
            overlay: OverlayController::new(surface),
            sink,
            layout: None,
        }
    }

    /// Hand over new props.
    ///
    /// A different choice set (by `Arc` identity) or selection type closes
    /// the overlay first, then re-normalizes and reseeds the selection from
    /// `initial_selection`. Other prop changes keep widget state.
    pub fn set_props(&mut self, props: DropdownProps) {
        let replaced = !Arc::ptr_eq(&self.props.choices, &props.choices)
            || self.props.selection_type != props.selection_type;

        if replaced {
            self.overlay.close();
            self.groups = normalize(&props.choices);
            self.choices = flatten(&self.groups);
            self.machine =
                SelectionMachine::new(props.selection_type, props.initial_selection.clone());
            tracing::debug!(
                groups = self.groups.len(),
                choices = self.choices.len(),
                "choice set replaced"
            );
        }

        self.props = props;
        self.refresh();
    }

    /// Apply one input event
    pub fn handle(&mut self, event: WidgetEvent) {
        match event {
            WidgetEvent::Key(key) => self.on_key(key),
            WidgetEvent::OpenerActivated => self.overlay.toggle(),
            WidgetEvent::SearchFocused => {
                self.overlay.open();
            }
            WidgetEvent::SearchInput(text) => {
                self.overlay.open();
                self.overlay.set_search(text);
            }
            WidgetEvent::ChoiceActivated(value) | WidgetEvent::TagRemoved(value) => {
                self.toggle_value(&value);
            }
            WidgetEvent::ChoiceHovered(value) => self.overlay.set_focus(value),
            WidgetEvent::ResetActivated => self.reset(),
            WidgetEvent::PointerDown { col, row } => {
                if let Some(layout) = self.layout {
                    self.overlay.pointer_down(layout.trigger, col, row);
                }
            }
            WidgetEvent::Resized(layout) => self.layout = Some(layout),
        }
        self.refresh();
    }

    fn on_key(&mut self, key: Key) {
        match key {
            Key::Up => self.navigate(Direction::Up),
            Key::Down => self.navigate(Direction::Down),
            Key::Tab | Key::Escape => {
                self.overlay.close();
            }
            Key::Space | Key::Enter => self.activate_focus(),
        }
    }

    fn navigate(&mut self, direction: Direction) {
        self.overlay.open();
        let visible = focusable(&self.render_groups());
        let next = move_focus(&visible, self.overlay.focus(), direction);

        match next {
            FocusMove::Focus(focus) => self.overlay.set_focus(focus),
            FocusMove::Close => {
                self.overlay.close();
            }
        }
    }

    fn activate_focus(&mut self) {
        let Some(focus) = self.focus().cloned() else {
            return;
        };

        if !self.machine.selection_type().is_multi() {
            self.toggle_value(&focus);
            return;
        }

        // The toggle clears focus; keep the keyboard user on the next row
        let visible = focusable(&self.render_groups());
        let next = match move_focus(&visible, Some(&focus), Direction::Down) {
            FocusMove::Focus(next) => next,
            FocusMove::Close => None,
        };

        if self.toggle_value(&focus) {
            if let Some(next) = next {
                if focusable(&self.render_groups()).contains(&next) {
                    self.overlay.set_focus(Some(next));
                }
            }
        }
    }

    /// Toggle the choice with `value`. Returns `true` if the selection changed.
    fn toggle_value(&mut self, value: &ChoiceValue) -> bool {
        let key = value.as_key();
        let Some(choice) = self.choices.iter().find(|c| c.value.as_key() == key).cloned() else {
            tracing::trace!(%value, "toggle for unknown value ignored");
            return false;
        };

        if !self.machine.toggle(&choice, &self.choices).is_changed() {
            return false;
        }

        tracing::debug!(value = %choice.value, selected = self.machine.selection().len(), "choice toggled");
        self.overlay.clear_interaction();
        self.emit();

        if !self.machine.selection_type().is_multi() {
            self.overlay.close();
        }
        true
    }

    fn reset(&mut self) {
        if !self.is_clearable() {
            return;
        }
        if self.machine.reset(&self.choices).is_changed() {
            tracing::debug!("selection reset");
            self.emit();
        }
    }

    fn emit(&mut self) {
        let snapshot = self.machine.snapshot();
        self.sink.on_change(&snapshot);
    }

    /// Follow layout changes.
    ///
    /// A focus hidden by the search is kept so the next arrow key restarts
    /// at the first visible choice.
    fn refresh(&mut self) {
        if !self.overlay.is_open() {
            return;
        }

        if let Some(layout) = self.layout {
            let render_groups = self.render_groups();
            let content = self.overlay_view(&render_groups).content_size();
            self.overlay
                .reposition(layout.trigger, content, layout.viewport, self.props.placement);
        }
    }

    /// Groups currently shown in the overlay
    pub fn render_groups(&self) -> Vec<Group> {
        build_render_groups(
            &self.groups,
            self.machine.selection(),
            self.machine.selection_type(),
            self.overlay.search(),
        )
    }

    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn selection(&self) -> &Selection {
        self.machine.selection()
    }

    pub fn selection_type(&self) -> SelectionType {
        self.machine.selection_type()
    }

    pub fn search(&self) -> &str {
        self.overlay.search()
    }

    /// Focused choice, if it is currently visible
    pub fn focus(&self) -> Option<&ChoiceValue> {
        self.overlay
            .focus()
            .filter(|focus| focusable(&self.render_groups()).contains(*focus))
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    pub fn props(&self) -> &DropdownProps {
        &self.props
    }

    pub fn layout(&self) -> Option<Layout> {
        self.layout
    }

    pub fn surface(&self) -> &S {
        self.overlay.surface()
    }

    pub fn surface_mut(&mut self) -> &mut S {
        self.overlay.surface_mut()
    }

    /// Whether the overlay offers a search form
    pub fn is_searchable(&self) -> bool {
        is_searchable(
            self.machine.selection_type(),
            self.props.searchable,
            self.choices.len(),
            self.props.search_threshold,
        )
    }

    /// Whether the reset control is offered
    pub fn is_clearable(&self) -> bool {
        self.machine
            .is_clearable(&self.choices, self.props.labels.placeholder.is_some())
    }

    /// Selected choices for display, de-duplicated, in choice order
    pub fn selected_choices(&self) -> Vec<Choice> {
        let selection = self.machine.selection();
        deduplicate(
            flatten_for_display(&self.groups)
                .into_iter()
                .filter(|c| selection.is_selected(c))
                .collect(),
        )
    }

    /// Describe what to draw
    pub fn view(&self) -> DropdownView {
        let overlay = self
            .overlay
            .is_open()
            .then(|| self.overlay_view(&self.render_groups()));

        DropdownView {
            selection_type: self.machine.selection_type(),
            closed: self.closed_view(),
            overlay,
        }
    }

    fn closed_view(&self) -> ClosedView {
        let selected = self.selected_choices();
        let include = self.props.include_group_headline;
        let placeholder = self.props.labels.placeholder_text().to_string();

        if self.machine.selection_type() == SelectionType::Tags {
            return ClosedView::Tags {
                chips: selected
                    .iter()
                    .map(|c| TagChip {
                        label: c.display_label(include),
                        value: c.value.clone(),
                        removable: !c.disabled,
                    })
                    .collect(),
                search: self.overlay.search().to_string(),
                placeholder,
            };
        }

        if selected.is_empty() {
            return ClosedView::Text {
                text: placeholder,
                is_placeholder: true,
            };
        }

        ClosedView::Text {
            text: selected
                .iter()
                .map(|c| c.display_label(include))
                .collect::<Vec<_>>()
                .join(", "),
            is_placeholder: false,
        }
    }

    fn overlay_view(&self, render_groups: &[Group]) -> OverlayView {
        let labels = &self.props.labels;
        let selection = self.machine.selection();
        let focus = self.overlay.focus();

        let body = if render_groups.is_empty() {
            let message = if self.overlay.search().trim().is_empty() {
                &labels.empty_message
            } else {
                &labels.empty_results_message
            };
            OverlayBody::Message(message.clone())
        } else {
            OverlayBody::Groups(
                render_groups
                    .iter()
                    .map(|group| GroupView {
                        headline: group.headline.clone(),
                        is_header: group.is_header,
                        rows: group
                            .choices
                            .iter()
                            .map(|c| RowView {
                                label: c.label.clone(),
                                value: c.value.clone(),
                                selected: selection.is_selected(c),
                                disabled: c.disabled,
                                focused: focus == Some(&c.value),
                            })
                            .collect(),
                    })
                    .collect(),
            )
        };

        OverlayView {
            search: self
                .is_searchable()
                .then(|| self.overlay.search().to_string()),
            reset: self.is_clearable().then(|| labels.reset_label.clone()),
            body,
            placement: self.overlay.session().and_then(|s| s.placement),
        }
    }
}
