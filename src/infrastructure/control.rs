//! Select Control Adapter
//!
//! Reads a declarative native-select description (options, optgroups and
//! their flags) into a choice set with its initial selection, and writes a
//! selection back onto the options.
//!
//! ```toml
//! multiple = true
//!
//! [[nodes]]
//! label = "test1"
//! value = "a"
//!
//! [[nodes]]
//! group = "Group 1"
//! options = [{ label = "Nested 1.1", value = "1.1", selected = true }]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::application::DropdownProps;
use crate::domain::entities::{Choice, ChoiceValue, Entry, Group};
use crate::domain::services::{flatten, group_to_entry};
use crate::domain::value_objects::{Selection, SelectionType};
use crate::error::{ChoosyError, ChoosyResult, ConfigurationError};

/// Label of the disabled option that ends the preferred block
pub const PREFERRED_MARKER: &str = "-------------------";

/// Headline of the preferred block when the control names none
pub const DEFAULT_PREFERRED_LABEL: &str = "Preferred Options";

/// A native select control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectControl {
    #[serde(default)]
    pub multiple: bool,
    /// `"tags"` turns a multiple select into a tags select
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_label: Option<String>,
    #[serde(default)]
    pub nodes: Vec<ControlNode>,
}

/// Child of a select: an option or an optgroup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ControlNode {
    OptGroup {
        group: String,
        #[serde(default)]
        options: Vec<ControlOption>,
    },
    Option(ControlOption),
}

/// A single `<option>`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlOption {
    pub label: String,
    /// Missing values fall back to the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default)]
    pub selected: bool,
    #[serde(default)]
    pub disabled: bool,
}

impl ControlOption {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: Some(value.into()),
            selected: false,
            disabled: false,
        }
    }

    pub fn selected(mut self) -> Self {
        self.selected = true;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Submitted value
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or(&self.label)
    }

    pub fn is_preferred_marker(&self) -> bool {
        self.disabled && self.label.trim() == PREFERRED_MARKER
    }

    fn to_choice(&self) -> Choice {
        let choice = Choice::new(self.label.clone(), self.value());
        if self.disabled {
            choice.disabled()
        } else {
            choice
        }
    }
}

/// Result of reading a select control
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedControl {
    pub selection_type: SelectionType,
    pub groups: Vec<Group>,
    pub selection: Selection,
    pub placeholder: Option<String>,
}

impl ParsedControl {
    /// The groups as widget input
    pub fn entries(&self) -> Vec<Entry> {
        self.groups.iter().cloned().map(group_to_entry).collect()
    }

    /// Props for a dropdown mounted on this control
    pub fn props(&self) -> DropdownProps {
        let props = DropdownProps::new(self.entries())
            .with_type(self.selection_type)
            .with_selection(self.selection.clone());

        match &self.placeholder {
            Some(placeholder) => props.with_placeholder(placeholder.clone()),
            None => props,
        }
    }
}

impl SelectControl {
    /// Load a control description, format chosen by file extension
    pub fn load(path: &Path) -> ChoosyResult<Self> {
        let content = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(toml::from_str(&content)?),
            Some("json") => Ok(serde_json::from_str(&content)?),
            _ => Err(ChoosyError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    /// Save the control, format chosen by file extension
    pub fn save(&self, path: &Path) -> ChoosyResult<()> {
        let content = match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => toml::to_string(self)?,
            Some("json") => serde_json::to_string_pretty(self)? + "\n",
            _ => {
                return Err(ChoosyError::UnsupportedFormat {
                    path: path.to_path_buf(),
                })
            }
        };
        std::fs::write(path, content)?;
        tracing::debug!(path = %path.display(), "select control saved");
        Ok(())
    }

    pub fn selection_type(&self) -> SelectionType {
        match (self.multiple, self.mode.as_deref()) {
            (false, _) => SelectionType::Single,
            (true, Some("tags")) => SelectionType::Tags,
            (true, _) => SelectionType::Multiple,
        }
    }

    /// Read options, groups and selected flags into a choice set.
    ///
    /// - The first top-level option with an empty value becomes the placeholder.
    /// - Empty optgroups are dropped, so bare options around them merge.
    /// - A disabled `-------------------` option turns the bare options before
    ///   it (back to the previous group) into the preferred group.
    /// - A single select without selection or placeholder selects its first
    ///   enabled option.
    pub fn parse(&self) -> Result<ParsedControl, ConfigurationError> {
        let selection_type = self.selection_type();
        let preferred_label = self
            .preferred_label
            .as_deref()
            .unwrap_or(DEFAULT_PREFERRED_LABEL);

        let mut groups = Vec::new();
        let mut pending: Vec<Choice> = Vec::new();
        let mut selected: Vec<ChoiceValue> = Vec::new();
        let mut placeholder = None;
        let mut marker_seen = false;

        for node in &self.nodes {
            match node {
                ControlNode::OptGroup { group, options } => {
                    let mut choices = Vec::with_capacity(options.len());
                    for option in options {
                        if option.is_preferred_marker() {
                            return Err(ConfigurationError::NestedPreferredMarker {
                                group: group.clone(),
                            });
                        }
                        if option.selected {
                            selected.push(option.value().into());
                        }
                        choices.push(option.to_choice());
                    }

                    if choices.is_empty() {
                        continue;
                    }
                    if !pending.is_empty() {
                        groups.push(Group::anonymous(std::mem::take(&mut pending)));
                    }
                    groups.push(Group::named(group.clone(), choices));
                }
                ControlNode::Option(option) => {
                    if option.is_preferred_marker() {
                        if marker_seen {
                            return Err(ConfigurationError::MultiplePreferredMarkers);
                        }
                        marker_seen = true;
                        if !pending.is_empty() {
                            groups.push(Group::named(
                                preferred_label,
                                std::mem::take(&mut pending),
                            ));
                        }
                        continue;
                    }

                    if placeholder.is_none() && option.value().is_empty() {
                        placeholder = Some(option.label.clone());
                        continue;
                    }

                    if option.selected {
                        selected.push(option.value().into());
                    }
                    pending.push(option.to_choice());
                }
            }
        }

        if !pending.is_empty() {
            groups.push(Group::anonymous(pending));
        }

        let selection = if selection_type.is_multi() {
            Selection::from_values(selected)
        } else {
            // A native single select keeps the last selected option
            match selected.pop() {
                Some(value) => Selection::from_values([value]),
                None if placeholder.is_none() => Selection::from_values(
                    flatten(&groups)
                        .into_iter()
                        .find(|c| !c.disabled)
                        .map(|c| c.value),
                ),
                None => Selection::new(),
            }
        };

        tracing::debug!(
            groups = groups.len(),
            selected = selection.len(),
            %selection_type,
            "select control parsed"
        );

        Ok(ParsedControl {
            selection_type,
            groups,
            selection,
            placeholder,
        })
    }

    /// Mirror `selection` onto the options.
    ///
    /// Disabled options keep their flag.
    pub fn write_back(&mut self, selection: &Selection) {
        for option in self.options_mut() {
            if option.disabled {
                continue;
            }
            option.selected = selection.contains(&ChoiceValue::from(option.value()));
        }
    }

    fn options_mut(&mut self) -> impl Iterator<Item = &mut ControlOption> {
        self.nodes.iter_mut().flat_map(|node| match node {
            ControlNode::OptGroup { options, .. } => options.iter_mut().collect::<Vec<_>>(),
            ControlNode::Option(option) => vec![option],
        })
    }

    /// Values of options currently flagged selected
    pub fn selected_values(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .flat_map(|node| match node {
                ControlNode::OptGroup { options, .. } => options.iter().collect::<Vec<_>>(),
                ControlNode::Option(option) => vec![option],
            })
            .filter(|o| o.selected)
            .map(ControlOption::value)
            .collect()
    }
}
