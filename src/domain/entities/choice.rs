//! Choice entity - a single selectable item
//!
//! Choices are immutable value records. They are rebuilt freely while
//! flattening and de-duplicating, so anything that needs to recognise a
//! choice across passes compares `value`, never the record itself.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity key of a choice
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChoiceValue {
    /// Numeric value (e.g. database ids)
    Int(i64),
    /// Any other number: fractions and integers outside `i64`
    Number(serde_json::Number),
    /// Text value (e.g. `<option value="...">`)
    Text(String),
}

impl ChoiceValue {
    /// Key under which this value appears in an emitted selection map
    pub fn as_key(&self) -> String {
        self.to_string()
    }

    /// Whether this is the empty text value (placeholder options use it)
    pub fn is_empty(&self) -> bool {
        matches!(self, ChoiceValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for ChoiceValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChoiceValue::Int(n) => write!(f, "{}", n),
            ChoiceValue::Number(n) => write!(f, "{}", n),
            ChoiceValue::Text(s) => f.write_str(s),
        }
    }
}

impl Ord for ChoiceValue {
    /// Integers first, then other numbers by their text form, then text
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (ChoiceValue::Int(a), ChoiceValue::Int(b)) => a.cmp(b),
            (ChoiceValue::Int(_), _) => Ordering::Less,
            (_, ChoiceValue::Int(_)) => Ordering::Greater,
            (ChoiceValue::Number(a), ChoiceValue::Number(b)) => {
                a.to_string().cmp(&b.to_string())
            }
            (ChoiceValue::Number(_), ChoiceValue::Text(_)) => Ordering::Less,
            (ChoiceValue::Text(_), ChoiceValue::Number(_)) => Ordering::Greater,
            (ChoiceValue::Text(a), ChoiceValue::Text(b)) => a.cmp(b),
        }
    }
}

impl PartialOrd for ChoiceValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<&str> for ChoiceValue {
    fn from(value: &str) -> Self {
        ChoiceValue::Text(value.to_string())
    }
}

impl From<String> for ChoiceValue {
    fn from(value: String) -> Self {
        ChoiceValue::Text(value)
    }
}

impl From<i64> for ChoiceValue {
    fn from(value: i64) -> Self {
        ChoiceValue::Int(value)
    }
}

impl From<serde_json::Number> for ChoiceValue {
    fn from(value: serde_json::Number) -> Self {
        match value.as_i64() {
            Some(n) => ChoiceValue::Int(n),
            None => ChoiceValue::Number(value),
        }
    }
}

/// Snapshot of the group a flattened choice came from.
///
/// Only the two fields needed for display are copied; holding the whole
/// group here would retain every sibling choice once per flattened choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRef {
    pub headline: Option<String>,
    pub is_header: bool,
}

/// An atomic selectable item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Choice {
    /// Display text
    pub label: String,
    /// Identity used for selection and focus
    pub value: ChoiceValue,
    /// Disabled choices cannot be toggled or focused
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub disabled: bool,
    /// Opaque host data
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<serde_json::Value>,
    /// Origin group, attached only by display flattening
    #[serde(skip)]
    pub group: Option<GroupRef>,
}

impl Choice {
    /// Create an enabled choice
    pub fn new(label: impl Into<String>, value: impl Into<ChoiceValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            disabled: false,
            payload: None,
            group: None,
        }
    }

    /// Builder: mark as disabled
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Builder: attach host payload
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Builder: attach a group back-reference
    pub fn in_group(mut self, group: GroupRef) -> Self {
        self.group = Some(group);
        self
    }

    /// Label used in the closed view, optionally prefixed with the group headline
    pub fn display_label(&self, include_group_headline: bool) -> String {
        if include_group_headline {
            if let Some(headline) = self
                .group
                .as_ref()
                .filter(|g| !g.is_header)
                .and_then(|g| g.headline.as_deref())
            {
                return format!("{}: {}", headline, self.label);
            }
        }
        self.label.clone()
    }
}
