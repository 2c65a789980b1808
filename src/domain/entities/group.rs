//! Group entity and host input entries
//!
//! Hosts hand over a mixed sequence of bare choices and groups. `Entry` is
//! the typed form; `RawEntry` is what arrives from JSON before the two
//! shapes are told apart.

use serde::{Deserialize, Deserializer, Serialize};

use super::choice::{Choice, ChoiceValue, GroupRef};

/// A named or anonymous ordered bucket of choices
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Display headline, `None` for anonymous groups
    pub headline: Option<String>,
    /// Marks the synthetic pinned "selected" group
    #[serde(default, rename = "header", skip_serializing_if = "std::ops::Not::not")]
    pub is_header: bool,
    /// Choices in insertion order
    pub choices: Vec<Choice>,
}

impl Group {
    /// Create an anonymous group
    pub fn anonymous(choices: Vec<Choice>) -> Self {
        Self {
            headline: None,
            is_header: false,
            choices,
        }
    }

    /// Create a group with a headline
    pub fn named(headline: impl Into<String>, choices: Vec<Choice>) -> Self {
        Self {
            headline: Some(headline.into()),
            is_header: false,
            choices,
        }
    }

    /// Create the synthetic pinned group
    pub fn pinned(choices: Vec<Choice>) -> Self {
        Self {
            headline: None,
            is_header: true,
            choices,
        }
    }

    /// Copy of this group's identity for back-references
    pub fn group_ref(&self) -> GroupRef {
        GroupRef {
            headline: self.headline.clone(),
            is_header: self.is_header,
        }
    }

    /// Whether this group has no choices
    pub fn is_empty(&self) -> bool {
        self.choices.is_empty()
    }

    /// Copy of this group with a different choice list
    pub fn with_choices(&self, choices: Vec<Choice>) -> Self {
        Self {
            headline: self.headline.clone(),
            is_header: self.is_header,
            choices,
        }
    }
}

/// Typed host input: a bare choice or a group
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    Choice(Choice),
    Group(Group),
}

impl From<Choice> for Entry {
    fn from(choice: Choice) -> Self {
        Entry::Choice(choice)
    }
}

impl From<Group> for Entry {
    fn from(group: Group) -> Self {
        Entry::Group(group)
    }
}

/// Untyped host input entry.
///
/// An entry is a group iff it carries a `headline` key, even when that key
/// is `null`; `headline` is therefore kept as `Option<Option<_>>` so that
/// presence and nullness stay distinguishable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawEntry {
    #[serde(default, deserialize_with = "present")]
    pub headline: Option<Option<String>>,
    #[serde(default)]
    pub header: Option<bool>,
    #[serde(default)]
    pub choices: Option<Vec<RawEntry>>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub value: Option<ChoiceValue>,
    #[serde(default)]
    pub disabled: Option<bool>,
    #[serde(default)]
    pub payload: Option<serde_json::Value>,
}

impl RawEntry {
    /// Whether this entry has the group shape
    pub fn is_group(&self) -> bool {
        self.headline.is_some()
    }
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}
