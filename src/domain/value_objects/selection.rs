//! Selection value object
//!
//! A sparse mapping from choice value to "selected". Keys are the string
//! form of the value, the same form the host sees in emitted change maps,
//! so `1` and `"1"` name the same choice.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Choice, ChoiceValue};

/// Set of selected choice values
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<String, bool>", into = "BTreeMap<String, bool>")]
pub struct Selection {
    keys: BTreeSet<String>,
}

impl Selection {
    /// Create an empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection from values
    pub fn from_values<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<ChoiceValue>,
    {
        Self {
            keys: values.into_iter().map(|v| v.into().as_key()).collect(),
        }
    }

    /// Check whether a value is selected
    pub fn contains(&self, value: &ChoiceValue) -> bool {
        self.keys.contains(&value.as_key())
    }

    /// Check whether a choice is selected
    pub fn is_selected(&self, choice: &Choice) -> bool {
        self.contains(&choice.value)
    }

    /// Mark a value as selected
    pub fn insert(&mut self, value: &ChoiceValue) {
        self.keys.insert(value.as_key());
    }

    /// Mark a value as unselected
    pub fn remove(&mut self, value: &ChoiceValue) {
        self.keys.remove(&value.as_key());
    }

    /// Flip a value, returning its new state
    pub fn flip(&mut self, value: &ChoiceValue) -> bool {
        let key = value.as_key();
        if self.keys.remove(&key) {
            false
        } else {
            self.keys.insert(key);
            true
        }
    }

    /// Number of selected values
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Selected keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.iter().map(String::as_str)
    }

    /// The choices of `choices` that are selected, in their given order
    pub fn selected_in<'a>(&self, choices: &'a [Choice]) -> Vec<&'a Choice> {
        choices.iter().filter(|c| self.is_selected(c)).collect()
    }

    /// Sparse `{key: true}` map handed to the host
    pub fn to_map(&self) -> BTreeMap<String, bool> {
        self.keys.iter().map(|k| (k.clone(), true)).collect()
    }
}

impl From<BTreeMap<String, bool>> for Selection {
    fn from(map: BTreeMap<String, bool>) -> Self {
        Self {
            keys: map
                .into_iter()
                .filter_map(|(k, selected)| selected.then_some(k))
                .collect(),
        }
    }
}

impl From<Selection> for BTreeMap<String, bool> {
    fn from(selection: Selection) -> Self {
        selection.to_map()
    }
}
