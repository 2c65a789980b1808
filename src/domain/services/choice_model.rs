//! Choice model
//!
//! Turns host input into an ordered list of groups and back into flat
//! choice sequences. Everything here is a pure function over its input.

use std::collections::{HashMap, HashSet};

use crate::domain::entities::{Choice, ChoiceValue, Entry, Group, RawEntry};
use crate::error::ConfigurationError;

/// Classify untyped entries into choices and groups.
///
/// An entry is a group iff it has a `headline` key. Groups may only
/// contain plain choices. Values that differ but print the same (`1` and
/// `"1"`) are rejected, since a selection could not tell them apart.
pub fn classify(raw: Vec<RawEntry>) -> Result<Vec<Entry>, ConfigurationError> {
    let entries = raw
        .into_iter()
        .enumerate()
        .map(|(index, entry)| classify_entry(index, entry))
        .collect::<Result<Vec<_>, _>>()?;
    check_value_keys(&entries)?;
    Ok(entries)
}

fn check_value_keys(entries: &[Entry]) -> Result<(), ConfigurationError> {
    let mut seen: HashMap<String, &ChoiceValue> = HashMap::new();

    for (index, entry) in entries.iter().enumerate() {
        let choices = match entry {
            Entry::Choice(choice) => std::slice::from_ref(choice),
            Entry::Group(group) => group.choices.as_slice(),
        };
        for choice in choices {
            let key = choice.value.as_key();
            match seen.get(&key) {
                Some(earlier) if **earlier != choice.value => {
                    return Err(ConfigurationError::ConflictingValue { index, key });
                }
                Some(_) => {}
                None => {
                    seen.insert(key, &choice.value);
                }
            }
        }
    }
    Ok(())
}

fn classify_entry(index: usize, raw: RawEntry) -> Result<Entry, ConfigurationError> {
    match raw.headline {
        Some(headline) => {
            if raw.label.is_some() {
                return Err(ConfigurationError::AmbiguousEntry { index });
            }
            let nested = raw.choices.ok_or(ConfigurationError::MissingField {
                index,
                field: "choices",
            })?;
            let choices = nested
                .into_iter()
                .map(|child| {
                    if child.is_group() {
                        Err(ConfigurationError::NestedGroup { index })
                    } else {
                        classify_choice(index, child)
                    }
                })
                .collect::<Result<Vec<_>, _>>()?;

            Ok(Entry::Group(Group {
                headline,
                is_header: raw.header.unwrap_or(false),
                choices,
            }))
        }
        None => {
            if raw.choices.is_some() {
                return Err(ConfigurationError::AmbiguousEntry { index });
            }
            classify_choice(index, raw).map(Entry::Choice)
        }
    }
}

fn classify_choice(index: usize, raw: RawEntry) -> Result<Choice, ConfigurationError> {
    let label = raw.label.ok_or(ConfigurationError::MissingField {
        index,
        field: "label",
    })?;
    let value = raw.value.ok_or(ConfigurationError::MissingField {
        index,
        field: "value",
    })?;

    Ok(Choice {
        label,
        value,
        disabled: raw.disabled.unwrap_or(false),
        payload: raw.payload,
        group: None,
    })
}

/// Normalize mixed entries into groups.
///
/// Consecutive bare choices are collected into one anonymous group; a group
/// entry flushes the pending anonymous group and is inserted unchanged.
pub fn normalize(entries: &[Entry]) -> Vec<Group> {
    let mut groups = Vec::new();
    let mut pending: Option<Vec<Choice>> = None;

    for entry in entries {
        match entry {
            Entry::Group(group) => {
                if let Some(choices) = pending.take() {
                    groups.push(Group::anonymous(choices));
                }
                groups.push(group.clone());
            }
            Entry::Choice(choice) => {
                pending.get_or_insert_with(Vec::new).push(choice.clone());
            }
        }
    }

    if let Some(choices) = pending {
        groups.push(Group::anonymous(choices));
    }

    groups
}

/// Classify and normalize in one step
pub fn normalize_raw(raw: Vec<RawEntry>) -> Result<Vec<Group>, ConfigurationError> {
    Ok(normalize(&classify(raw)?))
}

/// Turn a normalized group back into an input entry
pub fn group_to_entry(group: Group) -> Entry {
    Entry::Group(group)
}

/// Concatenate all choices in group order
pub fn flatten(groups: &[Group]) -> Vec<Choice> {
    groups
        .iter()
        .flat_map(|g| g.choices.iter().cloned())
        .collect()
}

/// Concatenate all choices, each tagged with a copy of its group identity
pub fn flatten_for_display(groups: &[Group]) -> Vec<Choice> {
    groups
        .iter()
        .flat_map(|group| {
            let group_ref = group.group_ref();
            group
                .choices
                .iter()
                .map(move |choice| choice.clone().in_group(group_ref.clone()))
        })
        .collect()
}

/// Drop choices whose `(value, label)` pair was already seen, keeping the first
pub fn deduplicate(choices: Vec<Choice>) -> Vec<Choice> {
    let mut seen = HashSet::new();
    choices
        .into_iter()
        .filter(|c| seen.insert((c.value.clone(), c.label.clone())))
        .collect()
}
