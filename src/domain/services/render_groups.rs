//! Render-group builder
//!
//! Computes exactly which groups and choices the overlay shows for the
//! current selection and search query. Read-only over its inputs.

use crate::domain::entities::Group;
use crate::domain::value_objects::{Selection, SelectionType};

use super::choice_model::{deduplicate, flatten_for_display};
use super::filter::filter;

/// Build the groups to display.
///
/// - Non-blank query: one anonymous group holding the ranked matches, or
///   nothing when no choice matched. Grouping is dropped while searching.
/// - `Multiple`/`Tags`: selected choices move into a pinned header group
///   rendered first; the remaining choices stay in their groups.
/// - `Single`: groups pass through.
///
/// Groups left without choices are never returned.
pub fn build_render_groups(
    groups: &[Group],
    selection: &Selection,
    selection_type: SelectionType,
    query: &str,
) -> Vec<Group> {
    let query = query.trim();

    if !query.is_empty() {
        let matches = filter(&flatten_for_display(groups), query);
        if matches.is_empty() {
            return Vec::new();
        }
        return vec![Group::anonymous(matches)];
    }

    if !selection_type.is_multi() {
        return groups.iter().filter(|g| !g.is_empty()).cloned().collect();
    }

    let mut pinned = Vec::new();
    let mut rest = Vec::with_capacity(groups.len());

    for group in groups {
        let group_ref = group.group_ref();
        let mut unselected = Vec::new();

        for choice in &group.choices {
            if selection.is_selected(choice) {
                pinned.push(choice.clone().in_group(group_ref.clone()));
            } else {
                unselected.push(choice.clone());
            }
        }

        if !unselected.is_empty() {
            rest.push(group.with_choices(unselected));
        }
    }

    let mut out = Vec::with_capacity(rest.len() + 1);
    let pinned = deduplicate(pinned);
    if !pinned.is_empty() {
        out.push(Group::pinned(pinned));
    }
    out.extend(rest);
    out
}

/// Default choice count above which the search form is offered
pub const DEFAULT_SEARCH_THRESHOLD: usize = 5;

/// Whether the overlay shows a search form.
///
/// Tags search inline in the closed view and never get one. Otherwise an
/// explicit host flag wins, and without one the form appears once there
/// are more than `threshold` choices.
pub fn is_searchable(
    selection_type: SelectionType,
    searchable: Option<bool>,
    choice_count: usize,
    threshold: usize,
) -> bool {
    if selection_type == SelectionType::Tags {
        return false;
    }
    searchable.unwrap_or(choice_count > threshold)
}
