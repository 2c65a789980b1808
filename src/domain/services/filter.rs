//! Search filter
//!
//! Ranks choices by how well their label matches a query. Matching is
//! case-insensitive; ties keep the input order.

use crate::domain::entities::Choice;

/// How well a label matches a query, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchRank {
    /// Label equals the query
    Exact,
    /// Label starts with the query
    Prefix,
    /// Label contains every query character in order
    Subsequence,
}

/// Rank a label against a query, `None` if it does not match at all
pub fn rank(label: &str, query: &str) -> Option<MatchRank> {
    let label = label.to_lowercase();
    let query = query.to_lowercase();

    if label == query {
        return Some(MatchRank::Exact);
    }
    if label.starts_with(&query) {
        return Some(MatchRank::Prefix);
    }
    if is_subsequence(&query, &label) {
        return Some(MatchRank::Subsequence);
    }
    None
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut hay = haystack.chars();
    needle.chars().all(|n| hay.any(|h| h == n))
}

/// Filter and rank choices by label.
///
/// A blank query matches everything in input order; callers normally skip
/// the filter for blank queries and show the grouped view instead.
pub fn filter(choices: &[Choice], query: &str) -> Vec<Choice> {
    let query = query.trim();
    if query.is_empty() {
        return choices.to_vec();
    }

    let mut ranked: Vec<(MatchRank, &Choice)> = choices
        .iter()
        .filter_map(|choice| rank(&choice.label, query).map(|r| (r, choice)))
        .collect();

    // sort_by_key is stable
    ranked.sort_by_key(|(r, _)| *r);
    ranked.into_iter().map(|(_, c)| c.clone()).collect()
}
