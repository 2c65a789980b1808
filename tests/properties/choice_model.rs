//! Property tests for normalization and flattening.

use proptest::prelude::*;

use choosy::domain::services::{flatten, group_to_entry, normalize};
use choosy::{Choice, ChoiceValue, Entry, Group};

/// Mixed entries: bare choices and named groups of 0..4 choices, with
/// unique integer values in input order.
fn entries() -> impl Strategy<Value = Vec<Entry>> {
    proptest::collection::vec((any::<bool>(), 0usize..4), 0..10).prop_map(|shapes| {
        let mut next = 0i64;
        let mut choice = || {
            next += 1;
            Choice::new(format!("choice {next}"), next)
        };

        shapes
            .into_iter()
            .enumerate()
            .map(|(i, (is_group, size))| {
                if is_group {
                    Entry::from(Group::named(
                        format!("Group {i}"),
                        (0..size).map(|_| choice()).collect(),
                    ))
                } else {
                    Entry::from(choice())
                }
            })
            .collect()
    })
}

fn input_values(entries: &[Entry]) -> Vec<ChoiceValue> {
    entries
        .iter()
        .flat_map(|entry| match entry {
            Entry::Choice(c) => vec![c.value.clone()],
            Entry::Group(g) => g.choices.iter().map(|c| c.value.clone()).collect(),
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: flattening normalized groups yields every input choice in input order.
    #[test]
    fn property_flatten_round_trips(entries in entries()) {
        let values: Vec<ChoiceValue> = flatten(&normalize(&entries))
            .into_iter()
            .map(|c| c.value)
            .collect();
        prop_assert_eq!(values, input_values(&entries));
    }

    /// PROPERTY: normalizing already normalized groups changes nothing.
    #[test]
    fn property_normalize_is_idempotent(entries in entries()) {
        let once = normalize(&entries);
        let again: Vec<Entry> = once.iter().cloned().map(group_to_entry).collect();
        prop_assert_eq!(normalize(&again), once);
    }

    /// PROPERTY: consecutive bare choices always share one anonymous group.
    #[test]
    fn property_no_adjacent_anonymous_groups(entries in entries()) {
        let groups = normalize(&entries);
        for pair in groups.windows(2) {
            prop_assert!(
                pair[0].headline.is_some() || pair[1].headline.is_some(),
                "adjacent anonymous groups in {:?}",
                groups
            );
        }
    }
}
