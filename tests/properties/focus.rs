//! Property tests for focus navigation and render groups.

use proptest::prelude::*;

use choosy::domain::services::{build_render_groups, focusable, move_focus, Direction, FocusMove};
use choosy::{Choice, ChoiceValue, Group, Selection, SelectionType};

fn visible(n: usize) -> Vec<ChoiceValue> {
    (0..n as i64).map(ChoiceValue::from).collect()
}

fn direction() -> impl Strategy<Value = Direction> {
    prop_oneof![Just(Direction::Up), Just(Direction::Down)]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: focus is always a visible value or nothing, and only Up from the first closes.
    #[test]
    fn property_focus_stays_in_visible(
        n in 1usize..8,
        moves in proptest::collection::vec(direction(), 0..30),
    ) {
        let visible = visible(n);
        let mut focus: Option<ChoiceValue> = None;

        for direction in moves {
            match move_focus(&visible, focus.as_ref(), direction) {
                FocusMove::Focus(next) => {
                    if let Some(value) = &next {
                        prop_assert!(visible.contains(value));
                    }
                    focus = next;
                }
                FocusMove::Close => {
                    prop_assert_eq!(direction, Direction::Up);
                    prop_assert_eq!(focus.as_ref(), visible.first());
                    focus = None;
                }
            }
        }
    }

    /// PROPERTY: Down never closes and never moves past the last value.
    #[test]
    fn property_down_clamps(n in 1usize..8, start in 0usize..8) {
        let visible = visible(n);
        let current = visible[start % n].clone();
        let next = move_focus(&visible, Some(&current), Direction::Down);
        let expected = visible[(start % n + 1).min(n - 1)].clone();
        prop_assert_eq!(next, FocusMove::Focus(Some(expected)));
    }

    /// PROPERTY: in multiple mode every choice is rendered exactly once, selected ones pinned first.
    #[test]
    fn property_render_groups_partition_choices(
        sizes in proptest::collection::vec(0usize..4, 1..5),
        selected in proptest::collection::vec(any::<bool>(), 16),
    ) {
        let mut next = 0i64;
        let groups: Vec<Group> = sizes
            .iter()
            .enumerate()
            .map(|(i, &size)| {
                let choices = (0..size)
                    .map(|_| {
                        next += 1;
                        Choice::new(format!("c{next}"), next)
                    })
                    .collect();
                Group::named(format!("G{i}"), choices)
            })
            .collect();

        let selection = Selection::from_values(
            (1..=next).filter(|v| selected[(*v as usize) % selected.len()]),
        );
        let rendered = build_render_groups(&groups, &selection, SelectionType::Multiple, "");

        let mut shown: Vec<ChoiceValue> = focusable(&rendered);
        shown.sort();
        let mut all: Vec<ChoiceValue> = (1..=next).map(ChoiceValue::from).collect();
        all.sort();
        prop_assert_eq!(shown, all);

        prop_assert!(rendered.iter().all(|g| !g.choices.is_empty()));
        for (i, group) in rendered.iter().enumerate() {
            let pinned = i == 0 && !selection.is_empty();
            prop_assert_eq!(group.is_header, pinned);
            prop_assert!(group.choices.iter().all(|c| selection.is_selected(c) == pinned));
        }
    }
}
