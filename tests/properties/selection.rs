//! Property tests for the selection state machine.

use proptest::prelude::*;

use choosy::domain::services::SelectionMachine;
use choosy::{Choice, Selection, SelectionType};

/// `n` choices where `disabled[i]` marks choice `i` disabled
fn choices(disabled: &[bool]) -> Vec<Choice> {
    disabled
        .iter()
        .enumerate()
        .map(|(i, &off)| {
            let choice = Choice::new(format!("c{i}"), i as i64);
            if off {
                choice.disabled()
            } else {
                choice
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a single select without disabled choices holds exactly the last toggled choice.
    #[test]
    fn property_single_is_exclusive(
        toggles in proptest::collection::vec(0usize..6, 1..20)
    ) {
        let all = choices(&[false; 6]);
        let mut machine = SelectionMachine::new(SelectionType::Single, Selection::new());

        for &i in &toggles {
            prop_assert!(machine.toggle(&all[i], &all).is_changed());
            prop_assert_eq!(machine.selection().len(), 1);
        }

        let last = *toggles.last().unwrap();
        prop_assert!(machine.selection().is_selected(&all[last]));
    }

    /// PROPERTY: a multiple toggle flips exactly one enabled value and nothing else.
    #[test]
    fn property_multiple_toggle_is_a_flip(
        disabled in proptest::collection::vec(any::<bool>(), 1..8),
        initial in proptest::collection::vec(any::<bool>(), 8),
        pick in 0usize..8,
    ) {
        let all = choices(&disabled);
        let pick = pick % all.len();
        let start = Selection::from_values(
            all.iter().zip(&initial).filter(|(_, &on)| on).map(|(c, _)| c.value.clone()),
        );
        let mut machine = SelectionMachine::new(SelectionType::Multiple, start.clone());

        let changed = machine.toggle(&all[pick], &all).is_changed();
        prop_assert_eq!(changed, !all[pick].disabled);

        for (i, choice) in all.iter().enumerate() {
            let before = start.is_selected(choice);
            let after = machine.selection().is_selected(choice);
            if i == pick && changed {
                prop_assert_ne!(before, after);
            } else {
                prop_assert_eq!(before, after);
            }
        }

        machine.toggle(&all[pick], &all);
        prop_assert_eq!(machine.selection(), &start);
    }

    /// PROPERTY: reset leaves exactly the selected disabled choices.
    #[test]
    fn property_reset_keeps_sticky_disabled(
        disabled in proptest::collection::vec(any::<bool>(), 1..8),
        initial in proptest::collection::vec(any::<bool>(), 8),
    ) {
        let all = choices(&disabled);
        let start = Selection::from_values(
            all.iter().zip(&initial).filter(|(_, &on)| on).map(|(c, _)| c.value.clone()),
        );
        let mut machine = SelectionMachine::new(SelectionType::Multiple, start.clone());
        machine.reset(&all);

        let expected = Selection::from_values(
            all.iter()
                .filter(|c| c.disabled && start.is_selected(c))
                .map(|c| c.value.clone()),
        );
        prop_assert_eq!(machine.selection(), &expected);
    }
}
