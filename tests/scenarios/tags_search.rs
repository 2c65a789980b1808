//! Scenario: Tags select with inline search
//!
//! Journey: The user types into the tags input, picks a match from the
//! ranked list, and removes a tag again with Backspace.
//!
//! Success Criteria:
//! - Prefix matches rank ahead of subsequence matches
//! - The locked tag survives Backspace and reset

use choosy::domain::ports::RecordingSurface;
use choosy::ui::widgets::dropdown::{parse_script, run_script};
use choosy::{Dropdown, Selection, SelectControl};

use crate::common::*;

fn dropdown() -> Dropdown<RecordingSurface, impl FnMut(&Selection)> {
    let control: SelectControl = toml::from_str(TAGS_CONTROL).unwrap();
    Dropdown::new(
        control.parse().unwrap().props(),
        RecordingSurface::new(),
        |_: &Selection| {},
    )
}

/// SCENARIO: Typing filters and ranks, Enter picks the focused match
#[test]
fn scenario_type_then_pick() {
    let mut dropdown = dropdown();

    // Step 1: typing opens the overlay with ranked matches
    for key in parse_script("type:pe").unwrap() {
        let _ = run_script(&mut dropdown, &[key]);
    }
    assert!(dropdown.is_open());
    assert_eq!(dropdown.search(), "pe");

    let labels: Vec<String> = dropdown.render_groups()[0]
        .choices
        .iter()
        .map(|c| c.label.clone())
        .collect();
    assert_eq!(labels, vec!["Pear", "Peach", "Apple"]);

    // Step 2: arrow to the first match and pick it
    let picked = run_script(&mut dropdown, &parse_script("down,enter").unwrap());
    assert_eq!(picked, Some(Selection::from_values(["pear", "plum"])));

    // Step 3: the search is consumed by the pick
    assert_eq!(dropdown.search(), "");
}

/// SCENARIO: Backspace on an empty input removes the last removable tag
#[test]
fn scenario_backspace_removes_tag_but_not_locked_one() {
    let mut dropdown = dropdown();

    let picked = run_script(
        &mut dropdown,
        &parse_script("type:apple,down,enter,backspace,backspace").unwrap(),
    );

    assert_eq!(picked, Some(Selection::from_values(["plum"])));
}
