//! Scenario: Widget mounted on a native multiple select
//!
//! Journey: A host page has a multiple select with a disabled option and an
//! optgroup. The widget is mounted on it, the user clicks a nested option,
//! and the selection is written back onto the control.
//!
//! Success Criteria:
//! - Initial selection mirrors the `selected` flags
//! - Clicking adds to the selection and notifies the host once
//! - The disabled option keeps its flag on write-back

use std::cell::RefCell;
use std::rc::Rc;

use choosy::domain::ports::RecordingSurface;
use choosy::{Selection, SelectControl, SelectionType, WidgetEvent};

use crate::common::*;

fn control() -> SelectControl {
    toml::from_str(MULTIPLE_CONTROL).expect("fixture parses")
}

/// SCENARIO: Initial selection is read from the control
#[test]
fn scenario_initial_selection_mirrors_control() {
    let parsed = control().parse().unwrap();

    assert_eq!(parsed.selection_type, SelectionType::Multiple);
    assert_eq!(parsed.selection, Selection::from_values(["b", "1.1"]));
    assert_eq!(parsed.groups.len(), 2);
    assert_eq!(parsed.groups[1].headline.as_deref(), Some("Group 1"));
}

/// SCENARIO: Clicking a nested option adds it and writes back
#[test]
fn scenario_click_nested_option_writes_back() {
    let mut control = control();
    let changes: Rc<RefCell<Vec<Selection>>> = Rc::default();
    let seen = Rc::clone(&changes);

    let mut dropdown = choosy::Dropdown::new(
        control.parse().unwrap().props(),
        RecordingSurface::new(),
        move |s: &Selection| seen.borrow_mut().push(s.clone()),
    );

    // Step 1: open and click "Nested 1.2"
    dropdown.handle(WidgetEvent::OpenerActivated);
    assert!(dropdown.is_open());
    dropdown.handle(WidgetEvent::ChoiceActivated("1.2".into()));

    let expected = Selection::from_values(["b", "1.1", "1.2"]);
    assert_eq!(dropdown.selection(), &expected);
    assert_eq!(changes.borrow().as_slice(), &[expected.clone()]);

    // Multiple mode keeps the overlay open
    assert!(dropdown.is_open());

    // Step 2: the selected choices now lead the overlay
    let pinned = &dropdown.render_groups()[0];
    assert!(pinned.is_header);
    let pinned_values: Vec<String> = pinned.choices.iter().map(|c| c.value.as_key()).collect();
    assert_eq!(pinned_values, vec!["b", "1.1", "1.2"]);

    // Step 3: clicking the disabled option changes nothing
    dropdown.handle(WidgetEvent::ChoiceActivated("c".into()));
    assert_eq!(changes.borrow().len(), 1);

    // Step 4: write back
    control.write_back(dropdown.selection());
    assert_eq!(control.selected_values(), vec!["b", "1.1", "1.2"]);
}

/// SCENARIO: Reset keeps nothing but the locked choices
#[test]
fn scenario_reset_clears_selectable_choices() {
    let mut dropdown = choosy::Dropdown::new(
        control().parse().unwrap().props(),
        RecordingSurface::new(),
        |_: &Selection| {},
    );

    dropdown.handle(WidgetEvent::OpenerActivated);
    assert!(dropdown.is_clearable());
    dropdown.handle(WidgetEvent::ResetActivated);

    assert!(dropdown.selection().is_empty());
    assert!(!dropdown.is_clearable());
}

/// SCENARIO: Outside pointer press closes and releases the listener
#[test]
fn scenario_outside_press_closes_overlay() {
    use choosy::application::Layout;
    use choosy::domain::value_objects::Rect;

    let mut dropdown = choosy::Dropdown::new(
        control().parse().unwrap().props(),
        RecordingSurface::new(),
        |_: &Selection| {},
    );
    dropdown.handle(WidgetEvent::Resized(Layout {
        trigger: Rect::new(0, 1, 40, 1),
        viewport: Rect::new(0, 0, 80, 24),
    }));

    dropdown.handle(WidgetEvent::OpenerActivated);
    assert_eq!(dropdown.surface().active_listeners(), 1);
    assert!(dropdown.surface().placement.is_some());

    dropdown.handle(WidgetEvent::PointerDown { col: 79, row: 23 });
    assert!(!dropdown.is_open());
    assert_eq!(dropdown.surface().active_listeners(), 0);
    assert!(!dropdown.surface().attached);
}
