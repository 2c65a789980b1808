//! Scenario: Keyboard-only picking from the command line
//!
//! Journey: A script drives `choosy pick` with a key list, the way a CI job
//! or a test harness without a terminal would.
//!
//! Steps:
//! 1. Writes a select control file
//! 2. Opens the widget, arrows down to a choice and toggles it
//! 3. Saves the selection back into the control file
//!
//! Success Criteria:
//! - The confirmed selection is printed
//! - `--write` persists the `selected` flags

use crate::common::*;

/// SCENARIO: Multiple select, arrow to the last choice and toggle it
#[test]
fn scenario_multiple_pick_adds_nested_choice() {
    let env = TestEnv::new();
    env.write_file("control.toml", MULTIPLE_CONTROL);

    // Focus order: pinned b, 1.1, then a, then Group 1's 1.2
    let result = env.run(&[
        "pick",
        "control.toml",
        "--keys",
        "space,down,down,down,down,space",
    ]);

    assert!(
        result.is_success(),
        "pick should succeed.\nstderr: {}",
        result.stderr
    );
    assert_eq!(result.stdout.trim(), "Selected: 1.1, 1.2, b");
}

/// SCENARIO: Single select picks, closes, and writes the file back
#[test]
fn scenario_single_pick_writes_control() {
    let env = TestEnv::new();
    env.write_file("fruit.toml", SINGLE_CONTROL);

    // Step 1: preferred Kiwi comes first, Apple second
    let result = env.run(&[
        "--json",
        "pick",
        "fruit.toml",
        "--keys",
        "space,down,down,enter",
        "--write",
    ]);
    assert!(result.is_success(), "stderr: {}", result.stderr);

    // Step 2: the change event names the pick
    let event = result.json();
    assert_eq!(event["event"], "change");
    assert_eq!(event["selection"], serde_json::json!({ "apple": true }));

    // Step 3: the file now carries the flag
    let saved: choosy::SelectControl = toml::from_str(&env.read_file("fruit.toml")).unwrap();
    assert_eq!(saved.selected_values(), vec!["apple"]);

    // Step 4: picking again starts from the saved state
    let result = env.run(&["pick", "fruit.toml", "--keys", "enter"]);
    assert_eq!(result.stdout.trim(), "Selected: apple");
}

/// SCENARIO: Escape on the closed widget aborts without touching the file
#[test]
fn scenario_abort_leaves_control_untouched() {
    let env = TestEnv::new();
    env.write_file("control.toml", MULTIPLE_CONTROL);

    let result = env.run(&[
        "pick",
        "control.toml",
        "--keys",
        "space,down,space,esc,esc",
        "--write",
    ]);

    assert!(!result.is_success());
    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("selection aborted by user"),
        "stderr: {}",
        result.stderr
    );
    assert_eq!(env.read_file("control.toml"), MULTIPLE_CONTROL);
}
