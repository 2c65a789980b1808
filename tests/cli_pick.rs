mod common;

use common::*;

#[test]
fn test_pick_without_terminal_confirms_initial_selection() {
    let env = TestEnv::new();
    env.write_file("control.toml", MULTIPLE_CONTROL);

    let result = env.run(&["pick", "control.toml"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_eq!(result.stdout.trim(), "Selected: 1.1, b");
}

#[test]
fn test_pick_stream_prints_each_change() {
    let env = TestEnv::new();
    env.write_file("control.toml", MULTIPLE_CONTROL);

    // First focus lands on the pinned "test2"; toggling drops it
    let result = env.run(&[
        "pick",
        "control.toml",
        "--keys",
        "space,down,space",
        "--stream",
    ]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    let lines: Vec<&str> = result.stdout.lines().collect();
    assert_eq!(lines.len(), 2, "stdout:\n{}", result.stdout);

    let change: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
    assert_eq!(change["event"], "change");
    assert_eq!(change["selection"], serde_json::json!({ "1.1": true }));
    assert_eq!(lines[1], "Selected: 1.1");
}

#[test]
fn test_pick_entries_and_type_override() {
    let env = TestEnv::new();
    env.write_file("control.toml", MULTIPLE_CONTROL);
    env.write_file("entries.json", ENTRIES_JSON);

    let result = env.run(&[
        "pick",
        "control.toml",
        "--entries",
        "entries.json",
        "--type",
        "single",
        "--keys",
        "space,down,enter",
    ]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_eq!(result.stdout.trim(), "Selected: red");
}

#[test]
fn test_pick_rejects_unknown_key() {
    let env = TestEnv::new();
    env.write_file("control.toml", MULTIPLE_CONTROL);

    let result = env.run(&["pick", "control.toml", "--keys", "down,jump"]);

    assert!(!result.is_success());
    assert!(
        result.stderr.contains("unknown key 'jump' in key script"),
        "stderr: {}",
        result.stderr
    );
}

#[test]
fn test_pick_write_json_control() {
    let env = TestEnv::new();
    env.write_file("control.json", MULTIPLE_CONTROL_JSON);

    let result = env.run(&[
        "pick",
        "control.json",
        "--keys",
        "space,down,down,down,space",
        "--write",
    ]);
    assert!(result.is_success(), "stderr: {}", result.stderr);

    let saved: serde_json::Value = serde_json::from_str(&env.read_file("control.json")).unwrap();
    assert_eq!(saved["nodes"][0]["selected"], true);
    assert_eq!(saved["nodes"][1]["selected"], true);
    assert_eq!(saved["nodes"][2]["disabled"], true);
}

#[test]
fn test_searchable_env_override_enables_typing() {
    let env = TestEnv::new();
    env.write_file("control.toml", MULTIPLE_CONTROL);

    let result = env.run_with_env(
        &["pick", "control.toml", "--keys", "space,type:1.2,down,enter"],
        &[("CHOOSY_SEARCHABLE", "true")],
    );

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert_eq!(result.stdout.trim(), "Selected: 1.1, 1.2, b");
}

#[test]
fn test_project_config_warns_on_unknown_key() {
    let env = TestEnv::new();
    env.write_file("control.toml", MULTIPLE_CONTROL);
    env.write_file(".choosy.toml", "[display]\ncolour = \"never\"\n");

    let result = env.run(&["pick", "control.toml"]);

    assert!(result.is_success(), "stderr: {}", result.stderr);
    assert!(
        result
            .stderr
            .contains("warning: unknown config key 'colour'"),
        "stderr: {}",
        result.stderr
    );
    assert!(result.stderr.contains("(did you mean 'color'?)"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let env = TestEnv::new();
    env.write_file("control.toml", MULTIPLE_CONTROL);
    env.write_file("custom.toml", "[search]\nthreshold = \"many\"\n");

    let result = env.run(&["--config", "custom.toml", "pick", "control.toml"]);

    assert!(!result.is_success());
    assert!(
        result.stderr.contains("invalid config in"),
        "stderr: {}",
        result.stderr
    );
}
