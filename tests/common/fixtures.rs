//! Test fixtures - reusable select controls for tests.

/// Multiple select with a disabled option and a nested group.
///
/// Starts with `test2` (b) and `Nested 1.1` (1.1) selected.
pub const MULTIPLE_CONTROL: &str = r#"
multiple = true

[[nodes]]
label = "test1"
value = "a"

[[nodes]]
label = "test2"
value = "b"
selected = true

[[nodes]]
label = "test3"
value = "c"
disabled = true

[[nodes]]
group = "Group 1"
options = [
    { label = "Nested 1.1", value = "1.1", selected = true },
    { label = "Nested 1.2", value = "1.2" },
]
"#;

/// Single select with a placeholder option and a preferred block
pub const SINGLE_CONTROL: &str = r#"
[[nodes]]
label = "Pick a fruit"
value = ""

[[nodes]]
label = "Kiwi"
value = "kiwi"

[[nodes]]
label = "-------------------"
disabled = true

[[nodes]]
label = "Apple"
value = "apple"

[[nodes]]
label = "Pear"
value = "pear"
"#;

/// Tags select over fruit, one locked tag
pub const TAGS_CONTROL: &str = r#"
multiple = true
mode = "tags"

[[nodes]]
label = "Apple"
value = "apple"

[[nodes]]
label = "Pear"
value = "pear"

[[nodes]]
label = "Peach"
value = "peach"

[[nodes]]
label = "Plum"
value = "plum"
selected = true
disabled = true
"#;

/// Same options as [`MULTIPLE_CONTROL`], as JSON
pub const MULTIPLE_CONTROL_JSON: &str = r#"{
  "multiple": true,
  "nodes": [
    { "label": "test1", "value": "a" },
    { "label": "test2", "value": "b", "selected": true },
    { "label": "test3", "value": "c", "disabled": true },
    {
      "group": "Group 1",
      "options": [
        { "label": "Nested 1.1", "value": "1.1", "selected": true },
        { "label": "Nested 1.2", "value": "1.2" }
      ]
    }
  ]
}
"#;

/// Host entries replacing a control's options
pub const ENTRIES_JSON: &str = r#"[
  { "label": "Red", "value": "red" },
  { "headline": "Cool", "choices": [
    { "label": "Blue", "value": "blue" },
    { "label": "Green", "value": "green" }
  ] }
]
"#;
