use std::fmt::Write as _;
use std::path::Path;

use anyhow::Result;
use choosy::{ParsedControl, SelectControl};

pub fn cmd_parse(control: &Path, json: bool) -> Result<()> {
    let parsed = SelectControl::load(control)?.parse()?;

    if json {
        let output = serde_json::json!({
            "event": "parsed",
            "selection_type": parsed.selection_type,
            "placeholder": parsed.placeholder,
            "groups": parsed.groups,
            "selection": parsed.selection.to_map(),
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    print!("{}", render_parsed(&parsed));
    Ok(())
}

fn render_parsed(parsed: &ParsedControl) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Selection type: {}", parsed.selection_type);
    let _ = writeln!(
        out,
        "Placeholder: {}",
        parsed.placeholder.as_deref().unwrap_or("(none)")
    );

    for group in &parsed.groups {
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", group.headline.as_deref().unwrap_or("(ungrouped)"));
        for choice in &group.choices {
            let mark = if parsed.selection.is_selected(choice) {
                "[x]"
            } else {
                "[ ]"
            };
            let disabled = if choice.disabled { " (disabled)" } else { "" };
            let _ = writeln!(
                out,
                "  {mark} {} = {}{disabled}",
                choice.label, choice.value
            );
        }
    }

    let selected: Vec<&str> = parsed.selection.keys().collect();
    let _ = writeln!(out);
    let _ = writeln!(out, "Selected: {}", selected.join(", "));
    out
}
