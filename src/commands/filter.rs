use std::path::Path;

use anyhow::Result;
use choosy::domain::services::{deduplicate, filter, flatten_for_display};
use choosy::{Labels, SelectControl};

pub fn cmd_filter(control: &Path, query: &str, json: bool) -> Result<()> {
    let parsed = SelectControl::load(control)?.parse()?;
    let matches = filter(&deduplicate(flatten_for_display(&parsed.groups)), query);
    tracing::debug!(query, matches = matches.len(), "filtered");

    if json {
        let output = serde_json::json!({
            "event": "filtered",
            "query": query,
            "matches": matches,
        });
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if matches.is_empty() {
        println!("{}", Labels::default().empty_results_message);
        return Ok(());
    }
    for choice in &matches {
        println!("{}", choice.display_label(true));
    }
    Ok(())
}
