#![no_main]

use choosy::domain::services::{build_render_groups, normalize_raw};
use choosy::{Selection, SelectionType};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = serde_json::from_slice::<Vec<choosy::RawEntry>>(data) else {
        return;
    };
    if let Ok(groups) = normalize_raw(raw) {
        for selection_type in [SelectionType::Single, SelectionType::Multiple] {
            let _ = build_render_groups(&groups, &Selection::new(), selection_type, "");
        }
    }
});
