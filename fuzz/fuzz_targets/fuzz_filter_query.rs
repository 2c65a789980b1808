#![no_main]

use choosy::domain::services::rank;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Ranking must never panic, including on case folding that
        // changes the byte length
        let mid = content.len() / 2;
        if content.is_char_boundary(mid) {
            let (label, query) = content.split_at(mid);
            let _ = rank(label, query);
        }
    }
});
