#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // A control that deserializes must parse or fail with a
        // configuration error, never panic
        if let Ok(mut control) = toml::from_str::<choosy::SelectControl>(content) {
            if let Ok(parsed) = control.parse() {
                control.write_back(&parsed.selection);
            }
        }
    }
});
