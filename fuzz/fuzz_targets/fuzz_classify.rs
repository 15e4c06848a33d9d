#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // First line is the source root, the rest a path or specifier
        let (root, rest) = content.split_once('\n').unwrap_or(("src", content));
        let _ = strata::classify_path(rest, root);
        let _ = strata::classify_import(rest, root);
    }
});
