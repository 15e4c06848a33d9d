#![no_main]

use libfuzzer_sys::fuzz_target;
use std::path::Path;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Parsing and resolving config must never panic
        let _ = toml::from_str::<strata::Config>(content);
        if let Ok(config) = strata::config::parse(content, Path::new("fuzz.toml")) {
            let _ = config.rule_set();
        }
    }
});
