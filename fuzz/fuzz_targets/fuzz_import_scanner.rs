#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        for import in strata::scan_imports(source) {
            assert!(import.line >= 1 && import.column >= 1);
            assert!(!import.specifier.is_empty());
        }
    }
});
