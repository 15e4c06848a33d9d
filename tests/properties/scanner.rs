//! Property tests for the import specifier scanner.

use proptest::prelude::*;

use strata::infrastructure::scan_imports;

fn specifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z@][a-z0-9/_-]{0,20}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: scanning never panics on arbitrary text.
    #[test]
    fn property_scan_never_panics(source in "(?s).{0,512}") {
        let _ = scan_imports(&source);
    }

    /// PROPERTY: generated import lines are found in order with exact positions.
    #[test]
    fn property_generated_imports_are_found(
        specifiers in proptest::collection::vec(specifier(), 1..8),
        indent in 0usize..4,
    ) {
        let pad = " ".repeat(indent);
        let source: String = specifiers
            .iter()
            .map(|s| format!("{pad}import x from '{s}'\n"))
            .collect();

        let found = scan_imports(&source);
        prop_assert_eq!(found.len(), specifiers.len());
        for (i, (import, expected)) in found.iter().zip(&specifiers).enumerate() {
            prop_assert_eq!(&import.specifier, expected);
            prop_assert_eq!(import.line, i + 1);
            prop_assert_eq!(import.column, indent + "import x from ".len() + 1);
        }
    }

    /// PROPERTY: commented-out imports are never reported.
    #[test]
    fn property_commented_imports_are_skipped(s in specifier()) {
        let source = format!("// import a from '{s}'\n/* require('{s}') */\n");
        prop_assert!(scan_imports(&source).is_empty());
    }
}
