//! Property tests for the import boundary rules.

use std::path::Path;

use proptest::prelude::*;

use strata::domain::services::{
    CrossSliceImports, CrossSliceImportsSettings, HigherLevelImports, HigherLevelImportsSettings,
    ImportCheck,
};
use strata::domain::value_objects::{Location, Violation, DEFAULT_ISOLATED_LAYERS, DEFAULT_LAYERS};
use strata::infrastructure::GlobMatcher;

fn slice() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,6}").unwrap()
}

fn findings(check: &dyn ImportCheck, specifier: &str) -> Vec<(Location, Violation)> {
    let mut sink = Vec::new();
    check.check_import(specifier, &Location::at("f.ts", 1, 1), &mut sink);
    sink
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: an import is upward exactly when its layer sits earlier in the order.
    #[test]
    fn property_upward_imports_follow_layer_order(
        current in 0..DEFAULT_LAYERS.len(),
        imported in 0..DEFAULT_LAYERS.len(),
        own in slice(),
        target in slice(),
    ) {
        let settings = HigherLevelImportsSettings::default();
        let matcher = GlobMatcher::new();
        let file = format!("src/{}/{own}/model.ts", DEFAULT_LAYERS[current]);
        let check = HigherLevelImports::for_file(&settings, &matcher, Path::new(&file)).unwrap();

        let reported = findings(&check, &format!("{}/{target}", DEFAULT_LAYERS[imported]));
        prop_assert_eq!(reported.len(), usize::from(imported < current));
    }

    /// PROPERTY: within an isolated layer, only a different slice is reported.
    #[test]
    fn property_cross_slice_only_within_layer(
        layer in 0..DEFAULT_ISOLATED_LAYERS.len(),
        other_layer in 0..DEFAULT_LAYERS.len(),
        own in slice(),
        target in slice(),
    ) {
        let settings = CrossSliceImportsSettings::default();
        let matcher = GlobMatcher::new();
        let layer = DEFAULT_ISOLATED_LAYERS[layer];
        let file = format!("src/{layer}/{own}/ui/Card.tsx");
        let check = CrossSliceImports::for_file(&settings, &matcher, Path::new(&file)).unwrap();

        let same_layer = findings(&check, &format!("{layer}/{target}/model"));
        prop_assert_eq!(same_layer.len(), usize::from(own != target));

        let other = DEFAULT_LAYERS[other_layer];
        if other != layer {
            let cross_layer = format!("{other}/{target}");
            prop_assert!(findings(&check, &cross_layer).is_empty());
        }
    }
}
