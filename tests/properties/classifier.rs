//! Property tests for path and import classification.

use proptest::prelude::*;

use strata::domain::services::{classify_import, classify_path};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,7}")
        .unwrap()
        .prop_filter("not the source root", |s| s != "src")
}

fn file_name() -> impl Strategy<Value = String> {
    let ext = prop_oneof![Just("ts"), Just("tsx"), Just("js"), Just("vue")];
    (segment(), ext).prop_map(|(stem, ext)| format!("{stem}.{ext}"))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: a path that never mentions the root does not classify.
    #[test]
    fn property_path_without_root_is_unclassified(
        segments in proptest::collection::vec(segment(), 0..6),
        name in file_name(),
    ) {
        let mut path = segments.join("/");
        path.push('/');
        path.push_str(&name);
        prop_assert!(classify_path(&path, "src").is_none());
    }

    /// PROPERTY: `<prefix>/src/<layer>/<slice>/<file>` gives `{layer, slice}`.
    #[test]
    fn property_slice_path_classifies(
        prefix in proptest::collection::vec(segment(), 0..4),
        layer in segment(),
        slice in segment(),
        nested in proptest::collection::vec(segment(), 0..3),
        name in file_name(),
        windows in any::<bool>(),
    ) {
        let mut parts = prefix.clone();
        parts.push("src".into());
        parts.push(layer.clone());
        parts.push(slice.clone());
        parts.extend(nested);
        parts.push(name);
        let path = parts.join(if windows { "\\" } else { "/" });

        let c = classify_path(&path, "src").unwrap();
        prop_assert_eq!(c.layer, layer);
        prop_assert_eq!(c.slice, Some(slice));
    }

    /// PROPERTY: `<root>/<layer>/<file>` is a layer-root file without a slice.
    #[test]
    fn property_layer_root_file_has_no_slice(
        layer in segment(),
        name in file_name(),
    ) {
        let path = format!("/home/dev/project/src/{layer}/{name}");
        let c = classify_path(&path, "src").unwrap();
        prop_assert_eq!(c.layer, layer);
        prop_assert_eq!(c.slice, None);
    }

    /// PROPERTY: relative and absolute specifiers never classify, whatever the root.
    #[test]
    fn property_local_specifiers_are_unclassified(
        lead in prop_oneof![Just("./"), Just("../"), Just("/"), Just(".")],
        rest in "[a-z/]{0,24}",
        root in "[a-z]{1,6}",
    ) {
        let specifier = format!("{lead}{rest}");
        prop_assert!(classify_import(&specifier, &root).is_none());
    }

    /// PROPERTY: the root prefix does not change an import's coordinate.
    #[test]
    fn property_root_prefix_is_transparent(
        layer in segment(),
        slice in proptest::option::of(segment()),
    ) {
        let bare = match &slice {
            Some(slice) => format!("{layer}/{slice}"),
            None => layer.clone(),
        };
        let prefixed = format!("src/{bare}");
        prop_assert_eq!(classify_import(&bare, "src"), classify_import(&prefixed, "src"));
    }

    /// PROPERTY: classification never panics on arbitrary text.
    #[test]
    fn property_classify_never_panics(
        text in "(?s).{0,128}",
        root in "(?s).{0,16}",
    ) {
        let _ = classify_path(&text, &root);
        let _ = classify_import(&text, &root);
    }
}
