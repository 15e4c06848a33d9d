//! Path/Import classifier
//!
//! Pure, lexical mapping of file paths and import specifiers to
//! `(layer, slice)` coordinates. Nothing here touches the filesystem or
//! resolves modules.

use crate::domain::value_objects::Coordinate;

/// Split a path into normalized segments: both separator styles, no empty
/// or `.` segments, `..` folded into its parent.
fn normalized_segments(path: &str) -> Vec<&str> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split(['/', '\\']) {
        match segment {
            "" | "." => {}
            ".." => match segments.last() {
                Some(last) if *last != ".." => {
                    segments.pop();
                }
                _ => segments.push(".."),
            },
            other => segments.push(other),
        }
    }
    segments
}

/// Classify a file path relative to the source root directory name.
///
/// Returns `None` when the root does not occur in the path or nothing
/// follows it. A final segment containing a `.` directly under the layer is
/// a layer-root file, so it gets no slice.
///
/// ```
/// use strata::domain::services::classify_path;
///
/// let c = classify_path("src/widgets/button/index.ts", "src").unwrap();
/// assert_eq!(c.layer, "widgets");
/// assert_eq!(c.slice.as_deref(), Some("button"));
///
/// assert_eq!(classify_path("src/widgets/index.ts", "src").unwrap().slice, None);
/// assert!(classify_path("lib/widgets/button/index.ts", "src").is_none());
/// ```
pub fn classify_path(path: &str, src_root: &str) -> Option<Coordinate> {
    let segments = normalized_segments(path);
    let root = normalized_segments(src_root);
    if root.is_empty() || segments.len() <= root.len() {
        return None;
    }

    let start = segments
        .windows(root.len())
        .position(|window| window == root.as_slice())?;
    let layer_index = start + root.len();
    let layer = segments.get(layer_index)?;

    let slice_index = layer_index + 1;
    let slice = segments.get(slice_index).filter(|candidate| {
        let is_last = slice_index == segments.len() - 1;
        !(is_last && candidate.contains('.'))
    });

    Some(Coordinate::new(*layer, slice.map(|s| s.to_string())))
}

/// True for specifiers that are relative or absolute paths.
pub fn is_local_specifier(specifier: &str) -> bool {
    specifier.starts_with('.') || specifier.starts_with('/')
}

/// Classify an import specifier.
///
/// Local specifiers (`./x`, `../x`, `/x`) and the empty string never
/// classify. A leading source-root prefix (`src/widgets/...`) is stripped, so
/// every boundary rule sees `widgets/...` either way.
///
/// ```
/// use strata::domain::services::classify_import;
///
/// let c = classify_import("src/entities/user/model", "src").unwrap();
/// assert_eq!(c.layer, "entities");
/// assert_eq!(c.slice.as_deref(), Some("user"));
///
/// assert_eq!(classify_import("shared", "src").unwrap().slice, None);
/// assert!(classify_import("./local", "src").is_none());
/// ```
pub fn classify_import(specifier: &str, src_root: &str) -> Option<Coordinate> {
    if specifier.is_empty() || is_local_specifier(specifier) {
        return None;
    }

    let segments: Vec<&str> = specifier.split('/').collect();
    let root = normalized_segments(src_root);
    let offset = if !root.is_empty()
        && segments.len() >= root.len()
        && segments[..root.len()] == root[..]
    {
        root.len()
    } else {
        0
    };

    let layer = segments.get(offset).filter(|s| !s.is_empty())?;
    let slice = segments
        .get(offset + 1)
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string());

    Some(Coordinate::new(*layer, slice))
}
