//! Breadcrumb lookup over the static table.

use crate::spec::TreeNodeSpec;

/// Page searched when the requested page is not in the table.
pub const INDEX_PAGE: &str = "index.html";

/// Depth-first search for the first entry whose link equals `url`.
///
/// Returns the child indices from the top level down to the match. Siblings
/// are visited in table order and an entry is checked before its children.
pub fn find_path(url: &str, specs: &[TreeNodeSpec]) -> Option<Vec<usize>> {
    for (index, spec) in specs.iter().enumerate() {
        if spec.link.as_deref() == Some(url) {
            return Some(vec![index]);
        }
        if let Some(mut rest) = find_path(url, spec.children()) {
            rest.insert(0, index);
            return Some(rest);
        }
    }
    None
}

/// Breadcrumb path to `target`, falling back to [`INDEX_PAGE`].
pub fn locate_path(target: &str, specs: &[TreeNodeSpec]) -> Option<Vec<usize>> {
    locate_path_with_fallback(target, INDEX_PAGE, specs)
}

/// Breadcrumb path to `target`, falling back to `fallback` when `target` is
/// not linked anywhere.
pub fn locate_path_with_fallback(
    target: &str,
    fallback: &str,
    specs: &[TreeNodeSpec],
) -> Option<Vec<usize>> {
    find_path(target, specs).or_else(|| {
        log::debug!("Page {target:?} not in navigation table, trying {fallback:?}");
        find_path(fallback, specs)
    })
}
