mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements() {
        if let Some(found) = find_element(child, id) {
            return Some(found);
        }
    }

    None
}

/// Find an element by ID in the tree, mutably.
pub fn find_element_mut<'a>(root: &'a mut Element, id: &str) -> Option<&'a mut Element> {
    if root.id == id {
        return Some(root);
    }

    for child in root.child_elements_mut() {
        if let Some(found) = find_element_mut(child, id) {
            return Some(found);
        }
    }

    None
}

/// Collect the chain of elements from `root` down to (and including) `id`.
/// Returns false if `id` is not in the tree.
pub(crate) fn path_to<'a>(root: &'a Element, id: &str, path: &mut Vec<&'a Element>) -> bool {
    path.push(root);
    if root.id == id {
        return true;
    }
    for child in root.child_elements() {
        if path_to(child, id, path) {
            return true;
        }
    }
    path.pop();
    false
}

/// Collect descendants of `root` (excluding `root`) in document order.
pub(crate) fn collect_descendants<'a>(
    root: &'a Element,
    pred: &dyn Fn(&Element) -> bool,
    out: &mut Vec<&'a Element>,
) {
    for child in root.child_elements() {
        if pred(child) {
            out.push(child);
        }
        collect_descendants(child, pred, out);
    }
}
