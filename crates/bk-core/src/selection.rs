//! Selection resolver
//!
//! A click can land on any part of a rendered unit (its image, its title).
//! The record is found by walking outward from the hit element to the nearest
//! enclosing element that carries a correlation key.

use tracing::debug;

use crate::error::CatalogError;
use crate::model::{Catalog, Record, RecordId};

/// Whatever tree of UI elements the platform renders units into
pub trait UiTree {
    /// Handle to an element in the tree
    type Node: Copy;

    /// Enclosing element, or `None` at the top of the chain
    fn parent(&self, node: Self::Node) -> Option<Self::Node>;

    /// Record id if the element is a display unit boundary
    fn correlation_key(&self, node: Self::Node) -> Option<&RecordId>;
}

/// Walk from `target` outward and return the first tagged element
pub fn nearest_tagged_ancestor<T: UiTree>(tree: &T, target: T::Node) -> Option<(T::Node, &RecordId)> {
    let mut current = Some(target);
    while let Some(node) = current {
        if let Some(key) = tree.correlation_key(node) {
            return Some((node, key));
        }
        current = tree.parent(node);
    }
    None
}

/// Resolve an interaction target to a record in the universe
pub fn resolve<'c, T: UiTree>(
    tree: &T,
    target: T::Node,
    catalog: &'c Catalog,
) -> Result<&'c Record, CatalogError> {
    let (_, key) = nearest_tagged_ancestor(tree, target).ok_or(CatalogError::NoDisplayUnit)?;
    catalog
        .find(key.as_str())
        .ok_or_else(|| CatalogError::RecordNotFound(key.clone()))
}

/// Like [`resolve`], but a miss is just "nothing selected"
pub fn resolve_or_none<'c, T: UiTree>(tree: &T, target: T::Node, catalog: &'c Catalog) -> Option<&'c Record> {
    match resolve(tree, target, catalog) {
        Ok(record) => Some(record),
        Err(err) => {
            debug!(error = %err, "Interaction did not resolve to a record");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::five_books;

    /// Nodes 0..n with explicit parents and optional tags
    struct TestTree {
        parents: Vec<Option<usize>>,
        tags: Vec<Option<RecordId>>,
    }

    impl UiTree for TestTree {
        type Node = usize;

        fn parent(&self, node: usize) -> Option<usize> {
            self.parents.get(node).copied().flatten()
        }

        fn correlation_key(&self, node: usize) -> Option<&RecordId> {
            self.tags.get(node).and_then(Option::as_ref)
        }
    }

    // 0 root
    // ├── 1 unit(B)
    // │   └── 2 image
    // │       └── 3 caption
    // ├── 4 unit(ZZ, not in catalog)
    // └── 5 plain
    fn tree() -> TestTree {
        TestTree {
            parents: vec![None, Some(0), Some(1), Some(2), Some(0), Some(0)],
            tags: vec![
                None,
                Some(RecordId::new("B")),
                None,
                None,
                Some(RecordId::new("ZZ")),
                None,
            ],
        }
    }

    #[test]
    fn test_walks_to_nearest_unit() {
        let tree = tree();
        let (node, key) = nearest_tagged_ancestor(&tree, 3).unwrap();
        assert_eq!(node, 1);
        assert_eq!(key.as_str(), "B");
    }

    #[test]
    fn test_resolve_finds_record() {
        let catalog = five_books();
        let record = resolve(&tree(), 2, &catalog).unwrap();
        assert_eq!(record.title, "Beta Testing");
    }

    #[test]
    fn test_untagged_chain_resolves_to_nothing() {
        let catalog = five_books();
        assert_eq!(resolve(&tree(), 5, &catalog), Err(CatalogError::NoDisplayUnit));
        assert!(resolve_or_none(&tree(), 0, &catalog).is_none());
    }

    #[test]
    fn test_unknown_key_is_not_found() {
        let catalog = five_books();
        let err = resolve(&tree(), 4, &catalog).unwrap_err();
        assert_eq!(err, CatalogError::RecordNotFound(RecordId::new("ZZ")));
        assert!(err.is_not_found());
    }
}
