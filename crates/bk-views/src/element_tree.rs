//! Element tree display surface

use ahash::AHashMap;
use tracing::trace;
use uuid::Uuid;

use bk_core::{DisplaySurface, DisplayUnit, RecordId, UiTree};

/// Unique identifier for an element
///
/// Ids are never reused, so a handle kept across a clear simply stops
/// resolving.
pub type ElementId = Uuid;

/// What an element represents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// The list container every unit hangs off
    List,
    /// A display unit boundary
    Unit,
    /// Cover image inside a unit
    Image,
    /// Title text inside a unit
    Title,
    /// Author text inside a unit
    Author,
}

/// A node of the tree
#[derive(Debug, Clone)]
pub struct Element {
    pub kind: ElementKind,
    pub parent: Option<ElementId>,
    pub children: Vec<ElementId>,

    /// Set on unit boundaries only
    pub record_id: Option<RecordId>,

    /// Text content or image URL
    pub text: String,
}

/// Display surface built as a tree of elements
#[derive(Debug, Clone)]
pub struct ElementTree {
    root: ElementId,
    elements: AHashMap<ElementId, Element>,
    units: Vec<(ElementId, DisplayUnit)>,
}

impl ElementTree {
    /// Create a tree holding only the list container
    pub fn new() -> Self {
        let root = Uuid::new_v4();
        let mut elements = AHashMap::new();
        elements.insert(
            root,
            Element {
                kind: ElementKind::List,
                parent: None,
                children: Vec::new(),
                record_id: None,
                text: String::new(),
            },
        );

        Self {
            root,
            elements,
            units: Vec::new(),
        }
    }

    /// The list container
    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn get(&self, id: ElementId) -> Option<&Element> {
        self.elements.get(&id)
    }

    /// Child elements in insertion order
    pub fn children(&self, id: ElementId) -> &[ElementId] {
        self.elements
            .get(&id)
            .map(|element| element.children.as_slice())
            .unwrap_or(&[])
    }

    /// Unit boundaries with their units, in render order
    pub fn units(&self) -> impl Iterator<Item = (ElementId, &DisplayUnit)> + '_ {
        self.units.iter().map(|(id, unit)| (*id, unit))
    }

    /// Element of the unit at a render position
    pub fn unit_element(&self, position: usize) -> Option<ElementId> {
        self.units.get(position).map(|(id, _)| *id)
    }

    /// Total number of elements, the list container included
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    fn insert(&mut self, parent: ElementId, kind: ElementKind, text: String, record_id: Option<RecordId>) -> ElementId {
        let id = Uuid::new_v4();
        self.elements.insert(
            id,
            Element {
                kind,
                parent: Some(parent),
                children: Vec::new(),
                record_id,
                text,
            },
        );
        if let Some(parent) = self.elements.get_mut(&parent) {
            parent.children.push(id);
        }
        id
    }

    fn insert_unit(&mut self, unit: &DisplayUnit) -> ElementId {
        let unit_id = self.insert(self.root, ElementKind::Unit, String::new(), Some(unit.record_id.clone()));
        self.insert(unit_id, ElementKind::Image, unit.image.clone(), None);
        self.insert(unit_id, ElementKind::Title, unit.title.clone(), None);
        self.insert(unit_id, ElementKind::Author, unit.author.clone(), None);
        unit_id
    }
}

impl Default for ElementTree {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for ElementTree {
    fn append(&mut self, units: Vec<DisplayUnit>) {
        trace!(count = units.len(), "Appending units");
        for unit in units {
            let id = self.insert_unit(&unit);
            self.units.push((id, unit));
        }
    }

    fn clear_all(&mut self) {
        let root = self.root;
        self.elements.retain(|id, _| *id == root);
        if let Some(list) = self.elements.get_mut(&root) {
            list.children.clear();
        }
        self.units.clear();
    }

    fn len(&self) -> usize {
        self.units.len()
    }
}

impl UiTree for ElementTree {
    type Node = ElementId;

    fn parent(&self, node: ElementId) -> Option<ElementId> {
        self.elements.get(&node).and_then(|element| element.parent)
    }

    fn correlation_key(&self, node: ElementId) -> Option<&RecordId> {
        self.elements
            .get(&node)
            .filter(|element| element.kind == ElementKind::Unit)
            .and_then(|element| element.record_id.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bk_core::{nearest_tagged_ancestor, AuthorTable, Catalog, FilterQuery, GenreTable, PageSize, Record, Session};
    use chrono::{TimeZone, Utc};

    fn unit(id: &str) -> DisplayUnit {
        DisplayUnit {
            record_id: RecordId::new(id),
            title: format!("Title {}", id),
            author: format!("Author {}", id),
            image: format!("https://covers.example.org/{}.jpg", id),
        }
    }

    #[test]
    fn test_append_builds_unit_subtrees() {
        let mut tree = ElementTree::new();
        tree.append(vec![unit("a"), unit("b")]);

        assert_eq!(tree.len(), 2);
        assert_eq!(tree.children(tree.root()).len(), 2);
        // list + 2 * (unit + image + title + author)
        assert_eq!(tree.element_count(), 9);

        let unit_b = tree.unit_element(1).unwrap();
        let kinds: Vec<_> = tree
            .children(unit_b)
            .iter()
            .map(|id| tree.get(*id).unwrap().kind)
            .collect();
        assert_eq!(kinds, vec![ElementKind::Image, ElementKind::Title, ElementKind::Author]);
    }

    #[test]
    fn test_leaf_resolves_to_enclosing_unit() {
        let mut tree = ElementTree::new();
        tree.append(vec![unit("a"), unit("b")]);

        let unit_a = tree.unit_element(0).unwrap();
        let title = tree.children(unit_a)[1];
        let (node, key) = nearest_tagged_ancestor(&tree, title).unwrap();
        assert_eq!(node, unit_a);
        assert_eq!(key.as_str(), "a");
    }

    #[test]
    fn test_list_container_is_not_a_unit() {
        let mut tree = ElementTree::new();
        tree.append(vec![unit("a")]);
        assert!(nearest_tagged_ancestor(&tree, tree.root()).is_none());
    }

    #[test]
    fn test_clear_invalidates_old_handles() {
        let mut tree = ElementTree::new();
        tree.append(vec![unit("a")]);
        let stale = tree.unit_element(0).unwrap();

        tree.clear_all();
        assert!(tree.is_empty());
        assert_eq!(tree.element_count(), 1);
        assert!(tree.children(tree.root()).is_empty());
        assert!(nearest_tagged_ancestor(&tree, stale).is_none());
    }

    #[test]
    fn test_append_after_clear_starts_fresh() {
        let mut tree = ElementTree::new();
        tree.append(vec![unit("a"), unit("b")]);
        tree.clear_all();
        tree.append(vec![unit("c")]);

        let ids: Vec<_> = tree.units().map(|(_, u)| u.record_id.as_str()).collect();
        assert_eq!(ids, vec!["c"]);
    }
    fn catalog() -> Catalog {
        let records = [("a", "Ancillary Justice", "leckie"), ("b", "Blindsight", "watts"), ("c", "Consider Phlebas", "banks")]
            .into_iter()
            .map(|(id, title, author)| Record {
                id: RecordId::new(id),
                title: title.to_string(),
                author_id: author.to_string(),
                image: format!("https://covers.example.org/{}.jpg", id),
                description: String::new(),
                published: Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap(),
                genres: ["scifi".to_string()].into_iter().collect(),
            })
            .collect();
        let authors: AuthorTable = [("leckie", "Ann Leckie"), ("watts", "Peter Watts"), ("banks", "Iain Banks")]
            .into_iter()
            .collect();
        Catalog::new(records, authors, GenreTable::new()).unwrap()
    }

    #[test]
    fn test_session_selects_through_leaf_elements() {
        let session = Session::new(catalog(), PageSize::new(2).unwrap(), ElementTree::new());
        let tree = session.surface();

        let unit_b = tree.unit_element(1).unwrap();
        let image = tree.children(unit_b)[0];
        let title = tree.children(unit_b)[1];
        assert_eq!(tree.get(image).unwrap().kind, ElementKind::Image);
        assert_eq!(tree.get(title).unwrap().kind, ElementKind::Title);

        assert_eq!(session.select(title).unwrap().id.as_str(), "b");
        assert_eq!(session.select(image).unwrap().id.as_str(), "b");
        assert_eq!(session.select(unit_b).unwrap().id.as_str(), "b");
        assert!(session.select(tree.root()).is_none());
    }

    #[test]
    fn test_session_drops_elements_from_before_a_filter() {
        let mut session = Session::new(catalog(), PageSize::new(2).unwrap(), ElementTree::new());
        let unit_a = session.surface().unit_element(0).unwrap();
        let stale_title = session.surface().children(unit_a)[1];

        session.submit_filter(FilterQuery::all().with_title("consider"));

        assert!(session.select(unit_a).is_none());
        assert!(session.select(stale_title).is_none());

        let fresh = session.surface().unit_element(0).unwrap();
        assert_eq!(session.select(fresh).unwrap().id.as_str(), "c");
    }
}
