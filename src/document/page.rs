//! Pages
//!
//! A page owns an ordered list of component instances; the order is render
//! order, and the list is the unit of insert/remove/reorder. All mutation
//! helpers address components by id and are no-ops on unknown ids.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::component::{Component, ComponentId};

/// One page of a site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    /// Stable page identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// URL slug ("index", "about", ...)
    pub slug: String,
    /// Ordered component list; index order is display order
    #[serde(default)]
    pub components: Vec<Component>,
}

impl Page {
    /// Create an empty page
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            slug: slug.into(),
            components: Vec::new(),
        }
    }

    /// Append a component at the end
    pub fn push_component(&mut self, component: Component) {
        self.components.push(component);
    }

    /// Insert a component at the given position (clamped to the list length)
    pub fn insert_component(&mut self, index: usize, component: Component) {
        let index = index.min(self.components.len());
        self.components.insert(index, component);
    }

    /// Remove a component by id, returning it if present
    pub fn remove_component(&mut self, id: &ComponentId) -> Option<Component> {
        let index = self.components.iter().position(|c| &c.id == id)?;
        Some(self.components.remove(index))
    }

    /// Move a component to a new position (clamped). Returns `false` for
    /// unknown ids.
    pub fn move_component(&mut self, id: &ComponentId, to_index: usize) -> bool {
        let Some(from) = self.components.iter().position(|c| &c.id == id) else {
            return false;
        };
        let component = self.components.remove(from);
        let to_index = to_index.min(self.components.len());
        self.components.insert(to_index, component);
        true
    }

    /// Look up a component by id
    pub fn component(&self, id: &ComponentId) -> Option<&Component> {
        self.components.iter().find(|c| &c.id == id)
    }

    /// Look up a component mutably by id
    pub fn component_mut(&mut self, id: &ComponentId) -> Option<&mut Component> {
        self.components.iter_mut().find(|c| &c.id == id)
    }

    /// Duplicate a component in place: the copy (with fresh ids) is inserted
    /// right after the original. Returns the copy's id.
    pub fn duplicate_component(&mut self, id: &ComponentId) -> Option<ComponentId> {
        let index = self.components.iter().position(|c| &c.id == id)?;
        let copy = self.components[index].duplicate();
        let copy_id = copy.id.clone();
        self.components.insert(index + 1, copy);
        Some(copy_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(ids: &[&str]) -> Page {
        let mut page = Page::new("Home", "index");
        for id in ids {
            let mut c = Component::new("text");
            c.id = ComponentId::new(*id);
            page.push_component(c);
        }
        page
    }

    fn order(page: &Page) -> Vec<&str> {
        page.components.iter().map(|c| c.id.as_str()).collect()
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut page = page_with(&["a", "b"]);
        let mut c = Component::new("text");
        c.id = ComponentId::new("z");
        page.insert_component(99, c);
        assert_eq!(order(&page), vec!["a", "b", "z"]);
    }

    #[test]
    fn test_remove_returns_component() {
        let mut page = page_with(&["a", "b", "c"]);
        let removed = page.remove_component(&"b".into()).unwrap();
        assert_eq!(removed.id.as_str(), "b");
        assert_eq!(order(&page), vec!["a", "c"]);
        assert!(page.remove_component(&"b".into()).is_none());
    }

    #[test]
    fn test_move_component() {
        let mut page = page_with(&["a", "b", "c"]);
        assert!(page.move_component(&"c".into(), 0));
        assert_eq!(order(&page), vec!["c", "a", "b"]);

        // Clamped past the end.
        assert!(page.move_component(&"c".into(), 99));
        assert_eq!(order(&page), vec!["a", "b", "c"]);

        assert!(!page.move_component(&"missing".into(), 0));
    }

    #[test]
    fn test_duplicate_inserts_after_original() {
        let mut page = page_with(&["a", "b"]);
        let copy_id = page.duplicate_component(&"a".into()).unwrap();
        assert_eq!(page.components.len(), 3);
        assert_eq!(page.components[1].id, copy_id);
        assert_ne!(copy_id.as_str(), "a");
    }
}
