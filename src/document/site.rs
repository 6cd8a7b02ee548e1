//! Sites
//!
//! A site owns an ordered list of pages plus the theme palette. It is the
//! unit of persistence: the whole tree round-trips through the store as one
//! JSON document, and each mutation replaces the tree wholesale - there is
//! no partial-update protocol.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::page::Page;
use crate::theme::ThemePalette;

/// A user's site: the root of the document model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Site {
    /// Stable site identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Ordered page list; the first page is the landing page
    #[serde(default)]
    pub pages: Vec<Page>,
    /// Theme palette applied to every page
    #[serde(default)]
    pub theme: ThemePalette,
}

impl Site {
    /// Create a site with a single empty "index" page
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            pages: vec![Page::new("Home", "index")],
            theme: ThemePalette::default(),
        }
    }

    /// Look up a page by id
    pub fn page(&self, id: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Look up a page mutably by id
    pub fn page_mut(&mut self, id: &str) -> Option<&mut Page> {
        self.pages.iter_mut().find(|p| p.id == id)
    }

    /// Look up a page by slug
    pub fn page_by_slug(&self, slug: &str) -> Option<&Page> {
        self.pages.iter().find(|p| p.slug == slug)
    }

    /// Append a page
    pub fn add_page(&mut self, page: Page) {
        self.pages.push(page);
    }

    /// Remove a page by id, returning it if present
    pub fn remove_page(&mut self, id: &str) -> Option<Page> {
        let index = self.pages.iter().position(|p| p.id == id)?;
        Some(self.pages.remove(index))
    }
}
