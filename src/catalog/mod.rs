//! Block catalog and classification
//!
//! The built-in block set, one module per category, plus the startup
//! factories that assemble the default registries. Registration is explicit
//! and idempotent: applications call the factories once at initialization
//! and pass the registries to whatever needs them - there are no hidden
//! import-time side effects.

pub mod blog;
pub mod composition;
pub mod content;
pub mod forms;
pub mod layout;
pub mod sections;

use serde::{Deserialize, Serialize};

use crate::core::registry::BlockRegistry;
use crate::render::RendererRegistry;

/// Block category enumeration. Classification only - categories drive the
/// block-picker grouping and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockCategory {
    /// Structural blocks (containers, columns, spacing)
    Layout,
    /// Single content units (text, images, buttons)
    Content,
    /// Blocks composed of repeated content (galleries, cards)
    Composition,
    /// Full-width page sections (hero, navbar, footer)
    Sections,
    /// Input-collecting blocks
    Forms,
}

impl BlockCategory {
    /// Get a human-readable name for the category
    pub fn display_name(&self) -> &str {
        match self {
            BlockCategory::Layout => "Layout",
            BlockCategory::Content => "Content",
            BlockCategory::Composition => "Composition",
            BlockCategory::Sections => "Sections",
            BlockCategory::Forms => "Forms",
        }
    }
}

impl std::fmt::Display for BlockCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Build the registry holding every built-in block definition, including the
/// blog plugin's contributions.
pub fn build_default_registry() -> BlockRegistry {
    let registry = BlockRegistry::new();
    layout::register_definitions(&registry);
    content::register_definitions(&registry);
    composition::register_definitions(&registry);
    sections::register_definitions(&registry);
    forms::register_definitions(&registry);
    blog::register_definitions(&registry);
    registry
}

/// Build the renderer registry covering every built-in block type.
pub fn build_default_renderers() -> RendererRegistry {
    let mut renderers = RendererRegistry::new();
    layout::register_renderers(&mut renderers);
    content::register_renderers(&mut renderers);
    composition::register_renderers(&mut renderers);
    sections::register_renderers(&mut renderers);
    forms::register_renderers(&mut renderers);
    blog::register_renderers(&mut renderers);
    renderers
}
