//! Renderer registry and resolution
//!
//! Maps `(block type, variant)` pairs to renderers. Resolution is a total
//! function with an ordered fallback chain - exact variant, then "classic",
//! then "default", then the global default renderer - so every block type
//! renders *something* even when a requested variant was never implemented.
//! Unknown types and variants are never errors: the editor must stay usable
//! when new block types exist in the schema before their renderer does.

pub mod fallback;

use std::collections::HashMap;
use std::sync::Arc;

use crate::core::BlockType;
use crate::document::Component;
use crate::theme::ThemePalette;

pub use fallback::{GlobalDefaultRenderer, VariantDispatcher};

/// Variant tried when an instance names none, and the second step of the
/// fallback chain.
pub const CLASSIC_VARIANT: &str = "classic";

/// Third step of the fallback chain: a type-level catch-all entry.
pub const DEFAULT_VARIANT: &str = "default";

/// Everything a renderer may read: the instance, the theme, and the registry
/// itself (for containers recursing into children and for variant
/// dispatchers re-entering resolution).
pub struct RenderContext<'a> {
    pub component: &'a Component,
    pub theme: &'a ThemePalette,
    pub renderers: &'a RendererRegistry,
}

/// Rendered visual output for one block instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    /// HTML fragment for the instance (and its children, for containers)
    pub html: String,
}

impl RenderOutput {
    pub fn new(html: impl Into<String>) -> Self {
        Self { html: html.into() }
    }
}

/// A visual treatment for one `(block type, variant)` pair.
pub trait Renderer: Send + Sync {
    /// Turn a block instance into visual output. Must be total: renderers
    /// receive arbitrary props and render a best effort, never an error.
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput;
}

/// Registry mapping block type -> variant name -> renderer.
///
/// Built once at startup (see [`crate::catalog::build_default_renderers`])
/// and read-only afterwards.
pub struct RendererRegistry {
    renderers: HashMap<BlockType, HashMap<String, Arc<dyn Renderer>>>,
    global_default: Arc<dyn Renderer>,
}

impl RendererRegistry {
    /// Create an empty registry with the standard global default renderer
    pub fn new() -> Self {
        Self::with_global_default(Arc::new(GlobalDefaultRenderer))
    }

    /// Create an empty registry with a custom global default renderer
    pub fn with_global_default(global_default: Arc<dyn Renderer>) -> Self {
        Self {
            renderers: HashMap::new(),
            global_default,
        }
    }

    /// Register a renderer for a `(block type, variant)` pair. Re-registering
    /// a pair overwrites, mirroring the block registry's semantics.
    pub fn register(
        &mut self,
        block_type: impl Into<BlockType>,
        variant: impl Into<String>,
        renderer: Arc<dyn Renderer>,
    ) {
        self.renderers
            .entry(block_type.into())
            .or_default()
            .insert(variant.into(), renderer);
    }

    /// Resolve a renderer for the pair. Fallback order:
    ///
    /// 1. the exact variant (`"classic"` when the instance names none)
    /// 2. the type's `"classic"` entry
    /// 3. the type's `"default"` entry
    /// 4. the global default renderer
    pub fn resolve(&self, block_type: &BlockType, variant: Option<&str>) -> Arc<dyn Renderer> {
        let Some(variants) = self.renderers.get(block_type) else {
            return Arc::clone(&self.global_default);
        };

        lookup_chain(variants, variant)
            .or_else(|| variants.get(DEFAULT_VARIANT).cloned())
            .unwrap_or_else(|| Arc::clone(&self.global_default))
    }

    /// The first two steps of the chain only (exact, then classic), with no
    /// catch-all. Variant dispatchers use this to re-enter resolution
    /// without reaching their own `"default"` entry.
    pub fn variant_lookup(
        &self,
        block_type: &BlockType,
        variant: Option<&str>,
    ) -> Option<Arc<dyn Renderer>> {
        lookup_chain(self.renderers.get(block_type)?, variant)
    }

    /// The global default renderer
    pub fn global_default(&self) -> Arc<dyn Renderer> {
        Arc::clone(&self.global_default)
    }

    /// Registered variant names for a type, sorted; empty for unknown types
    pub fn variants_of(&self, block_type: &BlockType) -> Vec<String> {
        let mut names: Vec<_> = self
            .renderers
            .get(block_type)
            .map(|variants| variants.keys().cloned().collect())
            .unwrap_or_default();
        names.sort();
        names
    }

    /// Resolve and render one component in a single call.
    pub fn render_component(&self, component: &Component, theme: &ThemePalette) -> RenderOutput {
        let renderer = self.resolve(&component.block_type, component.variant.as_deref());
        renderer.render(&RenderContext {
            component,
            theme,
            renderers: self,
        })
    }
}

impl Default for RendererRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn lookup_chain(
    variants: &HashMap<String, Arc<dyn Renderer>>,
    variant: Option<&str>,
) -> Option<Arc<dyn Renderer>> {
    let requested = variant.unwrap_or(CLASSIC_VARIANT);
    variants
        .get(requested)
        .or_else(|| variants.get(CLASSIC_VARIANT))
        .cloned()
}
