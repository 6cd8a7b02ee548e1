//! Block Registry - single source of truth for block definitions
//!
//! This module provides a thread-safe registry mapping block type to its
//! `BlockDefinition`. It supports:
//! - Registration (duplicate types overwrite, non-fatal)
//! - Lookup by type, category, or plugin
//! - Advisory validation of a component against its definition
//! - Instantiation of fresh components from default props
//!
//! The registry never rejects a malformed definition at registration time
//! and never errors on an unknown type at lookup time; both are deliberate
//! resilience properties of the editor.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use crate::catalog::BlockCategory;
use crate::core::constraint::ValidationResult;
use crate::core::definition::BlockDefinition;
use crate::core::BlockType;
use crate::document::Component;

/// Registry of all available block definitions.
///
/// Uses `Arc<RwLock<HashMap>>` so the editor can share one registry across
/// views; registration happens once at startup (see
/// [`crate::catalog::build_default_registry`]), after which all access is
/// read-only.
#[derive(Clone, Default)]
pub struct BlockRegistry {
    blocks: Arc<RwLock<HashMap<BlockType, BlockDefinition>>>,
}

impl BlockRegistry {
    /// Create a new empty block registry
    ///
    /// # Example
    /// ```
    /// use site_blocks::core::registry::BlockRegistry;
    ///
    /// let registry = BlockRegistry::new();
    /// assert!(registry.is_empty());
    /// ```
    pub fn new() -> Self {
        Self {
            blocks: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Register a definition, keyed by its block type.
    ///
    /// Registering a type that already exists overwrites the previous
    /// definition. This is not an error: plugins and hot-reloaded catalogs
    /// re-register on purpose. The overwrite is logged at WARN.
    pub fn register(&self, definition: BlockDefinition) {
        let mut blocks = self.blocks.write();
        let block_type = definition.block_type.clone();

        if blocks.insert(block_type.clone(), definition).is_some() {
            log::warn!(
                "block type '{}' registered twice; keeping the newer definition",
                block_type
            );
        }
    }

    /// Get the definition for a block type.
    ///
    /// Returns `None` for unknown types; callers must handle the absent
    /// case, nothing here throws.
    pub fn get(&self, block_type: &BlockType) -> Option<BlockDefinition> {
        self.blocks.read().get(block_type).cloned()
    }

    /// Check whether a block type is registered
    pub fn contains(&self, block_type: &BlockType) -> bool {
        self.blocks.read().contains_key(block_type)
    }

    /// Number of registered definitions
    pub fn len(&self) -> usize {
        self.blocks.read().len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.blocks.read().is_empty()
    }

    /// All registered definitions, sorted by block type for deterministic
    /// block-picker listings.
    pub fn all(&self) -> Vec<BlockDefinition> {
        let blocks = self.blocks.read();
        let mut defs: Vec<_> = blocks.values().cloned().collect();
        defs.sort_by(|a, b| a.block_type.cmp(&b.block_type));
        defs
    }

    /// All registered block types, sorted.
    pub fn types(&self) -> Vec<BlockType> {
        let blocks = self.blocks.read();
        let mut types: Vec<_> = blocks.keys().cloned().collect();
        types.sort();
        types
    }

    /// Definitions in the given category, sorted by block type.
    pub fn by_category(&self, category: BlockCategory) -> Vec<BlockDefinition> {
        let mut defs: Vec<_> = self
            .blocks
            .read()
            .values()
            .filter(|d| d.category == category)
            .cloned()
            .collect();
        defs.sort_by(|a, b| a.block_type.cmp(&b.block_type));
        defs
    }

    /// Definitions contributed by the given plugin, sorted by block type.
    pub fn by_plugin(&self, plugin_id: &str) -> Vec<BlockDefinition> {
        let mut defs: Vec<_> = self
            .blocks
            .read()
            .values()
            .filter(|d| d.plugin_id.as_deref() == Some(plugin_id))
            .cloned()
            .collect();
        defs.sort_by(|a, b| a.block_type.cmp(&b.block_type));
        defs
    }

    /// Validate a component against its definition's constraints.
    ///
    /// Runs, in order: required-prop presence, numeric min, numeric max,
    /// regex patterns, custom validator. All failing checks accumulate into
    /// one error list. Validation is advisory: it reports problems but never
    /// blocks a save, and it is non-mutating.
    pub fn validate(&self, component: &Component) -> ValidationResult {
        let Some(definition) = self.get(&component.block_type) else {
            return ValidationResult::error(format!(
                "block type '{}' not found in registry",
                component.block_type
            ));
        };

        match &definition.constraints {
            Some(constraints) => constraints.check(&component.props),
            None => ValidationResult::ok(),
        }
    }

    /// Create a fresh component seeded from the definition's default props
    /// and default children ("add block" in the editor). Returns `None` for
    /// unknown types.
    pub fn instantiate(&self, block_type: &BlockType) -> Option<Component> {
        let definition = self.get(block_type)?;

        let mut component = Component::new(block_type.clone());
        component.props = definition.default_props.clone();
        component.children = definition
            .default_children
            .iter()
            .map(Component::duplicate)
            .collect();
        Some(component)
    }

    /// Create a fresh component with a named variation's preset overlaid on
    /// the defaults; the variation id becomes the instance's variant.
    /// Returns `None` if the type or the variation is unknown.
    pub fn instantiate_variation(
        &self,
        block_type: &BlockType,
        variation_id: &str,
    ) -> Option<Component> {
        let definition = self.get(block_type)?;
        let variation = definition.variation(variation_id)?.clone();

        let mut component = self.instantiate(block_type)?;
        component.patch_props(variation.props);
        component.variant = Some(variation.id);
        Some(component)
    }
}
