//! Block definitions
//!
//! A `BlockDefinition` is the static metadata record for one block type:
//! the props a fresh instance starts with, the constraints the editor
//! validates against, the inspector descriptors, named variations, and the
//! child/slot rules for composite blocks. Definitions are plain data; the
//! registry is their single source of truth.

use serde::{Deserialize, Serialize};

use super::constraint::PropConstraints;
use super::inspector::InspectorField;
use super::props::PropMap;
use super::BlockType;
use crate::catalog::BlockCategory;
use crate::document::Component;

/// Static metadata for one block type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDefinition {
    /// The type tag, unique key in the registry
    pub block_type: BlockType,
    /// Human-readable block name
    pub name: String,
    /// Brief description shown in the block picker
    pub description: String,
    /// Classification only, no behavioral effect
    pub category: BlockCategory,
    /// Icon identifier for the block picker
    pub icon: String,
    /// Definition version
    pub version: String,
    /// Props a new instance is seeded with
    pub default_props: PropMap,
    /// Validation rules, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<PropConstraints>,
    /// Inspector field descriptors, editor-facing only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inspector: Vec<InspectorField>,
    /// Named prop presets offered as one-click configurations
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<Variation>,
    /// Named child-regions, composite blocks only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub slots: Vec<SlotDefinition>,
    /// Whether instances may hold nested blocks
    #[serde(default)]
    pub can_have_children: bool,
    /// Children a new instance starts with
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub default_children: Vec<Component>,
    /// Present when contributed by an optional feature module
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugin_id: Option<String>,
}

impl BlockDefinition {
    /// Create a definition with empty metadata; catalog modules fill the
    /// rest through the `with_*` builders.
    pub fn new(
        block_type: impl Into<BlockType>,
        name: impl Into<String>,
        category: BlockCategory,
    ) -> Self {
        Self {
            block_type: block_type.into(),
            name: name.into(),
            description: String::new(),
            category,
            icon: String::new(),
            version: "1.0.0".into(),
            default_props: PropMap::new(),
            constraints: None,
            inspector: Vec::new(),
            variations: Vec::new(),
            slots: Vec::new(),
            can_have_children: false,
            default_children: Vec::new(),
            plugin_id: None,
        }
    }

    /// Set the description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the icon identifier
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// Set the default props
    pub fn with_default_props(mut self, props: PropMap) -> Self {
        self.default_props = props;
        self
    }

    /// Set the validation constraints
    pub fn with_constraints(mut self, constraints: PropConstraints) -> Self {
        self.constraints = Some(constraints);
        self
    }

    /// Set the inspector fields
    pub fn with_inspector<I>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = InspectorField>,
    {
        self.inspector = fields.into_iter().collect();
        self
    }

    /// Add a named variation
    pub fn with_variation(mut self, variation: Variation) -> Self {
        self.variations.push(variation);
        self
    }

    /// Add a slot definition
    pub fn with_slot(mut self, slot: SlotDefinition) -> Self {
        self.slots.push(slot);
        self
    }

    /// Allow nested blocks, optionally seeding new instances with children
    pub fn with_children(mut self, default_children: Vec<Component>) -> Self {
        self.can_have_children = true;
        self.default_children = default_children;
        self
    }

    /// Mark the definition as contributed by a plugin
    pub fn with_plugin(mut self, plugin_id: impl Into<String>) -> Self {
        self.plugin_id = Some(plugin_id.into());
        self
    }

    /// Look up a variation by id
    pub fn variation(&self, id: &str) -> Option<&Variation> {
        self.variations.iter().find(|v| v.id == id)
    }

    /// Look up a slot by id
    pub fn slot(&self, id: &str) -> Option<&SlotDefinition> {
        self.slots.iter().find(|s| s.id == id)
    }
}

/// A named prop preset (e.g. "card-horizontal") the editor can offer as a
/// one-click configuration. Applying a variation overlays its props onto the
/// instance and records the variation id as the instance's variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    /// Stable identifier, doubles as the renderer variant key
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Props overlaid on the instance when applied
    pub props: PropMap,
}

impl Variation {
    pub fn new(id: impl Into<String>, name: impl Into<String>, props: PropMap) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            props,
        }
    }
}

/// A named child-region of a composite block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotDefinition {
    /// Slot identifier, referenced from child component config
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Block types accepted in this slot; empty means any
    #[serde(default)]
    pub accepts: Vec<BlockType>,
    /// Whether the slot must hold at least one child
    #[serde(default)]
    pub required: bool,
    /// Upper bound on children in this slot
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_items: Option<usize>,
}

impl SlotDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            accepts: Vec::new(),
            required: false,
            max_items: None,
        }
    }

    /// Restrict accepted child types
    pub fn accepting<I, T>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BlockType>,
    {
        self.accepts = types.into_iter().map(Into::into).collect();
        self
    }

    /// Mark the slot as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Cap the number of children
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = Some(max_items);
        self
    }

    /// Whether a child of the given type may be placed in this slot.
    pub fn accepts_type(&self, block_type: &BlockType) -> bool {
        self.accepts.is_empty() || self.accepts.contains(block_type)
    }
}
