//! Component instances
//!
//! A `Component` is one node in a page's content tree: a block type tag, an
//! optional variant, and open props/styles/config maps. Instances carry no
//! schema of their own; `BlockRegistry::validate` checks them against their
//! definition on demand.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

use crate::core::props::{PropMap, PropValue};
use crate::core::BlockType;

/// Identifier of a component within a page.
///
/// Caller-assigned and expected to be unique within its page; reordering and
/// selection address components by id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentId(String);

impl ComponentId {
    /// Create an id from a caller-supplied string
    pub fn new(id: impl Into<String>) -> Self {
        ComponentId(id.into())
    }

    /// Generate a random id
    pub fn random() -> Self {
        ComponentId(Uuid::new_v4().to_string())
    }

    /// View the id as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ComponentId {
    fn from(id: &str) -> Self {
        ComponentId(id.to_string())
    }
}

impl std::fmt::Display for ComponentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A block instance placed on a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Unique within the owning page
    pub id: ComponentId,
    /// Block type tag
    #[serde(rename = "type")]
    pub block_type: BlockType,
    /// Named visual treatment; `None` means the type's classic look
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    /// Block configuration
    #[serde(default)]
    pub props: PropMap,
    /// Inline style overrides (camelCase keys)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub styles: HashMap<String, String>,
    /// Editor bookkeeping (slot assignment, collapsed state, ...)
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub config: PropMap,
    /// Nested blocks, for container types
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Component>,
}

impl Component {
    /// Create an empty instance of the given type with a random id
    pub fn new(block_type: impl Into<BlockType>) -> Self {
        Self {
            id: ComponentId::random(),
            block_type: block_type.into(),
            variant: None,
            props: PropMap::new(),
            styles: HashMap::new(),
            config: PropMap::new(),
            children: Vec::new(),
        }
    }

    /// Set a prop (builder style)
    pub fn with_prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(key.into(), value.into());
        self
    }

    /// Set a style (builder style)
    pub fn with_style(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.insert(key.into(), value.into());
        self
    }

    /// Set the variant (builder style)
    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    /// Set the children (builder style)
    pub fn with_children(mut self, children: Vec<Component>) -> Self {
        self.children = children;
        self
    }

    /// Shallow-merge a patch into the props: patched keys replace, untouched
    /// keys survive.
    pub fn patch_props(&mut self, patch: PropMap) {
        self.props.extend(patch);
    }

    /// Shallow-merge a patch into the styles
    pub fn patch_styles(&mut self, patch: HashMap<String, String>) {
        self.styles.extend(patch);
    }

    /// Shallow-merge a patch into the config
    pub fn patch_config(&mut self, patch: PropMap) {
        self.config.extend(patch);
    }

    /// Switch the variant; `None` returns to the classic treatment
    pub fn set_variant(&mut self, variant: Option<String>) {
        self.variant = variant;
    }

    /// Deep-copy this component with fresh ids throughout the subtree, so
    /// the copy can live on the same page as the original.
    pub fn duplicate(&self) -> Component {
        Component {
            id: ComponentId::random(),
            block_type: self.block_type.clone(),
            variant: self.variant.clone(),
            props: self.props.clone(),
            styles: self.styles.clone(),
            config: self.config.clone(),
            children: self.children.iter().map(Component::duplicate).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::props::props;

    #[test]
    fn test_patch_props_is_shallow_merge() {
        let mut component = Component::new("hero")
            .with_prop("title", "Old")
            .with_prop("subtitle", "Keep me");

        component.patch_props(props([("title", "New".into())]));

        assert_eq!(component.props["title"].as_str(), Some("New"));
        assert_eq!(component.props["subtitle"].as_str(), Some("Keep me"));
    }

    #[test]
    fn test_duplicate_regenerates_ids_recursively() {
        let original = Component::new("container")
            .with_children(vec![Component::new("text"), Component::new("image")]);

        let copy = original.duplicate();
        assert_ne!(copy.id, original.id);
        assert_eq!(copy.children.len(), 2);
        assert_ne!(copy.children[0].id, original.children[0].id);
        assert_eq!(copy.children[0].block_type, original.children[0].block_type);
    }

    #[test]
    fn test_serde_round_trip_preserves_instance() {
        let mut component = Component::new("hero")
            .with_variant("spotlight")
            .with_prop("title", "A & B")
            .with_style("backgroundColor", "#fff");
        component.patch_config(props([("locked", true.into())]));

        let json = serde_json::to_string(&component).unwrap();
        let back: Component = serde_json::from_str(&json).unwrap();
        assert_eq!(component, back);

        // The wire name for the tag is "type".
        assert!(json.contains("\"type\":\"hero\""));
    }

    #[test]
    fn test_empty_maps_are_omitted_from_json() {
        let component = Component::new("divider");
        let json = serde_json::to_string(&component).unwrap();
        assert!(!json.contains("styles"));
        assert!(!json.contains("children"));
        assert!(!json.contains("variant"));
    }
}
