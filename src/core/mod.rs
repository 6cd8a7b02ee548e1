//! Core block abstractions and types
//!
//! This module defines the fundamental block schema types - the type tag,
//! prop values, constraints, inspector descriptors, definitions, and the
//! registry that is their single source of truth.

pub mod constraint;
pub mod definition;
pub mod inspector;
pub mod props;
pub mod registry;
pub mod typed;

use serde::{Deserialize, Serialize};

/// The type tag identifying a kind of content unit (e.g. "hero", "button",
/// "blogPostCard").
///
/// The base set is closed; extension happens by registering new definitions,
/// so the tag is an open string rather than an enum - consumers that only do
/// generic traversal (validation, export) keep working when new types appear.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlockType(String);

impl BlockType {
    /// Create a block type tag
    pub fn new(tag: impl Into<String>) -> Self {
        BlockType(tag.into())
    }

    /// View the tag as a string
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlockType {
    fn from(tag: &str) -> Self {
        BlockType(tag.to_string())
    }
}

impl From<String> for BlockType {
    fn from(tag: String) -> Self {
        BlockType(tag)
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub use self::constraint::{PropConstraints, ValidationResult};
pub use self::definition::{BlockDefinition, SlotDefinition, Variation};
pub use self::inspector::{InputKind, InspectorField};
pub use self::props::{PropMap, PropValue};
pub use self::registry::BlockRegistry;
pub use self::typed::TypedProps;
