//! Inspector field descriptors
//!
//! Per-prop UI metadata consumed by the property-inspection panel: which
//! input widget to show, how to label and group it, and when to hide it.
//! Nothing in rendering or export reads these descriptors; they exist so an
//! editor can build its form without hard-coding knowledge of block types.

use serde::{Deserialize, Serialize};

use super::props::PropValue;

/// Descriptor for one editable prop in the inspector panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectorField {
    /// The prop this field edits
    pub prop: String,
    /// Label shown next to the input
    pub label: String,
    /// Input widget kind
    pub input: InputKind,
    /// Choices, for `Select` inputs
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<SelectOption>,
    /// Inspector section this field is grouped under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    /// Conditional visibility: show only when another prop has a value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_when: Option<VisibleWhen>,
    /// Help text shown under the input
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub help_text: Option<String>,
}

impl InspectorField {
    /// Create a new field descriptor
    pub fn new(prop: impl Into<String>, label: impl Into<String>, input: InputKind) -> Self {
        Self {
            prop: prop.into(),
            label: label.into(),
            input,
            options: Vec::new(),
            group: None,
            visible_when: None,
            help_text: None,
        }
    }

    /// Set select options
    pub fn with_options<I>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, &'static str)>,
    {
        self.options = options
            .into_iter()
            .map(|(value, label)| SelectOption {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect();
        self
    }

    /// Set the inspector group
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Show this field only when `prop` equals `value`
    pub fn visible_when(mut self, prop: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.visible_when = Some(VisibleWhen {
            prop: prop.into(),
            equals: value.into(),
        });
        self
    }

    /// Set help text
    pub fn with_help_text(mut self, help_text: impl Into<String>) -> Self {
        self.help_text = Some(help_text.into());
        self
    }
}

/// Input widget kinds the inspector knows how to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InputKind {
    /// Single-line text input
    Text,
    /// Multi-line text area
    Textarea,
    /// Numeric input
    Number,
    /// Slider control
    Slider,
    /// Select dropdown
    Select,
    /// Checkbox
    Checkbox,
    /// Color swatch picker
    Color,
    /// Image URL input with preview
    ImageUrl,
}

/// One choice in a `Select` input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Conditional visibility rule: the field is shown only while the referenced
/// prop equals the given value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisibleWhen {
    /// Prop whose value controls visibility
    pub prop: String,
    /// Value that makes the field visible
    pub equals: PropValue,
}

impl VisibleWhen {
    /// Evaluate the rule against an instance's props.
    pub fn matches(&self, props: &super::props::PropMap) -> bool {
        props.get(&self.prop) == Some(&self.equals)
    }
}
