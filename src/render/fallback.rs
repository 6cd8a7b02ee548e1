//! Fallback renderers
//!
//! The global default renderer is the last step of every resolution chain:
//! it renders a neutral placeholder from whatever props the instance carries
//! so the canvas shows *something* for block types whose renderer does not
//! exist yet.

use std::collections::BTreeMap;

use super::{RenderContext, RenderOutput, Renderer};
use crate::core::BlockType;
use crate::export::escape_html;

/// Renders a minimal placeholder: the type tag plus the serialized props.
///
/// Used whenever resolution finds no renderer at all for a block type. Total
/// for any props, including an empty map.
pub struct GlobalDefaultRenderer;

impl Renderer for GlobalDefaultRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        // BTreeMap gives deterministic key order in the serialized props.
        let ordered: BTreeMap<&String, &crate::core::PropValue> =
            ctx.component.props.iter().collect();
        let props_json = serde_json::to_string(&ordered).unwrap_or_default();

        RenderOutput::new(format!(
            "<div class=\"block-fallback\" data-block-type=\"{}\"><pre>{}</pre></div>",
            escape_html(ctx.component.block_type.as_str()),
            escape_html(&props_json),
        ))
    }
}

/// Thin dispatcher that re-enters resolution with the instance's own variant.
///
/// Registered as a type's `"default"` entry, it turns the type-level
/// catch-all into "pick the best concrete variant for this instance". The
/// hero block ships with one, but any block type can use the same pattern.
/// Re-entry goes through [`super::RendererRegistry::variant_lookup`], which
/// never reaches the `"default"` entry, so the dispatcher cannot recurse
/// into itself.
pub struct VariantDispatcher {
    block_type: BlockType,
}

impl VariantDispatcher {
    pub fn new(block_type: impl Into<BlockType>) -> Self {
        Self {
            block_type: block_type.into(),
        }
    }
}

impl Renderer for VariantDispatcher {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        match ctx
            .renderers
            .variant_lookup(&self.block_type, ctx.component.variant.as_deref())
        {
            Some(renderer) => renderer.render(ctx),
            None => ctx.renderers.global_default().render(ctx),
        }
    }
}
