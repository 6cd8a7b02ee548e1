//! Layout blocks: container, columns, spacer, divider
//!
//! Structural blocks. Container and columns hold children; their renderers
//! recurse through the renderer registry so nested blocks resolve through
//! the same fallback chain as top-level ones.

use std::sync::Arc;

use super::BlockCategory;
use crate::core::constraint::PropConstraints;
use crate::core::definition::{BlockDefinition, SlotDefinition};
use crate::core::inspector::{InputKind, InspectorField};
use crate::core::props::props;
use crate::core::registry::BlockRegistry;
use crate::document::Component;
use crate::export::{escape_html, int_prop, style_attr};
use crate::render::{RenderContext, RenderOutput, Renderer, RendererRegistry, CLASSIC_VARIANT};

pub(crate) fn register_definitions(registry: &BlockRegistry) {
    registry.register(container_definition());
    registry.register(columns_definition());
    registry.register(spacer_definition());
    registry.register(divider_definition());
}

pub(crate) fn register_renderers(renderers: &mut RendererRegistry) {
    renderers.register("container", CLASSIC_VARIANT, Arc::new(ContainerRenderer));
    renderers.register("columns", CLASSIC_VARIANT, Arc::new(ColumnsRenderer));
    renderers.register("spacer", CLASSIC_VARIANT, Arc::new(SpacerRenderer));
    renderers.register("divider", CLASSIC_VARIANT, Arc::new(DividerRenderer));
}

// -- Definitions ------------------------------------------------------------

fn container_definition() -> BlockDefinition {
    BlockDefinition::new("container", "Container", BlockCategory::Layout)
        .with_description("Centers its children at a readable width")
        .with_icon("box")
        .with_children(Vec::new())
}

fn columns_definition() -> BlockDefinition {
    BlockDefinition::new("columns", "Columns", BlockCategory::Layout)
        .with_description("Places children side by side")
        .with_icon("columns")
        .with_slot(SlotDefinition::new("left", "Left column").with_max_items(4))
        .with_slot(SlotDefinition::new("right", "Right column").with_max_items(4))
        .with_children(vec![
            Component::new("text").with_prop("text", "Left column"),
            Component::new("text").with_prop("text", "Right column"),
        ])
}

fn spacer_definition() -> BlockDefinition {
    BlockDefinition::new("spacer", "Spacer", BlockCategory::Layout)
        .with_description("Vertical breathing room between blocks")
        .with_icon("move-vertical")
        .with_default_props(props([("height", 40i64.into())]))
        .with_constraints(
            PropConstraints::new()
                .with_min("height", 0.0)
                .with_max("height", 400.0),
        )
        .with_inspector([
            InspectorField::new("height", "Height", InputKind::Slider).with_help_text("Pixels")
        ])
}

fn divider_definition() -> BlockDefinition {
    BlockDefinition::new("divider", "Divider", BlockCategory::Layout)
        .with_description("A horizontal rule")
        .with_icon("minus")
}

// -- Renderers --------------------------------------------------------------

struct ContainerRenderer;

impl Renderer for ContainerRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        let mut html = format!(
            "<div class=\"container\" data-component-id=\"{}\"{}>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
        );
        for child in &c.children {
            html.push_str(&ctx.renderers.render_component(child, ctx.theme).html);
        }
        html.push_str("</div>");
        RenderOutput::new(html)
    }
}

struct ColumnsRenderer;

impl Renderer for ColumnsRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        let mut html = format!(
            "<div class=\"columns\" data-component-id=\"{}\"{}>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
        );
        for child in &c.children {
            html.push_str("<div class=\"column\">");
            html.push_str(&ctx.renderers.render_component(child, ctx.theme).html);
            html.push_str("</div>");
        }
        html.push_str("</div>");
        RenderOutput::new(html)
    }
}

struct SpacerRenderer;

impl Renderer for SpacerRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let height = int_prop(ctx.component, "height", 40).clamp(0, 400);
        RenderOutput::new(format!(
            "<div class=\"spacer\" data-component-id=\"{}\" style=\"height:{}px\"></div>",
            escape_html(ctx.component.id.as_str()),
            height,
        ))
    }
}

struct DividerRenderer;

impl Renderer for DividerRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        RenderOutput::new(format!(
            "<hr class=\"divider\" data-component-id=\"{}\"{}>",
            escape_html(ctx.component.id.as_str()),
            style_attr(&ctx.component.styles),
        ))
    }
}
