//! Content blocks: heading, text, quote, button, image
//!
//! Single content units with no children. Each block contributes a
//! definition (defaults, constraints, inspector fields) and a classic
//! renderer.

use std::sync::Arc;

use super::BlockCategory;
use crate::core::constraint::PropConstraints;
use crate::core::definition::BlockDefinition;
use crate::core::inspector::{InputKind, InspectorField};
use crate::core::props::props;
use crate::core::registry::BlockRegistry;
use crate::core::typed::{ButtonProps, HeadingProps, ImageProps};
use crate::export::{escape_html, style_attr, text_prop};
use crate::render::{RenderContext, RenderOutput, Renderer, RendererRegistry, CLASSIC_VARIANT};

/// Link props accept absolute URLs, site-relative paths, and anchors.
pub(crate) const LINK_PATTERN: &str = "^(https?://|/|#)";

pub(crate) fn register_definitions(registry: &BlockRegistry) {
    registry.register(heading_definition());
    registry.register(text_definition());
    registry.register(quote_definition());
    registry.register(button_definition());
    registry.register(image_definition());
}

pub(crate) fn register_renderers(renderers: &mut RendererRegistry) {
    renderers.register("heading", CLASSIC_VARIANT, Arc::new(HeadingRenderer));
    renderers.register("text", CLASSIC_VARIANT, Arc::new(TextRenderer));
    renderers.register("quote", CLASSIC_VARIANT, Arc::new(QuoteRenderer));
    renderers.register("button", CLASSIC_VARIANT, Arc::new(ButtonRenderer));
    renderers.register("image", CLASSIC_VARIANT, Arc::new(ImageRenderer));
}

// -- Definitions ------------------------------------------------------------

fn heading_definition() -> BlockDefinition {
    BlockDefinition::new("heading", "Heading", BlockCategory::Content)
        .with_description("A section heading")
        .with_icon("type")
        .with_default_props(props([("text", "Heading".into()), ("level", 2i64.into())]))
        .with_constraints(
            PropConstraints::new()
                .require(["text"])
                .with_min("level", 1.0)
                .with_max("level", 6.0),
        )
        .with_inspector([
            InspectorField::new("text", "Text", InputKind::Text),
            InspectorField::new("level", "Level", InputKind::Slider)
                .with_help_text("1 is largest, 6 is smallest"),
        ])
}

fn text_definition() -> BlockDefinition {
    BlockDefinition::new("text", "Text", BlockCategory::Content)
        .with_description("A paragraph of body text")
        .with_icon("align-left")
        .with_default_props(props([("text", "Write something here.".into())]))
        .with_constraints(PropConstraints::new().require(["text"]))
        .with_inspector([InspectorField::new("text", "Text", InputKind::Textarea)])
}

fn quote_definition() -> BlockDefinition {
    BlockDefinition::new("quote", "Quote", BlockCategory::Content)
        .with_description("A pull quote with attribution")
        .with_icon("quote")
        .with_default_props(props([
            ("text", "Something worth repeating.".into()),
            ("attribution", "".into()),
        ]))
        .with_constraints(PropConstraints::new().require(["text"]))
        .with_inspector([
            InspectorField::new("text", "Quote", InputKind::Textarea),
            InspectorField::new("attribution", "Attribution", InputKind::Text),
        ])
}

fn button_definition() -> BlockDefinition {
    BlockDefinition::new("button", "Button", BlockCategory::Content)
        .with_description("A call-to-action link styled as a button")
        .with_icon("mouse-pointer")
        .with_default_props(props([("label", "Learn more".into()), ("link", "#".into())]))
        .with_constraints(
            PropConstraints::new()
                .require(["label"])
                .with_pattern("link", LINK_PATTERN),
        )
        .with_inspector([
            InspectorField::new("label", "Label", InputKind::Text),
            InspectorField::new("link", "Link", InputKind::Text)
                .with_help_text("URL, /path, or #anchor"),
        ])
}

fn image_definition() -> BlockDefinition {
    BlockDefinition::new("image", "Image", BlockCategory::Content)
        .with_description("A single image with optional caption")
        .with_icon("image")
        .with_default_props(props([
            ("src", "/images/placeholder.png".into()),
            ("alt", "".into()),
            ("caption", "".into()),
        ]))
        .with_constraints(
            PropConstraints::new()
                .require(["src"])
                .with_pattern("src", "^(https?://|/)"),
        )
        .with_inspector([
            InspectorField::new("src", "Image", InputKind::ImageUrl),
            InspectorField::new("alt", "Alt text", InputKind::Text)
                .with_help_text("Describes the image for screen readers"),
            InspectorField::new("caption", "Caption", InputKind::Text),
        ])
}

// -- Renderers --------------------------------------------------------------

struct HeadingRenderer;

impl Renderer for HeadingRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        let heading = HeadingProps::from_map(&c.props);
        let level = heading.level;
        RenderOutput::new(format!(
            "<h{level} data-component-id=\"{}\"{}>{}</h{level}>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            escape_html(&heading.text),
        ))
    }
}

struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        RenderOutput::new(format!(
            "<p class=\"text-block\" data-component-id=\"{}\"{}>{}</p>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            escape_html(text_prop(c, "text")),
        ))
    }
}

struct QuoteRenderer;

impl Renderer for QuoteRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        RenderOutput::new(format!(
            "<blockquote class=\"quote\" data-component-id=\"{}\"{}><p>{}</p><cite>{}</cite></blockquote>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            escape_html(text_prop(c, "text")),
            escape_html(text_prop(c, "attribution")),
        ))
    }
}

struct ButtonRenderer;

impl Renderer for ButtonRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        let button = ButtonProps::from_map(&c.props);
        RenderOutput::new(format!(
            "<a class=\"button\" data-component-id=\"{}\"{} href=\"{}\">{}</a>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            escape_html(&button.link),
            escape_html(&button.label),
        ))
    }
}

struct ImageRenderer;

impl Renderer for ImageRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        let image = ImageProps::from_map(&c.props);
        let mut html = format!(
            "<figure class=\"image-block\" data-component-id=\"{}\"{}><img src=\"{}\" alt=\"{}\">",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            escape_html(&image.src),
            escape_html(&image.alt),
        );
        if !image.caption.is_empty() {
            html.push_str("<figcaption>");
            html.push_str(&escape_html(&image.caption));
            html.push_str("</figcaption>");
        }
        html.push_str("</figure>");
        RenderOutput::new(html)
    }
}
