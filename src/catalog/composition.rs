//! Composition blocks: gallery, card
//!
//! Blocks built from repeated content. Card demonstrates variation presets:
//! "card-horizontal" is both a one-click preset in the inspector and a
//! renderer variant key.

use std::sync::Arc;

use super::BlockCategory;
use crate::core::constraint::PropConstraints;
use crate::core::definition::{BlockDefinition, Variation};
use crate::core::inspector::{InputKind, InspectorField};
use crate::core::props::props;
use crate::core::registry::BlockRegistry;
use crate::core::typed::{CardProps, GalleryProps};
use crate::export::{escape_html, style_attr};
use crate::render::{RenderContext, RenderOutput, Renderer, RendererRegistry, CLASSIC_VARIANT};

pub(crate) fn register_definitions(registry: &BlockRegistry) {
    registry.register(gallery_definition());
    registry.register(card_definition());
}

pub(crate) fn register_renderers(renderers: &mut RendererRegistry) {
    renderers.register("gallery", CLASSIC_VARIANT, Arc::new(GalleryRenderer));
    renderers.register("card", CLASSIC_VARIANT, Arc::new(CardRenderer { horizontal: false }));
    renderers.register(
        "card",
        "card-horizontal",
        Arc::new(CardRenderer { horizontal: true }),
    );
}

// -- Definitions ------------------------------------------------------------

fn gallery_definition() -> BlockDefinition {
    BlockDefinition::new("gallery", "Gallery", BlockCategory::Composition)
        .with_description("A grid of images")
        .with_icon("layout-grid")
        .with_default_props(props([
            (
                "images",
                vec!["/images/placeholder.png", "/images/placeholder.png"].into(),
            ),
            ("columns", 3i64.into()),
        ]))
        .with_constraints(
            PropConstraints::new()
                .require(["images"])
                .with_min("columns", 1.0)
                .with_max("columns", 6.0),
        )
        .with_inspector([
            InspectorField::new("images", "Images", InputKind::ImageUrl)
                .with_help_text("One URL per image"),
            InspectorField::new("columns", "Columns", InputKind::Slider),
        ])
}

fn card_definition() -> BlockDefinition {
    BlockDefinition::new("card", "Card", BlockCategory::Composition)
        .with_description("Image, title and body in a bordered card")
        .with_icon("square")
        .with_default_props(props([
            ("title", "Card title".into()),
            ("body", "A short supporting sentence.".into()),
            ("image", "".into()),
        ]))
        .with_constraints(PropConstraints::new().require(["title"]))
        .with_inspector([
            InspectorField::new("title", "Title", InputKind::Text),
            InspectorField::new("body", "Body", InputKind::Textarea),
            InspectorField::new("image", "Image", InputKind::ImageUrl),
        ])
        .with_variation(Variation::new(
            "card-horizontal",
            "Horizontal card",
            props([("image", "/images/placeholder.png".into())]),
        ))
}

// -- Renderers --------------------------------------------------------------

struct GalleryRenderer;

impl Renderer for GalleryRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        let gallery = GalleryProps::from_map(&c.props);
        let mut html = format!(
            "<div class=\"gallery\" data-component-id=\"{}\" \
             style=\"grid-template-columns:repeat({},1fr)\"{}>",
            escape_html(c.id.as_str()),
            gallery.columns,
            style_attr(&c.styles),
        );
        for src in &gallery.images {
            html.push_str(&format!(
                "<img class=\"gallery-item\" src=\"{}\" alt=\"\">",
                escape_html(src),
            ));
        }
        html.push_str("</div>");
        RenderOutput::new(html)
    }
}

struct CardRenderer {
    horizontal: bool,
}

impl Renderer for CardRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        let card = CardProps::from_map(&c.props);
        let class = if self.horizontal {
            "card card-horizontal"
        } else {
            "card"
        };
        let mut html = format!(
            "<article class=\"{}\" data-component-id=\"{}\"{}>",
            class,
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
        );
        if !card.image.is_empty() {
            html.push_str(&format!("<img src=\"{}\" alt=\"\">", escape_html(&card.image)));
        }
        html.push_str(&format!(
            "<h3>{}</h3><p>{}</p></article>",
            escape_html(&card.title),
            escape_html(&card.body),
        ));
        RenderOutput::new(html)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Component;
    use crate::theme::ThemePalette;

    fn setup() -> (BlockRegistry, RendererRegistry) {
        let registry = BlockRegistry::new();
        register_definitions(&registry);
        let mut renderers = RendererRegistry::new();
        register_renderers(&mut renderers);
        (registry, renderers)
    }

    #[test]
    fn test_card_horizontal_variation_round_trip() {
        let (registry, renderers) = setup();

        let card = registry
            .instantiate_variation(&"card".into(), "card-horizontal")
            .unwrap();
        assert_eq!(card.variant.as_deref(), Some("card-horizontal"));

        let html = renderers
            .render_component(&card, &ThemePalette::default())
            .html;
        assert!(html.contains("card-horizontal"));
        assert!(html.contains("<img"));
    }

    #[test]
    fn test_gallery_renders_each_image() {
        let (_, renderers) = setup();
        let gallery = Component::new("gallery")
            .with_prop("images", vec!["#a", "#b", "#c"])
            .with_prop("columns", 2i64);

        let html = renderers
            .render_component(&gallery, &ThemePalette::default())
            .html;
        assert_eq!(html.matches("<img").count(), 3);
        assert!(html.contains("repeat(2,1fr)"));
    }

    #[test]
    fn test_gallery_with_no_images_still_renders() {
        let (_, renderers) = setup();
        let gallery = Component::new("gallery");
        let html = renderers
            .render_component(&gallery, &ThemePalette::default())
            .html;
        assert!(html.contains("class=\"gallery\""));
        assert!(!html.contains("<img"));
    }
}
