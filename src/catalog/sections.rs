//! Section blocks: hero, navbar, footer, cta
//!
//! Full-width page sections. Hero ships three visual treatments plus a
//! variant dispatcher registered as its `"default"` entry, so even a
//! type-level catch-all lookup lands on the best concrete variant for the
//! instance.

use std::sync::Arc;

use super::content::LINK_PATTERN;
use super::BlockCategory;
use crate::core::constraint::PropConstraints;
use crate::core::definition::{BlockDefinition, Variation};
use crate::core::inspector::{InputKind, InspectorField};
use crate::core::props::{props, PropValue};
use crate::core::registry::BlockRegistry;
use crate::core::typed::HeroProps;
use crate::export::{escape_html, style_attr, text_prop};
use crate::render::{
    RenderContext, RenderOutput, Renderer, RendererRegistry, VariantDispatcher, CLASSIC_VARIANT,
    DEFAULT_VARIANT,
};

pub(crate) fn register_definitions(registry: &BlockRegistry) {
    registry.register(hero_definition());
    registry.register(navbar_definition());
    registry.register(footer_definition());
    registry.register(cta_definition());
}

pub(crate) fn register_renderers(renderers: &mut RendererRegistry) {
    renderers.register("hero", CLASSIC_VARIANT, Arc::new(HeroClassicRenderer));
    renderers.register("hero", "spotlight", Arc::new(HeroSpotlightRenderer));
    renderers.register("hero", "split", Arc::new(HeroSplitRenderer));
    renderers.register("hero", DEFAULT_VARIANT, Arc::new(VariantDispatcher::new("hero")));
    renderers.register("navbar", CLASSIC_VARIANT, Arc::new(NavbarRenderer));
    renderers.register("footer", CLASSIC_VARIANT, Arc::new(FooterRenderer));
    renderers.register("cta", CLASSIC_VARIANT, Arc::new(CtaRenderer));
}

// -- Definitions ------------------------------------------------------------

fn hero_definition() -> BlockDefinition {
    BlockDefinition::new("hero", "Hero", BlockCategory::Sections)
        .with_description("The big opening section of a page")
        .with_icon("sparkles")
        .with_default_props(props([
            ("title", "Welcome to your new site".into()),
            ("subtitle", "Describe what you do in one sentence.".into()),
            ("cta_label", "".into()),
            ("cta_link", "".into()),
            ("image", "".into()),
        ]))
        .with_constraints(
            PropConstraints::new()
                .require(["title"])
                .with_custom(|props| {
                    let label = props.get("cta_label").and_then(PropValue::as_str);
                    let link = props.get("cta_link").and_then(PropValue::as_str);
                    match (label, link) {
                        (Some(label), link) if !label.is_empty() => {
                            if link.map_or(true, str::is_empty) {
                                Err("cta_link is required when cta_label is set".into())
                            } else {
                                Ok(())
                            }
                        }
                        _ => Ok(()),
                    }
                }),
        )
        .with_inspector([
            InspectorField::new("title", "Title", InputKind::Text),
            InspectorField::new("subtitle", "Subtitle", InputKind::Textarea),
            InspectorField::new("cta_label", "Button label", InputKind::Text)
                .with_group("Call to action"),
            InspectorField::new("cta_link", "Button link", InputKind::Text)
                .with_group("Call to action"),
            InspectorField::new("image", "Side image", InputKind::ImageUrl)
                .with_group("Appearance")
                .with_help_text("Shown by the split treatment"),
        ])
        .with_variation(Variation::new(
            "spotlight",
            "Spotlight",
            props([("cta_label", "Get started".into()), ("cta_link", "#start".into())]),
        ))
        .with_variation(Variation::new(
            "split",
            "Split with image",
            props([("image", "/images/placeholder.png".into())]),
        ))
}

fn navbar_definition() -> BlockDefinition {
    BlockDefinition::new("navbar", "Navigation bar", BlockCategory::Sections)
        .with_description("Brand name plus a row of links")
        .with_icon("menu")
        .with_default_props(props([
            ("brand", "Your site".into()),
            (
                "links",
                PropValue::Array(vec![
                    PropValue::Object(
                        props([("label", "Home".into()), ("href", "/".into())]),
                    ),
                    PropValue::Object(
                        props([("label", "About".into()), ("href", "/about".into())]),
                    ),
                ]),
            ),
        ]))
        .with_constraints(PropConstraints::new().require(["brand"]))
        .with_inspector([InspectorField::new("brand", "Brand", InputKind::Text)])
}

fn footer_definition() -> BlockDefinition {
    BlockDefinition::new("footer", "Footer", BlockCategory::Sections)
        .with_description("Closing section with a short line of text")
        .with_icon("panel-bottom")
        .with_default_props(props([("text", "Made with Site Builder".into())]))
        .with_inspector([InspectorField::new("text", "Text", InputKind::Text)])
}

fn cta_definition() -> BlockDefinition {
    BlockDefinition::new("cta", "Call to action", BlockCategory::Sections)
        .with_description("A focused section pushing one action")
        .with_icon("megaphone")
        .with_default_props(props([
            ("title", "Ready to start?".into()),
            ("label", "Get in touch".into()),
            ("link", "#contact".into()),
        ]))
        .with_constraints(
            PropConstraints::new()
                .require(["title", "label"])
                .with_pattern("link", LINK_PATTERN),
        )
        .with_inspector([
            InspectorField::new("title", "Title", InputKind::Text),
            InspectorField::new("label", "Button label", InputKind::Text),
            InspectorField::new("link", "Button link", InputKind::Text),
        ])
}

// -- Hero renderers ---------------------------------------------------------

fn hero_heading(hero: &HeroProps) -> String {
    format!(
        "<h1>{}</h1><p>{}</p>",
        escape_html(&hero.title),
        escape_html(&hero.subtitle),
    )
}

fn hero_cta(hero: &HeroProps) -> String {
    if hero.cta_label.is_empty() {
        return String::new();
    }
    format!(
        "<a class=\"hero-cta\" href=\"{}\">{}</a>",
        escape_html(&hero.cta_link),
        escape_html(&hero.cta_label),
    )
}

struct HeroClassicRenderer;

impl Renderer for HeroClassicRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        let hero = HeroProps::from_map(&c.props);
        RenderOutput::new(format!(
            "<section class=\"hero\" data-component-id=\"{}\"{}>{}{}</section>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            hero_heading(&hero),
            hero_cta(&hero),
        ))
    }
}

/// Spotlight: the heading sits on the primary color.
struct HeroSpotlightRenderer;

impl Renderer for HeroSpotlightRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        let hero = HeroProps::from_map(&c.props);
        RenderOutput::new(format!(
            "<section class=\"hero hero-spotlight\" data-component-id=\"{}\" \
             style=\"background:var(--site-primary-color);color:#fff\">{}{}</section>",
            escape_html(c.id.as_str()),
            hero_heading(&hero),
            hero_cta(&hero),
        ))
    }
}

/// Split: heading on the left, image on the right.
struct HeroSplitRenderer;

impl Renderer for HeroSplitRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        let hero = HeroProps::from_map(&c.props);
        RenderOutput::new(format!(
            "<section class=\"hero hero-split\" data-component-id=\"{}\"{}>\
             <div class=\"hero-copy\">{}{}</div>\
             <img class=\"hero-image\" src=\"{}\" alt=\"\"></section>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            hero_heading(&hero),
            hero_cta(&hero),
            escape_html(&hero.image),
        ))
    }
}

// -- Other section renderers ------------------------------------------------

struct NavbarRenderer;

impl Renderer for NavbarRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        let mut html = format!(
            "<nav class=\"navbar\" data-component-id=\"{}\"{}><span class=\"navbar-brand\">{}</span><ul>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            escape_html(text_prop(c, "brand")),
        );
        if let Some(links) = c.props.get("links").and_then(PropValue::as_array) {
            for link in links {
                if let Some(entry) = link.as_object() {
                    let label = entry.get("label").and_then(PropValue::as_str).unwrap_or("");
                    let href = entry.get("href").and_then(PropValue::as_str).unwrap_or("#");
                    html.push_str(&format!(
                        "<li><a href=\"{}\">{}</a></li>",
                        escape_html(href),
                        escape_html(label),
                    ));
                }
            }
        }
        html.push_str("</ul></nav>");
        RenderOutput::new(html)
    }
}

struct FooterRenderer;

impl Renderer for FooterRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        RenderOutput::new(format!(
            "<footer class=\"footer\" data-component-id=\"{}\"{}><p>{}</p></footer>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            escape_html(text_prop(c, "text")),
        ))
    }
}

struct CtaRenderer;

impl Renderer for CtaRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        RenderOutput::new(format!(
            "<section class=\"cta\" data-component-id=\"{}\"{}><h2>{}</h2>\
             <a class=\"button\" href=\"{}\">{}</a></section>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            escape_html(text_prop(c, "title")),
            escape_html(text_prop(c, "link")),
            escape_html(text_prop(c, "label")),
        ))
    }
}
