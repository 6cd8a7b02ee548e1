//! Blog plugin blocks: blogPostCard, blogPostList
//!
//! Contributed by the optional "blog" feature module rather than the base
//! set; both definitions carry `plugin_id = "blog"` so the editor can hide
//! them when the plugin is disabled. Registration is otherwise identical to
//! base blocks - plugins share the same registry.

use std::sync::Arc;

use super::content::LINK_PATTERN;
use super::BlockCategory;
use crate::core::constraint::PropConstraints;
use crate::core::definition::BlockDefinition;
use crate::core::inspector::{InputKind, InspectorField};
use crate::core::props::props;
use crate::core::registry::BlockRegistry;
use crate::document::Component;
use crate::export::{escape_html, style_attr, text_prop};
use crate::render::{RenderContext, RenderOutput, Renderer, RendererRegistry, CLASSIC_VARIANT};

/// Plugin identifier for blog-contributed definitions.
pub const PLUGIN_ID: &str = "blog";

pub(crate) fn register_definitions(registry: &BlockRegistry) {
    registry.register(blog_post_card_definition());
    registry.register(blog_post_list_definition());
}

pub(crate) fn register_renderers(renderers: &mut RendererRegistry) {
    renderers.register("blogPostCard", CLASSIC_VARIANT, Arc::new(BlogPostCardRenderer));
    renderers.register("blogPostList", CLASSIC_VARIANT, Arc::new(BlogPostListRenderer));
}

// -- Definitions ------------------------------------------------------------

fn blog_post_card_definition() -> BlockDefinition {
    BlockDefinition::new("blogPostCard", "Blog post card", BlockCategory::Composition)
        .with_description("Teaser card linking to one post")
        .with_icon("newspaper")
        .with_plugin(PLUGIN_ID)
        .with_default_props(props([
            ("title", "Post title".into()),
            ("excerpt", "First lines of the post.".into()),
            ("link", "/blog/post".into()),
            ("read_more_label", "Read more".into()),
        ]))
        .with_constraints(
            PropConstraints::new()
                .require(["title", "link"])
                .with_pattern("link", LINK_PATTERN),
        )
        .with_inspector([
            InspectorField::new("title", "Title", InputKind::Text),
            InspectorField::new("excerpt", "Excerpt", InputKind::Textarea),
            InspectorField::new("link", "Post link", InputKind::Text),
            InspectorField::new("read_more_label", "Read-more label", InputKind::Text),
        ])
}

fn blog_post_list_definition() -> BlockDefinition {
    BlockDefinition::new("blogPostList", "Blog post list", BlockCategory::Composition)
        .with_description("A section of post cards")
        .with_icon("list")
        .with_plugin(PLUGIN_ID)
        .with_children(vec![
            Component::new("blogPostCard"),
            Component::new("blogPostCard"),
        ])
}

// -- Renderers --------------------------------------------------------------

struct BlogPostCardRenderer;

impl Renderer for BlogPostCardRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        RenderOutput::new(format!(
            "<article class=\"blog-post-card\" data-component-id=\"{}\"{}><h3>{}</h3>\
             <p class=\"excerpt\">{}</p><a href=\"{}\">{}</a></article>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            escape_html(text_prop(c, "title")),
            escape_html(text_prop(c, "excerpt")),
            escape_html(text_prop(c, "link")),
            escape_html(text_prop(c, "read_more_label")),
        ))
    }
}

struct BlogPostListRenderer;

impl Renderer for BlogPostListRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        let mut html = format!(
            "<section class=\"blog-post-list\" data-component-id=\"{}\"{}>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
        );
        for child in &c.children {
            html.push_str(&ctx.renderers.render_component(child, ctx.theme).html);
        }
        html.push_str("</section>");
        RenderOutput::new(html)
    }
}
