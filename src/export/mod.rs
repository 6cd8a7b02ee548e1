//! Static HTML export
//!
//! Serializes a page's component list to a static HTML string, independent
//! of the interactive renderer registry. The walk is deterministic: the same
//! page always yields byte-identical output. Known block types emit fixed
//! templates; unknown types emit nothing. Every user-supplied value passes
//! through `escape_html` before interpolation.

pub mod document;

use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt::Write;

use crate::core::props::PropValue;
use crate::document::{Component, Page};

pub use document::export_document;

/// Escape `& < > " '` (and `/`) so user-supplied text cannot inject markup.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    html_escape::encode_safe(text)
}

/// Convert a camelCase style key to its kebab-case CSS property name.
pub fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
            out.push(ch.to_ascii_lowercase());
        } else {
            out.push(ch);
        }
    }
    out
}

/// Render a component's style map as a ` style="..."` attribute. Keys are
/// kebab-cased and sorted; an empty map yields an empty string (no
/// attribute at all).
pub fn style_attr(styles: &HashMap<String, String>) -> String {
    if styles.is_empty() {
        return String::new();
    }

    let mut entries: Vec<_> = styles.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    let mut attr = String::from(" style=\"");
    for (key, value) in entries {
        let _ = write!(
            attr,
            "{}:{};",
            kebab_case(key),
            escape_html(value.trim())
        );
    }
    attr.push('"');
    attr
}

/// Export a page's components, in list order, as concatenated HTML
/// fragments. Unknown block types are skipped silently.
pub fn export_page(page: &Page) -> String {
    let mut out = String::new();
    for component in &page.components {
        write_component(&mut out, component);
    }
    out
}

/// String prop with an empty-string default.
pub(crate) fn text_prop<'a>(component: &'a Component, key: &str) -> &'a str {
    component
        .props
        .get(key)
        .and_then(PropValue::as_str)
        .unwrap_or("")
}

/// Integer prop with a caller-supplied default.
pub(crate) fn int_prop(component: &Component, key: &str, default: i64) -> i64 {
    component
        .props
        .get(key)
        .and_then(PropValue::as_integer)
        .unwrap_or(default)
}

fn write_children(out: &mut String, component: &Component) {
    for child in &component.children {
        write_component(out, child);
    }
}

/// Emit the fixed template for one component. One arm per known type;
/// the catch-all skips the component entirely.
fn write_component(out: &mut String, c: &Component) {
    let style = style_attr(&c.styles);
    match c.block_type.as_str() {
        "hero" => {
            let _ = write!(
                out,
                "<section class=\"hero\"{}><h1>{}</h1><p>{}</p>",
                style,
                escape_html(text_prop(c, "title")),
                escape_html(text_prop(c, "subtitle")),
            );
            let cta_label = text_prop(c, "cta_label");
            if !cta_label.is_empty() {
                let _ = write!(
                    out,
                    "<a class=\"hero-cta\" href=\"{}\">{}</a>",
                    escape_html(text_prop(c, "cta_link")),
                    escape_html(cta_label),
                );
            }
            out.push_str("</section>");
        }
        "heading" => {
            let level = int_prop(c, "level", 2).clamp(1, 6);
            let _ = write!(
                out,
                "<h{level}{}>{}</h{level}>",
                style,
                escape_html(text_prop(c, "text")),
            );
        }
        "text" => {
            let _ = write!(
                out,
                "<p class=\"text-block\"{}>{}</p>",
                style,
                escape_html(text_prop(c, "text")),
            );
        }
        "quote" => {
            let _ = write!(
                out,
                "<blockquote class=\"quote\"{}><p>{}</p><cite>{}</cite></blockquote>",
                style,
                escape_html(text_prop(c, "text")),
                escape_html(text_prop(c, "attribution")),
            );
        }
        "button" => {
            let _ = write!(
                out,
                "<a class=\"button\"{} href=\"{}\">{}</a>",
                style,
                escape_html(text_prop(c, "link")),
                escape_html(text_prop(c, "label")),
            );
        }
        "image" => {
            let _ = write!(
                out,
                "<figure class=\"image-block\"{}><img src=\"{}\" alt=\"{}\">",
                style,
                escape_html(text_prop(c, "src")),
                escape_html(text_prop(c, "alt")),
            );
            let caption = text_prop(c, "caption");
            if !caption.is_empty() {
                let _ = write!(out, "<figcaption>{}</figcaption>", escape_html(caption));
            }
            out.push_str("</figure>");
        }
        "divider" => {
            let _ = write!(out, "<hr class=\"divider\"{}>", style);
        }
        "spacer" => {
            let height = int_prop(c, "height", 40).clamp(0, 400);
            let _ = write!(out, "<div class=\"spacer\" style=\"height:{}px\"></div>", height);
        }
        "container" => {
            let _ = write!(out, "<div class=\"container\"{}>", style);
            write_children(out, c);
            out.push_str("</div>");
        }
        "columns" => {
            let _ = write!(out, "<div class=\"columns\"{}>", style);
            for child in &c.children {
                out.push_str("<div class=\"column\">");
                write_component(out, child);
                out.push_str("</div>");
            }
            out.push_str("</div>");
        }
        "gallery" => {
            let _ = write!(out, "<div class=\"gallery\"{}>", style);
            if let Some(images) = c.props.get("images").and_then(PropValue::as_array) {
                for image in images {
                    if let Some(src) = image.as_str() {
                        let _ = write!(
                            out,
                            "<img class=\"gallery-item\" src=\"{}\" alt=\"\">",
                            escape_html(src)
                        );
                    }
                }
            }
            out.push_str("</div>");
        }
        "card" => {
            let _ = write!(out, "<article class=\"card\"{}>", style);
            let image = text_prop(c, "image");
            if !image.is_empty() {
                let _ = write!(out, "<img src=\"{}\" alt=\"\">", escape_html(image));
            }
            let _ = write!(
                out,
                "<h3>{}</h3><p>{}</p></article>",
                escape_html(text_prop(c, "title")),
                escape_html(text_prop(c, "body")),
            );
        }
        "navbar" => {
            let _ = write!(
                out,
                "<nav class=\"navbar\"{}><span class=\"navbar-brand\">{}</span><ul>",
                style,
                escape_html(text_prop(c, "brand")),
            );
            if let Some(links) = c.props.get("links").and_then(PropValue::as_array) {
                for link in links {
                    if let Some(entry) = link.as_object() {
                        let label = entry.get("label").and_then(PropValue::as_str).unwrap_or("");
                        let href = entry.get("href").and_then(PropValue::as_str).unwrap_or("#");
                        let _ = write!(
                            out,
                            "<li><a href=\"{}\">{}</a></li>",
                            escape_html(href),
                            escape_html(label),
                        );
                    }
                }
            }
            out.push_str("</ul></nav>");
        }
        "footer" => {
            let _ = write!(
                out,
                "<footer class=\"footer\"{}><p>{}</p></footer>",
                style,
                escape_html(text_prop(c, "text")),
            );
        }
        "cta" => {
            let _ = write!(
                out,
                "<section class=\"cta\"{}><h2>{}</h2><a class=\"button\" href=\"{}\">{}</a></section>",
                style,
                escape_html(text_prop(c, "title")),
                escape_html(text_prop(c, "link")),
                escape_html(text_prop(c, "label")),
            );
        }
        "contactForm" => {
            let _ = write!(
                out,
                "<form class=\"contact-form\"{} action=\"{}\" method=\"post\">\
                 <input type=\"text\" name=\"name\" placeholder=\"{}\">\
                 <input type=\"email\" name=\"email\" placeholder=\"{}\">\
                 <textarea name=\"message\"></textarea>\
                 <button type=\"submit\">{}</button></form>",
                style,
                escape_html(text_prop(c, "action")),
                escape_html(text_prop(c, "name_placeholder")),
                escape_html(text_prop(c, "email_placeholder")),
                escape_html(text_prop(c, "submit_label")),
            );
        }
        "subscribeForm" => {
            let _ = write!(
                out,
                "<form class=\"subscribe-form\"{}>\
                 <input type=\"email\" name=\"email\" placeholder=\"{}\">\
                 <button type=\"submit\">{}</button></form>",
                style,
                escape_html(text_prop(c, "placeholder")),
                escape_html(text_prop(c, "submit_label")),
            );
        }
        "blogPostCard" => {
            let _ = write!(
                out,
                "<article class=\"blog-post-card\"{}><h3>{}</h3><p class=\"excerpt\">{}</p>\
                 <a href=\"{}\">{}</a></article>",
                style,
                escape_html(text_prop(c, "title")),
                escape_html(text_prop(c, "excerpt")),
                escape_html(text_prop(c, "link")),
                escape_html(text_prop(c, "read_more_label")),
            );
        }
        "blogPostList" => {
            let _ = write!(out, "<section class=\"blog-post-list\"{}>", style);
            write_children(out, c);
            out.push_str("</section>");
        }
        unknown => {
            // Future block types export as nothing rather than an error;
            // the editor may be ahead of the exporter.
            log::debug!("skipping unknown block type '{}' during export", unknown);
        }
    }
}
