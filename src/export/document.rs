//! Full-document export
//!
//! Wraps a page's fragments in a complete HTML document: doctype, head with
//! the page title, and one inline `<style>` block carrying the theme's CSS
//! custom properties plus the base layout rules. The exported file has no
//! external stylesheet dependency.

use std::fmt::Write;

use super::{escape_html, export_page};
use crate::document::Page;
use crate::theme::ThemePalette;

/// Base layout rules shipped with every export. Visual block styling beyond
/// this comes from the theme variables and per-component inline styles.
const BASE_STYLES: &str = "body{margin:0;font-family:var(--site-body-font);background:var(--site-background);color:var(--site-text-color);}\
h1,h2,h3,h4{font-family:var(--site-heading-font);}\
.hero{padding:64px 24px;text-align:center;}\
.hero-cta,.button{display:inline-block;padding:10px 20px;background:var(--site-primary-color);color:#fff;text-decoration:none;border-radius:4px;}\
.container{max-width:960px;margin:0 auto;padding:0 24px;}\
.columns{display:flex;gap:24px;}\
.column{flex:1;}\
.gallery{display:grid;grid-template-columns:repeat(auto-fill,minmax(200px,1fr));gap:12px;}\
.gallery-item{width:100%;display:block;}\
.card,.blog-post-card{border:1px solid #e5e7eb;border-radius:8px;padding:16px;}\
.navbar{display:flex;justify-content:space-between;align-items:center;padding:16px 24px;}\
.navbar ul{display:flex;gap:16px;list-style:none;margin:0;padding:0;}\
.navbar a{color:var(--site-text-color);text-decoration:none;}\
.footer{padding:32px 24px;text-align:center;color:var(--site-secondary-color);}\
.cta{padding:48px 24px;text-align:center;}\
.contact-form,.subscribe-form{display:flex;flex-direction:column;gap:12px;max-width:480px;}\
.contact-form input,.contact-form textarea,.subscribe-form input{padding:8px;border:1px solid #d1d5db;border-radius:4px;}\
.divider{border:none;border-top:1px solid #e5e7eb;}\
.block-fallback{border:1px dashed #9ca3af;padding:12px;color:#6b7280;}";

/// Export one page as a standalone HTML document.
pub fn export_document(page: &Page, theme: &ThemePalette) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{}</title><style>{}{}</style></head><body>",
        escape_html(&page.name),
        theme.css_variables(),
        BASE_STYLES,
    );
    html.push_str(&export_page(page));
    html.push_str("</body></html>");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Component, Page};

    #[test]
    fn test_document_carries_theme_variables_inline() {
        let mut page = Page::new("Landing <Page>", "index");
        page.push_component(Component::new("hero").with_prop("title", "Hi"));

        let theme = ThemePalette {
            primary_color: "#ff0000".into(),
            ..ThemePalette::default()
        };
        let html = export_document(&page, &theme);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("--site-primary-color:#ff0000;"));
        assert!(html.contains("<title>Landing &lt;Page&gt;</title>"));
        assert!(html.contains("<section class=\"hero\""));
        // Exactly one style block, no external stylesheet.
        assert_eq!(html.matches("<style>").count(), 1);
        assert!(!html.contains("<link"));
    }

    #[test]
    fn test_document_export_is_deterministic() {
        let mut page = Page::new("Home", "index");
        page.push_component(
            Component::new("hero")
                .with_prop("title", "T")
                .with_style("paddingTop", "1px")
                .with_style("color", "red"),
        );
        let theme = ThemePalette::default();
        assert_eq!(export_document(&page, &theme), export_document(&page, &theme));
    }
}
