//! Property-based tests using proptest.
//!
//! These tests verify invariants that must hold for *any* input, catching
//! edge cases that hand-written tests miss.

use proptest::prelude::*;
use std::sync::Arc;

use crate::catalog::build_default_renderers;
use crate::core::props::{PropMap, PropValue};
use crate::core::registry::BlockRegistry;
use crate::document::{Component, Page};
use crate::export::{escape_html, export_page, kebab_case, style_attr};
use crate::theme::ThemePalette;

// ---------------------------------------------------------------------------
// Resolution totality
// ---------------------------------------------------------------------------

proptest! {
    /// Resolution never fails: any (type, variant) pair, including garbage,
    /// yields a renderer that renders without panicking.
    #[test]
    fn resolve_is_total(block_type in "\\PC{0,24}", variant in proptest::option::of("\\PC{0,24}")) {
        let renderers = build_default_renderers();
        let renderer = renderers.resolve(&block_type.as_str().into(), variant.as_deref());

        let mut component = Component::new(block_type.as_str());
        component.variant = variant.clone();
        let output = renderer.render(&crate::render::RenderContext {
            component: &component,
            theme: &ThemePalette::default(),
            renderers: &renderers,
        });
        prop_assert!(!output.html.is_empty());
    }

    /// Types outside the catalog always land on the global default.
    #[test]
    fn unknown_types_hit_global_default(suffix in "[a-z0-9]{1,16}") {
        let renderers = build_default_renderers();
        let block_type = format!("never-registered-{}", suffix);
        let resolved = renderers.resolve(&block_type.as_str().into(), None);
        prop_assert!(Arc::ptr_eq(&resolved, &renderers.global_default()));
    }
}

// ---------------------------------------------------------------------------
// Registry round-trips
// ---------------------------------------------------------------------------

proptest! {
    /// register + get returns the definition that went in, for any type tag.
    #[test]
    fn register_get_round_trip(tag in "[a-zA-Z][a-zA-Z0-9_-]{0,24}") {
        use crate::catalog::BlockCategory;
        use crate::core::definition::BlockDefinition;

        let registry = BlockRegistry::new();
        registry.register(BlockDefinition::new(tag.as_str(), "Any", BlockCategory::Content));

        let got = registry.get(&tag.as_str().into());
        prop_assert!(got.is_some());
        let got = got.unwrap();
        prop_assert_eq!(got.block_type.as_str(), tag.as_str());
    }

    /// validate never panics, whatever the instance looks like.
    #[test]
    fn validate_is_total(tag in "\\PC{0,24}", key in "\\PC{0,16}", value in "\\PC{0,32}") {
        let registry = BlockRegistry::new();
        let mut component = Component::new(tag.as_str());
        component.props.insert(key, PropValue::String(value));
        let result = registry.validate(&component);
        prop_assert!(!result.valid); // nothing is registered
        prop_assert_eq!(result.errors.len(), 1);
    }
}

// ---------------------------------------------------------------------------
// Escaping and export
// ---------------------------------------------------------------------------

/// Entities `escape_html` may produce.
const ENTITIES: [&str; 8] = [
    "&amp;", "&lt;", "&gt;", "&quot;", "&#x27;", "&#x2F;", "&#x60;", "&#x3D;",
];

proptest! {
    /// Escaped text never contains raw markup characters; every remaining
    /// ampersand belongs to an entity.
    #[test]
    fn escape_html_neutralizes_markup(text in "\\PC{0,64}") {
        let escaped = escape_html(&text).into_owned();
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
        prop_assert!(!escaped.contains('\''));

        let mut rest = escaped;
        for entity in ENTITIES {
            rest = rest.replace(entity, "");
        }
        prop_assert!(!rest.contains('&'));
    }

    /// Export is deterministic for arbitrary hero content and styles.
    #[test]
    fn export_is_deterministic(
        title in "\\PC{0,40}",
        subtitle in "\\PC{0,40}",
        style_key in "[a-zA-Z]{1,12}",
        style_value in "[a-z0-9# ]{0,12}",
    ) {
        let mut page = Page::new("Home", "index");
        page.push_component(
            Component::new("hero")
                .with_prop("title", title)
                .with_prop("subtitle", subtitle)
                .with_style(style_key, style_value),
        );
        prop_assert_eq!(export_page(&page), export_page(&page));
    }

    /// Exported prop text round-trips through escaping: the raw value never
    /// appears when it contains markup characters.
    #[test]
    fn export_never_leaks_raw_markup(text in "[a-z]{0,8}[<>\"'&][a-z]{0,8}") {
        let mut page = Page::new("Home", "index");
        page.push_component(Component::new("text").with_prop("text", text.as_str()));

        let html = export_page(&page);
        let body = html
            .strip_prefix("<p class=\"text-block\">")
            .and_then(|s| s.strip_suffix("</p>"))
            .unwrap_or(&html);
        prop_assert!(!body.contains('<'));
        prop_assert!(!body.contains('>'));
        prop_assert!(!body.contains('"'));
        prop_assert!(!body.contains('\''));
    }
}

// ---------------------------------------------------------------------------
// Style conversion
// ---------------------------------------------------------------------------

proptest! {
    /// kebab-case conversion is idempotent and lowercases everything.
    #[test]
    fn kebab_case_is_idempotent(key in "[a-zA-Z]{1,20}") {
        let once = kebab_case(&key);
        prop_assert_eq!(kebab_case(&once), once.clone());
        prop_assert!(!once.chars().any(|c| c.is_ascii_uppercase()));
    }

    /// A non-empty style map always yields a ` style="..."` attribute and an
    /// empty map never does.
    #[test]
    fn style_attr_shape(key in "[a-zA-Z]{1,12}", value in "[a-z0-9]{1,12}") {
        let mut styles = std::collections::HashMap::new();
        prop_assert_eq!(style_attr(&styles), "");
        styles.insert(key, value);
        let attr = style_attr(&styles);
        prop_assert!(attr.starts_with(" style=\""));
        prop_assert!(attr.ends_with('"'));
    }
}

// ---------------------------------------------------------------------------
// Patch semantics
// ---------------------------------------------------------------------------

proptest! {
    /// Shallow merge: patched keys replace, other keys are untouched.
    #[test]
    fn patch_props_keeps_unrelated_keys(
        kept_value in "\\PC{0,16}",
        patched_before in "\\PC{0,16}",
        patched_after in "\\PC{0,16}",
    ) {
        let mut component = Component::new("text")
            .with_prop("kept", kept_value.as_str())
            .with_prop("patched", patched_before.as_str());

        let mut patch = PropMap::new();
        patch.insert("patched".into(), patched_after.as_str().into());
        component.patch_props(patch);

        prop_assert_eq!(component.props["kept"].as_str(), Some(kept_value.as_str()));
        prop_assert_eq!(component.props["patched"].as_str(), Some(patched_after.as_str()));
    }
}
