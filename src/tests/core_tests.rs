//! Core behavior tests against the default catalog
//!
//! Pins the contracts the editor relies on: resolution totality, registry
//! round-trips, advisory validation, and injection-safe export.

use std::sync::Arc;

use crate::catalog::{build_default_registry, build_default_renderers, BlockCategory};
use crate::core::constraint::PropConstraints;
use crate::core::definition::BlockDefinition;
use crate::core::props::props;
use crate::document::{Component, Page};
use crate::export::export_page;
use crate::theme::ThemePalette;

// ---------------------------------------------------------------------------
// Renderer resolution
// ---------------------------------------------------------------------------

#[test]
fn test_every_catalog_type_resolves_for_any_variant() {
    let registry = build_default_registry();
    let renderers = build_default_renderers();
    let theme = ThemePalette::default();

    for block_type in registry.types() {
        for variant in [None, Some("classic"), Some("nope"), Some(""), Some("默认")] {
            let renderer = renderers.resolve(&block_type, variant);
            // Rendering an empty instance must also be total.
            let mut component = Component::new(block_type.clone());
            component.variant = variant.map(str::to_string);
            let output = renderer.render(&crate::render::RenderContext {
                component: &component,
                theme: &theme,
                renderers: &renderers,
            });
            assert!(
                !output.html.is_empty(),
                "({}, {:?}) rendered nothing",
                block_type,
                variant
            );
        }
    }
}

#[test]
fn test_unregistered_type_gets_global_default() {
    let renderers = build_default_renderers();
    for variant in [None, Some("x")] {
        let resolved = renderers.resolve(&"totally-unknown-type".into(), variant);
        assert!(Arc::ptr_eq(&resolved, &renderers.global_default()));
    }
}

#[test]
fn test_hero_nonexistent_variant_is_classic() {
    let renderers = build_default_renderers();
    let a = renderers.resolve(&"hero".into(), Some("nonexistent-variant"));
    let b = renderers.resolve(&"hero".into(), Some("classic"));
    assert!(Arc::ptr_eq(&a, &b));
}

#[test]
fn test_global_default_renders_empty_props() {
    let renderers = build_default_renderers();
    let component = Component::new("totally-unknown-type");
    let output = renderers.render_component(&component, &ThemePalette::default());
    assert!(output.html.contains("block-fallback"));
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

#[test]
fn test_register_get_round_trip_preserves_definition() {
    let registry = build_default_registry();
    let definition = BlockDefinition::new("testimonial", "Testimonial", BlockCategory::Content)
        .with_default_props(props([("quote", "Great!".into())]))
        .with_constraints(PropConstraints::new().require(["quote"]));

    registry.register(definition.clone());
    let got = registry.get(&"testimonial".into()).expect("registered");

    assert_eq!(got.block_type, definition.block_type);
    assert_eq!(got.name, definition.name);
    assert_eq!(got.default_props, definition.default_props);
    assert_eq!(
        got.constraints.as_ref().map(|c| c.required.clone()),
        Some(vec!["quote".to_string()])
    );
}

#[test]
fn test_second_registration_wins() {
    let registry = build_default_registry();
    let before = registry.len();

    registry.register(BlockDefinition::new("hero", "Hero mk2", BlockCategory::Sections));

    assert_eq!(registry.len(), before); // overwrite, not append
    assert_eq!(registry.get(&"hero".into()).unwrap().name, "Hero mk2");
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

#[test]
fn test_validate_is_clean_iff_constraints_pass() {
    let registry = build_default_registry();

    let good = registry.instantiate(&"cta".into()).unwrap();
    let result = registry.validate(&good);
    assert!(result.valid);
    assert!(result.errors.is_empty());

    let mut bad = good.clone();
    bad.props.insert("title".into(), "".into());
    bad.props.insert("link".into(), "not-a-link".into());
    let result = registry.validate(&bad);
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 2);
}

#[test]
fn test_validate_unknown_type_single_error_no_panic() {
    let registry = build_default_registry();
    let result = registry.validate(&Component::new("from-the-future"));
    assert!(!result.valid);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].contains("from-the-future"));
}

#[test]
fn test_validate_does_not_mutate() {
    let registry = build_default_registry();
    let component = Component::new("hero"); // missing required title
    let snapshot = component.clone();
    let _ = registry.validate(&component);
    assert_eq!(component, snapshot);
}

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

#[test]
fn test_hero_export_scenario() {
    let mut page = Page::new("Home", "index");
    page.push_component(
        Component::new("hero")
            .with_prop("title", "A & B")
            .with_prop("subtitle", "<x>"),
    );

    let html = export_page(&page);
    assert!(html.contains("A &amp; B"));
    assert!(html.contains("&lt;x&gt;"));
    assert_eq!(html.matches("<section class=\"hero\"").count(), 1);
}

#[test]
fn test_export_escapes_every_dangerous_character() {
    let mut page = Page::new("Home", "index");
    page.push_component(Component::new("text").with_prop("text", "&<>\"'"));

    let html = export_page(&page);
    assert!(html.contains("&amp;&lt;&gt;&quot;&#x27;"));
}

#[test]
fn test_export_twice_is_byte_identical() {
    let registry = build_default_registry();
    let mut page = Page::new("Home", "index");
    for block_type in registry.types() {
        if let Some(component) = registry.instantiate(&block_type) {
            page.push_component(component);
        }
    }

    assert_eq!(export_page(&page), export_page(&page));
}
