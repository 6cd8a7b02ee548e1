//! Form blocks: contact form, subscribe form
//!
//! Input-collecting sections. The exported markup posts to the `action`
//! prop; the builder itself does not process submissions.

use std::sync::Arc;

use super::BlockCategory;
use crate::core::constraint::PropConstraints;
use crate::core::definition::BlockDefinition;
use crate::core::inspector::{InputKind, InspectorField};
use crate::core::props::{props, PropValue};
use crate::core::registry::BlockRegistry;
use crate::export::{escape_html, style_attr, text_prop};
use crate::render::{RenderContext, RenderOutput, Renderer, RendererRegistry, CLASSIC_VARIANT};

pub(crate) fn register_definitions(registry: &BlockRegistry) {
    registry.register(contact_form_definition());
    registry.register(subscribe_form_definition());
}

pub(crate) fn register_renderers(renderers: &mut RendererRegistry) {
    renderers.register("contactForm", CLASSIC_VARIANT, Arc::new(ContactFormRenderer));
    renderers.register(
        "subscribeForm",
        CLASSIC_VARIANT,
        Arc::new(SubscribeFormRenderer),
    );
}

// -- Definitions ------------------------------------------------------------

fn contact_form_definition() -> BlockDefinition {
    BlockDefinition::new("contactForm", "Contact form", BlockCategory::Forms)
        .with_description("Name, email and message fields")
        .with_icon("mail")
        .with_default_props(props([
            ("action", "/contact".into()),
            ("name_placeholder", "Your name".into()),
            ("email_placeholder", "you@example.com".into()),
            ("submit_label", "Send message".into()),
        ]))
        .with_constraints(
            PropConstraints::new()
                .require(["action", "submit_label"])
                .with_pattern("action", "^(https?://|/)")
                .with_custom(|props| {
                    // A form whose action is just "/" posts to the page
                    // itself and silently drops the submission.
                    match props.get("action").and_then(PropValue::as_str) {
                        Some("/") => Err("action must name a submission endpoint".into()),
                        _ => Ok(()),
                    }
                }),
        )
        .with_inspector([
            InspectorField::new("action", "Submit to", InputKind::Text)
                .with_help_text("Endpoint that receives the submission"),
            InspectorField::new("name_placeholder", "Name placeholder", InputKind::Text)
                .with_group("Placeholders"),
            InspectorField::new("email_placeholder", "Email placeholder", InputKind::Text)
                .with_group("Placeholders"),
            InspectorField::new("submit_label", "Button label", InputKind::Text),
        ])
}

fn subscribe_form_definition() -> BlockDefinition {
    BlockDefinition::new("subscribeForm", "Subscribe form", BlockCategory::Forms)
        .with_description("A single email field with a subscribe button")
        .with_icon("at-sign")
        .with_default_props(props([
            ("placeholder", "you@example.com".into()),
            ("submit_label", "Subscribe".into()),
        ]))
        .with_constraints(PropConstraints::new().require(["submit_label"]))
        .with_inspector([
            InspectorField::new("placeholder", "Placeholder", InputKind::Text),
            InspectorField::new("submit_label", "Button label", InputKind::Text),
        ])
}

// -- Renderers --------------------------------------------------------------

struct ContactFormRenderer;

impl Renderer for ContactFormRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        RenderOutput::new(format!(
            "<form class=\"contact-form\" data-component-id=\"{}\"{} action=\"{}\" method=\"post\">\
             <input type=\"text\" name=\"name\" placeholder=\"{}\">\
             <input type=\"email\" name=\"email\" placeholder=\"{}\">\
             <textarea name=\"message\"></textarea>\
             <button type=\"submit\">{}</button></form>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            escape_html(text_prop(c, "action")),
            escape_html(text_prop(c, "name_placeholder")),
            escape_html(text_prop(c, "email_placeholder")),
            escape_html(text_prop(c, "submit_label")),
        ))
    }
}

struct SubscribeFormRenderer;

impl Renderer for SubscribeFormRenderer {
    fn render(&self, ctx: &RenderContext<'_>) -> RenderOutput {
        let c = ctx.component;
        RenderOutput::new(format!(
            "<form class=\"subscribe-form\" data-component-id=\"{}\"{}>\
             <input type=\"email\" name=\"email\" placeholder=\"{}\">\
             <button type=\"submit\">{}</button></form>",
            escape_html(c.id.as_str()),
            style_attr(&c.styles),
            escape_html(text_prop(c, "placeholder")),
            escape_html(text_prop(c, "submit_label")),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Component;

    #[test]
    fn test_contact_form_rejects_bare_slash_action() {
        let registry = BlockRegistry::new();
        register_definitions(&registry);

        let mut form = registry.instantiate(&"contactForm".into()).unwrap();
        assert!(registry.validate(&form).valid);

        form.props.insert("action".into(), "/".into());
        let result = registry.validate(&form);
        assert!(!result.valid);
        assert!(result.errors[0].contains("submission endpoint"));
    }

    #[test]
    fn test_contact_form_action_pattern() {
        let registry = BlockRegistry::new();
        register_definitions(&registry);

        let mut form = Component::new("contactForm");
        form.props = props([
            ("action", "mailto:me".into()),
            ("submit_label", "Send".into()),
        ]);
        let result = registry.validate(&form);
        assert!(!result.valid);
        assert!(result.errors[0].contains("pattern"));
    }
}
