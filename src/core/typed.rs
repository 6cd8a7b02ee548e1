//! Typed prop views
//!
//! Component instances store open `PropMap`s so that generic consumers
//! (validation, export, persistence) keep working as block types are added.
//! Renderers, though, want concrete shapes. This module gives each built-in
//! block type a concretely-typed props structure plus a tagged view over
//! them; reading a view never fails - missing or mistyped keys fall back to
//! the field's neutral value, mirroring how the renderers treat raw maps.

use super::props::{PropMap, PropValue};
use crate::document::Component;

fn string_of(props: &PropMap, key: &str) -> String {
    props
        .get(key)
        .and_then(PropValue::as_str)
        .unwrap_or_default()
        .to_string()
}

fn int_of(props: &PropMap, key: &str, default: i64) -> i64 {
    props
        .get(key)
        .and_then(PropValue::as_integer)
        .unwrap_or(default)
}

fn strings_of(props: &PropMap, key: &str) -> Vec<String> {
    props
        .get(key)
        .and_then(PropValue::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(PropValue::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Hero section props
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeroProps {
    pub title: String,
    pub subtitle: String,
    pub cta_label: String,
    pub cta_link: String,
    pub image: String,
}

impl HeroProps {
    pub fn from_map(props: &PropMap) -> Self {
        Self {
            title: string_of(props, "title"),
            subtitle: string_of(props, "subtitle"),
            cta_label: string_of(props, "cta_label"),
            cta_link: string_of(props, "cta_link"),
            image: string_of(props, "image"),
        }
    }
}

/// Heading props
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingProps {
    pub text: String,
    pub level: i64,
}

impl HeadingProps {
    pub fn from_map(props: &PropMap) -> Self {
        Self {
            text: string_of(props, "text"),
            level: int_of(props, "level", 2).clamp(1, 6),
        }
    }
}

/// Button props
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ButtonProps {
    pub label: String,
    pub link: String,
}

impl ButtonProps {
    pub fn from_map(props: &PropMap) -> Self {
        Self {
            label: string_of(props, "label"),
            link: string_of(props, "link"),
        }
    }
}

/// Image props
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ImageProps {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

impl ImageProps {
    pub fn from_map(props: &PropMap) -> Self {
        Self {
            src: string_of(props, "src"),
            alt: string_of(props, "alt"),
            caption: string_of(props, "caption"),
        }
    }
}

/// Gallery props
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryProps {
    pub images: Vec<String>,
    pub columns: i64,
}

impl GalleryProps {
    pub fn from_map(props: &PropMap) -> Self {
        Self {
            images: strings_of(props, "images"),
            columns: int_of(props, "columns", 3).clamp(1, 6),
        }
    }
}

/// Card props
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardProps {
    pub title: String,
    pub body: String,
    pub image: String,
}

impl CardProps {
    pub fn from_map(props: &PropMap) -> Self {
        Self {
            title: string_of(props, "title"),
            body: string_of(props, "body"),
            image: string_of(props, "image"),
        }
    }
}

/// Tagged view over an instance's props: one variant per built-in block type
/// with a typed structure, plus a catch-all that keeps unknown and
/// not-yet-typed blocks traversable as raw maps.
#[derive(Debug, Clone, PartialEq)]
pub enum TypedProps {
    Hero(HeroProps),
    Heading(HeadingProps),
    Button(ButtonProps),
    Image(ImageProps),
    Gallery(GalleryProps),
    Card(CardProps),
    /// Any other block type, with its raw props
    Other(PropMap),
}

impl TypedProps {
    /// Build the typed view for a component. Total: unknown types land in
    /// `Other` rather than failing.
    pub fn of(component: &Component) -> TypedProps {
        let props = &component.props;
        match component.block_type.as_str() {
            "hero" => TypedProps::Hero(HeroProps::from_map(props)),
            "heading" => TypedProps::Heading(HeadingProps::from_map(props)),
            "button" => TypedProps::Button(ButtonProps::from_map(props)),
            "image" => TypedProps::Image(ImageProps::from_map(props)),
            "gallery" => TypedProps::Gallery(GalleryProps::from_map(props)),
            "card" => TypedProps::Card(CardProps::from_map(props)),
            _ => TypedProps::Other(props.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::props::props;

    #[test]
    fn test_hero_view_fills_missing_fields() {
        let component = Component::new("hero").with_prop("title", "T");
        match TypedProps::of(&component) {
            TypedProps::Hero(hero) => {
                assert_eq!(hero.title, "T");
                assert_eq!(hero.subtitle, "");
                assert_eq!(hero.cta_label, "");
            }
            other => panic!("expected hero view, got {:?}", other),
        }
    }

    #[test]
    fn test_gallery_view_clamps_and_filters() {
        let mut component = Component::new("gallery");
        component.props = props([
            (
                "images",
                PropValue::Array(vec!["a.png".into(), 7i64.into(), "b.png".into()]),
            ),
            ("columns", 42i64.into()),
        ]);

        match TypedProps::of(&component) {
            TypedProps::Gallery(gallery) => {
                // Non-string entries are dropped, bounds are clamped.
                assert_eq!(gallery.images, vec!["a.png", "b.png"]);
                assert_eq!(gallery.columns, 6);
            }
            other => panic!("expected gallery view, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_stays_traversable() {
        let component = Component::new("widget").with_prop("setting", true);
        match TypedProps::of(&component) {
            TypedProps::Other(map) => assert_eq!(map["setting"].as_bool(), Some(true)),
            other => panic!("expected raw view, got {:?}", other),
        }
    }

    #[test]
    fn test_mistyped_values_fall_back() {
        let mut component = Component::new("heading");
        component.props = props([("text", 12i64.into()), ("level", "two".into())]);

        match TypedProps::of(&component) {
            TypedProps::Heading(heading) => {
                assert_eq!(heading.text, "");
                assert_eq!(heading.level, 2);
            }
            other => panic!("expected heading view, got {:?}", other),
        }
    }
}
