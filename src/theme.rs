//! Theme palette
//!
//! The palette is the sole coupling between color/font data and visual
//! output: renderers and the exporter consume a fixed set of CSS custom
//! properties, and this module is the one place that writes them.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// CSS custom property names read by the rendering layer. Fixed set; block
/// templates reference these and nothing else from the palette.
pub const THEME_VARIABLES: [&str; 6] = [
    "--site-primary-color",
    "--site-secondary-color",
    "--site-background",
    "--site-text-color",
    "--site-heading-font",
    "--site-body-font",
];

/// A site's theme palette.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub primary_color: String,
    pub secondary_color: String,
    pub background: String,
    pub text_color: String,
    pub heading_font: String,
    pub body_font: String,
}

impl Default for ThemePalette {
    fn default() -> Self {
        Self {
            primary_color: "#2563eb".into(),
            secondary_color: "#7c3aed".into(),
            background: "#ffffff".into(),
            text_color: "#1f2937".into(),
            heading_font: "Georgia, serif".into(),
            body_font: "system-ui, sans-serif".into(),
        }
    }
}

impl ThemePalette {
    /// Render the palette as a `:root { ... }` rule assigning every theme
    /// variable, in the fixed `THEME_VARIABLES` order.
    pub fn css_variables(&self) -> String {
        let values = [
            &self.primary_color,
            &self.secondary_color,
            &self.background,
            &self.text_color,
            &self.heading_font,
            &self.body_font,
        ];

        let mut css = String::from(":root{");
        for (name, value) in THEME_VARIABLES.iter().zip(values) {
            // String push never fails; unwrap-free via the Write trait on String.
            let _ = write!(css, "{}:{};", name, value);
        }
        css.push('}');
        css
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_variables_cover_the_fixed_set() {
        let css = ThemePalette::default().css_variables();
        for name in THEME_VARIABLES {
            assert!(css.contains(name), "missing {}", name);
        }
        assert!(css.starts_with(":root{"));
        assert!(css.ends_with('}'));
    }

    #[test]
    fn test_css_variables_are_deterministic() {
        let palette = ThemePalette::default();
        assert_eq!(palette.css_variables(), palette.css_variables());
    }

    #[test]
    fn test_palette_round_trips() {
        let palette = ThemePalette {
            primary_color: "#111111".into(),
            ..ThemePalette::default()
        };
        let json = serde_json::to_string(&palette).unwrap();
        let back: ThemePalette = serde_json::from_str(&json).unwrap();
        assert_eq!(palette, back);
    }
}
