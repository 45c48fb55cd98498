//! Text object.

use super::{ObjectBase, ShapeStyle};
use serde::{Deserialize, Serialize};

/// Font style. Bold and italic combine into `"italic bold"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FontStyle {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "italic")]
    Italic,
    #[serde(rename = "italic bold")]
    ItalicBold,
}

impl FontStyle {
    /// All accepted values, as persisted.
    pub const ALL: [&'static str; 4] = ["normal", "bold", "italic", "italic bold"];

    /// Parse a persisted value. Unknown strings yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "normal" => Some(FontStyle::Normal),
            "bold" => Some(FontStyle::Bold),
            "italic" => Some(FontStyle::Italic),
            "italic bold" => Some(FontStyle::ItalicBold),
            _ => None,
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "left" => Some(TextAlign::Left),
            "center" => Some(TextAlign::Center),
            "right" => Some(TextAlign::Right),
            _ => None,
        }
    }
}

fn default_font_size() -> f64 {
    24.0
}

fn default_font_family() -> String {
    "Inter".to_string()
}

fn default_line_height() -> f64 {
    1.2
}

/// A text block. `style.fill` is the text color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_font_family")]
    pub font_family: String,
    #[serde(default)]
    pub font_style: FontStyle,
    #[serde(default)]
    pub align: TextAlign,
    #[serde(default = "default_line_height")]
    pub line_height: f64,
    #[serde(default)]
    pub letter_spacing: f64,
}

impl TextObject {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size.max(1.0);
        self
    }

    pub fn with_font_style(mut self, font_style: FontStyle) -> Self {
        self.font_style = font_style;
        self
    }

    pub fn aligned(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_style_parse() {
        for value in FontStyle::ALL {
            assert!(FontStyle::parse(value).is_some());
        }
        assert_eq!(FontStyle::parse("oblique"), None);
    }

    #[test]
    fn test_font_style_serialization() {
        let json = serde_json::to_string(&FontStyle::ItalicBold).unwrap();
        assert_eq!(json, "\"italic bold\"");
    }

    #[test]
    fn test_text_align_parse() {
        assert_eq!(TextAlign::parse("center"), Some(TextAlign::Center));
        assert_eq!(TextAlign::parse("justify"), None);
    }
}
