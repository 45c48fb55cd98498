//! Visual style capabilities shared by shape variants.

use serde::{Deserialize, Serialize};

/// Line cap for strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

/// Line join for strokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Gradient geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientKind {
    #[default]
    Linear,
    Radial,
}

/// A single color stop along a gradient (offset in 0..=1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub offset: f64,
    pub color: String,
}

/// Gradient fill. When present it takes precedence over the flat `fill`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Gradient {
    #[serde(default)]
    pub kind: GradientKind,
    pub stops: Vec<GradientStop>,
    /// Direction of a linear gradient in degrees (0 = left to right).
    #[serde(default)]
    pub angle: f64,
}

impl Gradient {
    /// Two-stop linear gradient.
    pub fn linear(from: impl Into<String>, to: impl Into<String>, angle: f64) -> Self {
        Self {
            kind: GradientKind::Linear,
            stops: vec![
                GradientStop { offset: 0.0, color: from.into() },
                GradientStop { offset: 1.0, color: to.into() },
            ],
            angle,
        }
    }
}

/// Drop shadow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shadow {
    pub color: String,
    #[serde(default)]
    pub blur: f64,
    #[serde(default)]
    pub offset_x: f64,
    #[serde(default)]
    pub offset_y: f64,
    #[serde(default = "default_shadow_opacity")]
    pub opacity: f64,
}

fn default_shadow_opacity() -> f64 {
    0.3
}

impl Default for Shadow {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            blur: 12.0,
            offset_x: 0.0,
            offset_y: 4.0,
            opacity: default_shadow_opacity(),
        }
    }
}

/// Style properties applied polymorphically to every variant whose geometry allows it.
///
/// An empty `fill` or `stroke` string means "none".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ShapeStyle {
    pub fill: String,
    pub stroke: String,
    pub stroke_width: f64,
    /// Dash pattern as alternating dash/gap lengths. Empty = solid.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub dash: Vec<f64>,
    pub line_cap: LineCap,
    pub line_join: LineJoin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gradient: Option<Gradient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Gaussian blur radius (0 = none).
    pub blur: f64,
}

impl ShapeStyle {
    /// Filled style without a stroke.
    pub fn filled(fill: impl Into<String>) -> Self {
        Self {
            fill: fill.into(),
            ..Self::default()
        }
    }

    /// Stroke-only style.
    pub fn stroked(stroke: impl Into<String>, stroke_width: f64) -> Self {
        Self {
            stroke: stroke.into(),
            stroke_width,
            ..Self::default()
        }
    }

    pub fn has_fill(&self) -> bool {
        !self.fill.is_empty() || self.gradient.is_some()
    }

    pub fn has_stroke(&self) -> bool {
        !self.stroke.is_empty() && self.stroke_width > 0.0
    }
}

/// Builder access to the style of variants that carry one.
pub trait Styled {
    fn style(&self) -> &ShapeStyle;

    fn style_mut(&mut self) -> &mut ShapeStyle;

    fn with_fill(mut self, fill: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.style_mut().fill = fill.into();
        self
    }

    fn with_stroke(mut self, stroke: impl Into<String>, width: f64) -> Self
    where
        Self: Sized,
    {
        let style = self.style_mut();
        style.stroke = stroke.into();
        style.stroke_width = width.max(0.0);
        self
    }

    fn with_dash(mut self, dash: Vec<f64>) -> Self
    where
        Self: Sized,
    {
        self.style_mut().dash = dash;
        self
    }

    fn with_gradient(mut self, gradient: Gradient) -> Self
    where
        Self: Sized,
    {
        self.style_mut().gradient = Some(gradient);
        self
    }

    fn with_shadow(mut self, shadow: Shadow) -> Self
    where
        Self: Sized,
    {
        self.style_mut().shadow = Some(shadow);
        self
    }
}

/// Check whether a string is a `#rgb`, `#rrggbb` or `#rrggbbaa` hex color.
pub fn is_hex_color(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_color_validation() {
        assert!(is_hex_color("#fff"));
        assert!(is_hex_color("#111111"));
        assert!(is_hex_color("#11223344"));
        assert!(!is_hex_color("111111"));
        assert!(!is_hex_color("#12345"));
        assert!(!is_hex_color("#gggggg"));
        assert!(!is_hex_color("notacolor"));
        assert!(!is_hex_color(""));
    }

    #[test]
    fn test_style_flags() {
        let style = ShapeStyle::filled("#ff0000");
        assert!(style.has_fill());
        assert!(!style.has_stroke());

        let style = ShapeStyle::stroked("#000000", 2.0);
        assert!(!style.has_fill());
        assert!(style.has_stroke());
    }

    #[test]
    fn test_style_omits_empty_optionals() {
        let json = serde_json::to_value(ShapeStyle::filled("#ffffff")).unwrap();
        assert!(json.get("gradient").is_none());
        assert!(json.get("dash").is_none());
        assert_eq!(json["fill"], "#ffffff");
        assert_eq!(json["lineCap"], "butt");
    }
}
