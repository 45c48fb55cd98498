//! Filled geometric primitives.

use super::{ObjectBase, ShapeStyle};
use serde::{Deserialize, Serialize};

/// A rectangle with optional rounded corners.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RectObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(default)]
    pub corner_radius: f64,
}

/// An ellipse inscribed in the object's bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EllipseObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    #[serde(flatten)]
    pub style: ShapeStyle,
}

fn default_num_points() -> u32 {
    5
}

fn default_inner_radius_ratio() -> f64 {
    0.5
}

/// A star inscribed in the object's bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StarObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(default = "default_num_points")]
    pub num_points: u32,
    /// Inner radius as a fraction of the outer radius.
    #[serde(default = "default_inner_radius_ratio")]
    pub inner_radius_ratio: f64,
}

impl StarObject {
    /// Set the number of points (at least 3).
    pub fn with_points(mut self, num_points: u32) -> Self {
        self.num_points = num_points.max(3);
        self
    }
}

/// An isosceles triangle pointing up, inscribed in the object's bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriangleObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    #[serde(flatten)]
    pub style: ShapeStyle,
}

/// A pill-shaped label: a filled rounded rect with centered text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(default)]
    pub text: String,
    #[serde(default = "default_badge_text_color")]
    pub text_color: String,
    #[serde(default = "default_badge_font_size")]
    pub font_size: f64,
    #[serde(default)]
    pub corner_radius: f64,
}

fn default_badge_text_color() -> String {
    "#FFFFFF".to_string()
}

fn default_badge_font_size() -> f64 {
    14.0
}

impl BadgeObject {
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }
}
