//! Open polylines: lines and arrows.
//!
//! `points` is a flat `[x0, y0, x1, y1, ...]` list relative to the object's
//! `x`/`y`.

use super::{ObjectBase, ShapeStyle};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Minimum number of coordinates for a drawable segment.
pub(crate) const MIN_LINE_COORDS: usize = 4;

fn point_pairs(points: &[f64]) -> Vec<Point> {
    points
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect()
}

/// A straight or curved polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(default)]
    pub points: Vec<f64>,
    /// Curve tension (0 = straight segments).
    #[serde(default)]
    pub tension: f64,
}

impl LineObject {
    /// Local points as pairs. A trailing odd coordinate is dropped.
    pub fn local_points(&self) -> Vec<Point> {
        point_pairs(&self.points)
    }

    pub fn is_drawable(&self) -> bool {
        self.points.len() >= MIN_LINE_COORDS
    }
}

fn default_pointer_length() -> f64 {
    12.0
}

fn default_pointer_width() -> f64 {
    12.0
}

/// A polyline with an arrow head at its end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrowObject {
    #[serde(flatten)]
    pub base: ObjectBase,
    #[serde(flatten)]
    pub style: ShapeStyle,
    #[serde(default)]
    pub points: Vec<f64>,
    #[serde(default = "default_pointer_length")]
    pub pointer_length: f64,
    #[serde(default = "default_pointer_width")]
    pub pointer_width: f64,
    /// Draw a head at the start as well.
    #[serde(default)]
    pub pointer_at_beginning: bool,
}

impl ArrowObject {
    pub fn local_points(&self) -> Vec<Point> {
        point_pairs(&self.points)
    }
}
