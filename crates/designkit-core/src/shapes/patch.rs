//! Partial updates for objects.

use super::{ObjectBase, ShapeStyle};
use serde::{Deserialize, Serialize};

/// A partial object update. `None` fields are left untouched.
///
/// Fields that do not apply to the target variant (e.g. `points` on a rect)
/// are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ObjectPatch {
    pub name: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub rotation: Option<f64>,
    pub opacity: Option<f64>,
    pub visible: Option<bool>,
    pub locked: Option<bool>,
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<f64>,
    pub text: Option<String>,
    pub font_size: Option<f64>,
    pub points: Option<Vec<f64>>,
}

impl ObjectPatch {
    /// Patch that moves an object.
    pub fn position(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            ..Self::default()
        }
    }

    /// Patch carrying the final values of a drag/transform gesture.
    pub fn transform(x: f64, y: f64, width: f64, height: f64, rotation: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            width: Some(width),
            height: Some(height),
            rotation: Some(rotation),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub(crate) fn apply_to_base(&self, base: &mut ObjectBase) {
        if let Some(name) = &self.name {
            base.name = name.clone();
        }
        if let Some(x) = self.x {
            base.x = x;
        }
        if let Some(y) = self.y {
            base.y = y;
        }
        if self.width.is_some() || self.height.is_some() {
            let width = self.width.unwrap_or(base.width);
            let height = self.height.unwrap_or(base.height);
            base.set_size(width, height);
        }
        if let Some(rotation) = self.rotation {
            base.rotation = rotation;
        }
        if let Some(opacity) = self.opacity {
            base.set_opacity(opacity);
        }
        if let Some(visible) = self.visible {
            base.visible = visible;
        }
        if let Some(locked) = self.locked {
            base.locked = locked;
        }
    }

    pub(crate) fn apply_to_style(&self, style: &mut ShapeStyle) {
        if let Some(fill) = &self.fill {
            style.fill = fill.clone();
        }
        if let Some(stroke) = &self.stroke {
            style.stroke = stroke.clone();
        }
        if let Some(width) = self.stroke_width {
            style.stroke_width = width.max(0.0);
        }
    }
}
