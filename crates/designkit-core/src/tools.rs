//! Tool selection for the editor.

use crate::factory::{
    create_arrow, create_badge, create_ellipse, create_image, create_line, create_rect,
    create_star, create_text, create_triangle,
};
use crate::shapes::{DesignObject, ShapeTrait};
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    #[default]
    Select,
    Rect,
    Ellipse,
    Text,
    Line,
    Arrow,
    Star,
    Triangle,
    Badge,
    Image,
}

impl ToolKind {
    /// Tool bound to an unmodified single-letter key.
    pub fn from_key(key: char) -> Option<Self> {
        match key.to_ascii_lowercase() {
            'v' => Some(ToolKind::Select),
            'r' => Some(ToolKind::Rect),
            'e' => Some(ToolKind::Ellipse),
            't' => Some(ToolKind::Text),
            'l' => Some(ToolKind::Line),
            _ => None,
        }
    }

    /// Single-letter shortcut, if the tool has one.
    pub fn shortcut(self) -> Option<char> {
        match self {
            ToolKind::Select => Some('v'),
            ToolKind::Rect => Some('r'),
            ToolKind::Ellipse => Some('e'),
            ToolKind::Text => Some('t'),
            ToolKind::Line => Some('l'),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ToolKind::Select => "Select",
            ToolKind::Rect => "Rectangle",
            ToolKind::Ellipse => "Ellipse",
            ToolKind::Text => "Text",
            ToolKind::Line => "Line",
            ToolKind::Arrow => "Arrow",
            ToolKind::Star => "Star",
            ToolKind::Triangle => "Triangle",
            ToolKind::Badge => "Badge",
            ToolKind::Image => "Image",
        }
    }

    /// Create the object this tool places, centered on `(cx, cy)`.
    /// The select tool places nothing.
    pub fn create_at(self, cx: f64, cy: f64) -> Option<DesignObject> {
        let object: DesignObject = match self {
            ToolKind::Select => return None,
            ToolKind::Rect => create_rect().centered_at(cx, cy).into(),
            ToolKind::Ellipse => create_ellipse().centered_at(cx, cy).into(),
            ToolKind::Text => create_text().centered_at(cx, cy).into(),
            ToolKind::Line => create_line().centered_at(cx, cy).into(),
            ToolKind::Arrow => create_arrow().centered_at(cx, cy).into(),
            ToolKind::Star => create_star().centered_at(cx, cy).into(),
            ToolKind::Triangle => create_triangle().centered_at(cx, cy).into(),
            ToolKind::Badge => create_badge().centered_at(cx, cy).into(),
            ToolKind::Image => create_image().centered_at(cx, cy).into(),
        };
        Some(object)
    }
}
