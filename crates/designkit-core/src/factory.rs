//! Object factories.
//!
//! Every object is created here, fully populated with library defaults.
//! Callers override individual fields with the builder methods on
//! [`ShapeTrait`](crate::shapes::ShapeTrait) and [`Styled`](crate::shapes::Styled)
//! or by assigning fields directly.

use crate::shapes::{
    ArrowObject, BadgeObject, EllipseObject, FontStyle, ImageFit, ImageObject, LineCap,
    LineObject, ObjectBase, ObjectKind, RectObject, ShapeStyle, StarObject, TextAlign, TextObject,
    TriangleObject,
};

/// Primary brand color used for new shapes.
pub const BRAND_PRIMARY: &str = "#6C5CE7";

/// Secondary brand color used for accents.
pub const BRAND_ACCENT: &str = "#00B894";

/// Default text color.
pub const TEXT_COLOR: &str = "#111111";

/// Default muted text color.
pub const MUTED_TEXT_COLOR: &str = "#6B7280";

/// Default stroke color for lines and arrows.
pub const LINE_COLOR: &str = "#111111";

/// Default placement for freshly created objects.
const DEFAULT_POSITION: (f64, f64) = (100.0, 100.0);

fn base(kind: ObjectKind, width: f64, height: f64) -> ObjectBase {
    let mut base = ObjectBase::new(kind.display_name(), width, height);
    base.x = DEFAULT_POSITION.0;
    base.y = DEFAULT_POSITION.1;
    base
}

pub fn create_rect() -> RectObject {
    RectObject {
        base: base(ObjectKind::Rect, 120.0, 80.0),
        style: ShapeStyle::filled(BRAND_PRIMARY),
        corner_radius: 0.0,
    }
}

pub fn create_ellipse() -> EllipseObject {
    EllipseObject {
        base: base(ObjectKind::Ellipse, 100.0, 100.0),
        style: ShapeStyle::filled(BRAND_PRIMARY),
    }
}

pub fn create_text() -> TextObject {
    TextObject {
        base: base(ObjectKind::Text, 200.0, 32.0),
        style: ShapeStyle::filled(TEXT_COLOR),
        text: "Add your text".to_string(),
        font_size: 24.0,
        font_family: "Inter".to_string(),
        font_style: FontStyle::Normal,
        align: TextAlign::Left,
        line_height: 1.2,
        letter_spacing: 0.0,
    }
}

/// An image placeholder; link it with
/// [`ImageObject::with_asset`](crate::shapes::ImageObject::with_asset).
pub fn create_image() -> ImageObject {
    ImageObject {
        base: base(ObjectKind::Image, 200.0, 150.0),
        asset_id: String::new(),
        src: String::new(),
        fit: ImageFit::Cover,
        corner_radius: 0.0,
        shadow: None,
    }
}

pub fn create_line() -> LineObject {
    LineObject {
        base: base(ObjectKind::Line, 150.0, 1.0),
        style: ShapeStyle {
            line_cap: LineCap::Round,
            ..ShapeStyle::stroked(LINE_COLOR, 3.0)
        },
        points: vec![0.0, 0.0, 150.0, 0.0],
        tension: 0.0,
    }
}

pub fn create_star() -> StarObject {
    StarObject {
        base: base(ObjectKind::Star, 100.0, 100.0),
        style: ShapeStyle::filled("#FDCB6E"),
        num_points: 5,
        inner_radius_ratio: 0.5,
    }
}

pub fn create_triangle() -> TriangleObject {
    TriangleObject {
        base: base(ObjectKind::Triangle, 100.0, 90.0),
        style: ShapeStyle::filled(BRAND_ACCENT),
    }
}

pub fn create_arrow() -> ArrowObject {
    ArrowObject {
        base: base(ObjectKind::Arrow, 150.0, 1.0),
        style: ShapeStyle {
            fill: LINE_COLOR.to_string(),
            line_cap: LineCap::Round,
            ..ShapeStyle::stroked(LINE_COLOR, 3.0)
        },
        points: vec![0.0, 0.0, 150.0, 0.0],
        pointer_length: 12.0,
        pointer_width: 12.0,
        pointer_at_beginning: false,
    }
}

pub fn create_badge() -> BadgeObject {
    BadgeObject {
        base: base(ObjectKind::Badge, 96.0, 32.0),
        style: ShapeStyle::filled(BRAND_PRIMARY),
        text: "New".to_string(),
        text_color: "#FFFFFF".to_string(),
        font_size: 14.0,
        corner_radius: 16.0,
    }
}
