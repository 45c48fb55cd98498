//! Design object definitions.
//!
//! Every object on the canvas is a [`DesignObject`]: either a primitive
//! [`StaticObject`] or an [`InteractiveComponent`] that owns a flat list of
//! primitives. Z-order is the position in the owning `Vec`; there is no
//! separate z-index field.

mod basic;
mod image;
mod line;
mod patch;
mod style;
mod text;

pub use basic::{BadgeObject, EllipseObject, RectObject, StarObject, TriangleObject};
pub use image::{ImageFit, ImageObject};
pub use line::{ArrowObject, LineObject};
pub use patch::ObjectPatch;
pub use style::{
    Gradient, GradientKind, GradientStop, LineCap, LineJoin, Shadow, ShapeStyle, Styled,
    is_hex_color,
};
pub use text::{FontStyle, TextAlign, TextObject};

use crate::interactive::InteractiveComponent;
use kurbo::Rect;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Unique identifier for objects. Persisted documents may carry arbitrary strings.
pub type ObjectId = String;

/// Smallest allowed width/height for resizable objects.
pub const MIN_OBJECT_SIZE: f64 = 1.0;

/// Generate a fresh object ID.
pub fn new_object_id() -> ObjectId {
    format!("obj-{}", Uuid::new_v4().simple())
}

fn default_opacity() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}

/// Properties shared by every object variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectBase {
    pub id: ObjectId,
    #[serde(default)]
    pub name: String,
    /// Top-left corner in canvas (or component-local) space.
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_visible")]
    pub visible: bool,
    /// Blocks drag/transform, not property edits.
    #[serde(default)]
    pub locked: bool,
}

impl ObjectBase {
    /// Create a base with a fresh ID at the origin.
    pub fn new(name: impl Into<String>, width: f64, height: f64) -> Self {
        Self {
            id: new_object_id(),
            name: name.into(),
            x: 0.0,
            y: 0.0,
            width: width.max(MIN_OBJECT_SIZE),
            height: height.max(MIN_OBJECT_SIZE),
            rotation: 0.0,
            opacity: 1.0,
            visible: true,
            locked: false,
        }
    }

    /// Axis-aligned bounds (rotation ignored).
    pub fn bounds(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Set the size, flooring each side at [`MIN_OBJECT_SIZE`].
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.width = width.max(MIN_OBJECT_SIZE);
        self.height = height.max(MIN_OBJECT_SIZE);
    }

    /// Set opacity, clamped to `0..=1`.
    pub fn set_opacity(&mut self, opacity: f64) {
        self.opacity = opacity.clamp(0.0, 1.0);
    }
}

/// The discriminant of a [`DesignObject`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ObjectKind {
    Rect,
    Ellipse,
    Text,
    Image,
    Line,
    Star,
    Triangle,
    Arrow,
    Badge,
    Interactive,
}

impl ObjectKind {
    /// The `type` string used in persisted documents.
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectKind::Rect => "rect",
            ObjectKind::Ellipse => "ellipse",
            ObjectKind::Text => "text",
            ObjectKind::Image => "image",
            ObjectKind::Line => "line",
            ObjectKind::Star => "star",
            ObjectKind::Triangle => "triangle",
            ObjectKind::Arrow => "arrow",
            ObjectKind::Badge => "badge",
            ObjectKind::Interactive => "interactive",
        }
    }

    /// Human-readable default name for new objects.
    pub fn display_name(self) -> &'static str {
        match self {
            ObjectKind::Rect => "Rectangle",
            ObjectKind::Ellipse => "Ellipse",
            ObjectKind::Text => "Text",
            ObjectKind::Image => "Image",
            ObjectKind::Line => "Line",
            ObjectKind::Star => "Star",
            ObjectKind::Triangle => "Triangle",
            ObjectKind::Arrow => "Arrow",
            ObjectKind::Badge => "Badge",
            ObjectKind::Interactive => "Interactive",
        }
    }
}

/// Common trait for all objects.
///
/// The provided builder methods let factories' defaults be overridden
/// field by field: `create_rect().at(10.0, 20.0).sized(80.0, 40.0)`.
pub trait ShapeTrait {
    fn base(&self) -> &ObjectBase;

    fn base_mut(&mut self) -> &mut ObjectBase;

    fn id(&self) -> &str {
        &self.base().id
    }

    fn bounds(&self) -> Rect {
        self.base().bounds()
    }

    fn at(mut self, x: f64, y: f64) -> Self
    where
        Self: Sized,
    {
        let base = self.base_mut();
        base.x = x;
        base.y = y;
        self
    }

    fn sized(mut self, width: f64, height: f64) -> Self
    where
        Self: Sized,
    {
        self.base_mut().set_size(width, height);
        self
    }

    /// Position so that the object's center lands on `(cx, cy)`.
    fn centered_at(mut self, cx: f64, cy: f64) -> Self
    where
        Self: Sized,
    {
        let base = self.base_mut();
        base.x = cx - base.width / 2.0;
        base.y = cy - base.height / 2.0;
        self
    }

    fn named(mut self, name: impl Into<String>) -> Self
    where
        Self: Sized,
    {
        self.base_mut().name = name.into();
        self
    }

    fn rotated(mut self, degrees: f64) -> Self
    where
        Self: Sized,
    {
        self.base_mut().rotation = degrees;
        self
    }

    fn with_opacity(mut self, opacity: f64) -> Self
    where
        Self: Sized,
    {
        self.base_mut().set_opacity(opacity);
        self
    }

    fn hidden(mut self) -> Self
    where
        Self: Sized,
    {
        self.base_mut().visible = false;
        self
    }
}

macro_rules! impl_shape_trait {
    ($($ty:ty),* $(,)?) => {
        $(
            impl ShapeTrait for $ty {
                fn base(&self) -> &ObjectBase {
                    &self.base
                }

                fn base_mut(&mut self) -> &mut ObjectBase {
                    &mut self.base
                }
            }
        )*
    };
}

impl_shape_trait!(
    RectObject,
    EllipseObject,
    TextObject,
    ImageObject,
    LineObject,
    StarObject,
    TriangleObject,
    ArrowObject,
    BadgeObject,
    InteractiveComponent,
);

macro_rules! impl_styled {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Styled for $ty {
                fn style(&self) -> &ShapeStyle {
                    &self.style
                }

                fn style_mut(&mut self) -> &mut ShapeStyle {
                    &mut self.style
                }
            }
        )*
    };
}

impl_styled!(
    RectObject,
    EllipseObject,
    TextObject,
    LineObject,
    StarObject,
    TriangleObject,
    ArrowObject,
    BadgeObject,
);

/// A primitive (non-interactive) object. Interactive component children are
/// always static, which rules out nested components at the type level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum StaticObject {
    Rect(RectObject),
    Ellipse(EllipseObject),
    Text(TextObject),
    Image(ImageObject),
    Line(LineObject),
    Star(StarObject),
    Triangle(TriangleObject),
    Arrow(ArrowObject),
    Badge(BadgeObject),
}

impl StaticObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            StaticObject::Rect(_) => ObjectKind::Rect,
            StaticObject::Ellipse(_) => ObjectKind::Ellipse,
            StaticObject::Text(_) => ObjectKind::Text,
            StaticObject::Image(_) => ObjectKind::Image,
            StaticObject::Line(_) => ObjectKind::Line,
            StaticObject::Star(_) => ObjectKind::Star,
            StaticObject::Triangle(_) => ObjectKind::Triangle,
            StaticObject::Arrow(_) => ObjectKind::Arrow,
            StaticObject::Badge(_) => ObjectKind::Badge,
        }
    }

    /// Get the shared style, if this variant has one.
    pub fn style(&self) -> Option<&ShapeStyle> {
        match self {
            StaticObject::Rect(s) => Some(&s.style),
            StaticObject::Ellipse(s) => Some(&s.style),
            StaticObject::Text(s) => Some(&s.style),
            StaticObject::Line(s) => Some(&s.style),
            StaticObject::Star(s) => Some(&s.style),
            StaticObject::Triangle(s) => Some(&s.style),
            StaticObject::Arrow(s) => Some(&s.style),
            StaticObject::Badge(s) => Some(&s.style),
            StaticObject::Image(_) => None,
        }
    }

    /// Get mutable style, if this variant has one.
    pub fn style_mut(&mut self) -> Option<&mut ShapeStyle> {
        match self {
            StaticObject::Rect(s) => Some(&mut s.style),
            StaticObject::Ellipse(s) => Some(&mut s.style),
            StaticObject::Text(s) => Some(&mut s.style),
            StaticObject::Line(s) => Some(&mut s.style),
            StaticObject::Star(s) => Some(&mut s.style),
            StaticObject::Triangle(s) => Some(&mut s.style),
            StaticObject::Arrow(s) => Some(&mut s.style),
            StaticObject::Badge(s) => Some(&mut s.style),
            StaticObject::Image(_) => None,
        }
    }

    /// Shallow-merge a patch into this object.
    pub fn apply_patch(&mut self, patch: &ObjectPatch) {
        patch.apply_to_base(self.base_mut());
        if let Some(style) = self.style_mut() {
            patch.apply_to_style(style);
        }
        match self {
            StaticObject::Text(t) => {
                if let Some(text) = &patch.text {
                    t.text = text.clone();
                }
                if let Some(size) = patch.font_size {
                    t.font_size = size.max(1.0);
                }
            }
            StaticObject::Badge(b) => {
                if let Some(text) = &patch.text {
                    b.text = text.clone();
                }
                if let Some(size) = patch.font_size {
                    b.font_size = size.max(1.0);
                }
            }
            StaticObject::Line(l) => {
                if let Some(points) = &patch.points {
                    l.points = points.clone();
                }
            }
            StaticObject::Arrow(a) => {
                if let Some(points) = &patch.points {
                    a.points = points.clone();
                }
            }
            _ => {}
        }
    }

    /// Copy with a fresh ID.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.base_mut().id = new_object_id();
        copy
    }
}

impl ShapeTrait for StaticObject {
    fn base(&self) -> &ObjectBase {
        match self {
            StaticObject::Rect(s) => &s.base,
            StaticObject::Ellipse(s) => &s.base,
            StaticObject::Text(s) => &s.base,
            StaticObject::Image(s) => &s.base,
            StaticObject::Line(s) => &s.base,
            StaticObject::Star(s) => &s.base,
            StaticObject::Triangle(s) => &s.base,
            StaticObject::Arrow(s) => &s.base,
            StaticObject::Badge(s) => &s.base,
        }
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        match self {
            StaticObject::Rect(s) => &mut s.base,
            StaticObject::Ellipse(s) => &mut s.base,
            StaticObject::Text(s) => &mut s.base,
            StaticObject::Image(s) => &mut s.base,
            StaticObject::Line(s) => &mut s.base,
            StaticObject::Star(s) => &mut s.base,
            StaticObject::Triangle(s) => &mut s.base,
            StaticObject::Arrow(s) => &mut s.base,
            StaticObject::Badge(s) => &mut s.base,
        }
    }
}

/// One visual element on the canvas.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DesignObject {
    Shape(StaticObject),
    Interactive(InteractiveComponent),
}

impl<'de> Deserialize<'de> for DesignObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        let is_interactive = value.get("type").and_then(|t| t.as_str()) == Some("interactive");
        if is_interactive {
            InteractiveComponent::deserialize(value)
                .map(DesignObject::Interactive)
                .map_err(D::Error::custom)
        } else {
            StaticObject::deserialize(value)
                .map(DesignObject::Shape)
                .map_err(D::Error::custom)
        }
    }
}

impl DesignObject {
    pub fn kind(&self) -> ObjectKind {
        match self {
            DesignObject::Shape(s) => s.kind(),
            DesignObject::Interactive(_) => ObjectKind::Interactive,
        }
    }

    pub fn is_interactive(&self) -> bool {
        matches!(self, DesignObject::Interactive(_))
    }

    pub fn as_interactive(&self) -> Option<&InteractiveComponent> {
        match self {
            DesignObject::Interactive(c) => Some(c),
            DesignObject::Shape(_) => None,
        }
    }

    pub fn as_interactive_mut(&mut self) -> Option<&mut InteractiveComponent> {
        match self {
            DesignObject::Interactive(c) => Some(c),
            DesignObject::Shape(_) => None,
        }
    }

    pub fn as_static(&self) -> Option<&StaticObject> {
        match self {
            DesignObject::Shape(s) => Some(s),
            DesignObject::Interactive(_) => None,
        }
    }

    pub fn style(&self) -> Option<&ShapeStyle> {
        self.as_static().and_then(StaticObject::style)
    }

    /// Shallow-merge a patch. Interactive components only take base fields.
    pub fn apply_patch(&mut self, patch: &ObjectPatch) {
        match self {
            DesignObject::Shape(s) => s.apply_patch(patch),
            DesignObject::Interactive(c) => patch.apply_to_base(&mut c.base),
        }
    }

    /// Deep copy with fresh IDs, including a component's children and groups.
    pub fn duplicate(&self) -> Self {
        match self {
            DesignObject::Shape(s) => DesignObject::Shape(s.duplicate()),
            DesignObject::Interactive(c) => DesignObject::Interactive(c.duplicate()),
        }
    }
}

impl ShapeTrait for DesignObject {
    fn base(&self) -> &ObjectBase {
        match self {
            DesignObject::Shape(s) => s.base(),
            DesignObject::Interactive(c) => &c.base,
        }
    }

    fn base_mut(&mut self) -> &mut ObjectBase {
        match self {
            DesignObject::Shape(s) => s.base_mut(),
            DesignObject::Interactive(c) => &mut c.base,
        }
    }
}

impl From<StaticObject> for DesignObject {
    fn from(object: StaticObject) -> Self {
        DesignObject::Shape(object)
    }
}

impl From<InteractiveComponent> for DesignObject {
    fn from(component: InteractiveComponent) -> Self {
        DesignObject::Interactive(component)
    }
}

macro_rules! impl_static_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for StaticObject {
                fn from(object: $ty) -> Self {
                    StaticObject::$variant(object)
                }
            }

            impl From<$ty> for DesignObject {
                fn from(object: $ty) -> Self {
                    DesignObject::Shape(StaticObject::$variant(object))
                }
            }
        )*
    };
}

impl_static_from!(
    RectObject => Rect,
    EllipseObject => Ellipse,
    TextObject => Text,
    ImageObject => Image,
    LineObject => Line,
    StarObject => Star,
    TriangleObject => Triangle,
    ArrowObject => Arrow,
    BadgeObject => Badge,
);

/// Union of the bounds of the given objects.
pub fn union_bounds<'a>(objects: impl IntoIterator<Item = &'a DesignObject>) -> Option<Rect> {
    objects
        .into_iter()
        .map(|o| o.bounds())
        .reduce(|acc, b| acc.union(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::{create_ellipse, create_rect, create_text};

    #[test]
    fn test_object_ids_are_unique() {
        let a = create_rect();
        let b = create_rect();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_base_clamps() {
        let mut base = ObjectBase::new("x", 0.0, -5.0);
        assert_eq!(base.width, MIN_OBJECT_SIZE);
        assert_eq!(base.height, MIN_OBJECT_SIZE);
        base.set_opacity(1.7);
        assert_eq!(base.opacity, 1.0);
        base.set_opacity(-0.2);
        assert_eq!(base.opacity, 0.0);
    }

    #[test]
    fn test_builder_overrides() {
        let rect = create_rect().at(10.0, 20.0).sized(80.0, 40.0).named("Card");
        assert_eq!(rect.base.x, 10.0);
        assert_eq!(rect.base.y, 20.0);
        assert_eq!(rect.base.width, 80.0);
        assert_eq!(rect.base.name, "Card");

        let centered = create_rect().sized(100.0, 50.0).centered_at(200.0, 100.0);
        assert_eq!(centered.base.x, 150.0);
        assert_eq!(centered.base.y, 75.0);
    }

    #[test]
    fn test_serialized_type_tag() {
        let object: DesignObject = create_ellipse().into();
        let json = serde_json::to_value(&object).unwrap();
        assert_eq!(json["type"], "ellipse");
        assert!(json.get("id").is_some());
        assert!(json.get("fill").is_some());
    }

    #[test]
    fn test_deserialize_dispatches_on_type() {
        let object: DesignObject = create_text().into();
        let json = serde_json::to_string(&object).unwrap();
        let back: DesignObject = serde_json::from_str(&json).unwrap();
        assert_eq!(back.kind(), ObjectKind::Text);
        assert_eq!(back, object);
    }

    #[test]
    fn test_unknown_type_is_an_error() {
        let raw = r#"{"type":"hexagon","id":"a","x":0,"y":0,"width":10,"height":10}"#;
        assert!(serde_json::from_str::<DesignObject>(raw).is_err());
    }

    #[test]
    fn test_apply_patch_merges_and_clamps() {
        let mut object: DesignObject = create_rect().into();
        let patch = ObjectPatch {
            x: Some(42.0),
            width: Some(0.0),
            opacity: Some(3.0),
            fill: Some("#00ff00".to_string()),
            ..ObjectPatch::default()
        };
        object.apply_patch(&patch);
        assert_eq!(object.base().x, 42.0);
        assert_eq!(object.base().width, MIN_OBJECT_SIZE);
        assert_eq!(object.base().opacity, 1.0);
        assert_eq!(object.style().map(|s| s.fill.as_str()), Some("#00ff00"));
    }

    #[test]
    fn test_duplicate_gets_fresh_id() {
        let object: DesignObject = create_rect().into();
        let copy = object.duplicate();
        assert_ne!(copy.id(), object.id());
        assert_eq!(copy.base().x, object.base().x);
    }

    #[test]
    fn test_union_bounds() {
        let a: DesignObject = create_rect().at(0.0, 0.0).sized(10.0, 10.0).into();
        let b: DesignObject = create_rect().at(20.0, 5.0).sized(10.0, 30.0).into();
        let bounds = union_bounds([&a, &b]).unwrap();
        assert_eq!(bounds, Rect::new(0.0, 0.0, 30.0, 35.0));
        assert!(union_bounds(std::iter::empty()).is_none());
    }
}
