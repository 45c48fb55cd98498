//! Defense for documents produced by an AI generation service.
//!
//! [`sanitize_document`] turns untrusted JSON into a [`DesignDocument`] that
//! satisfies every schema invariant. Only a malformed top level is rejected;
//! individual objects are rebuilt from factory defaults, keeping whatever
//! fields survive validation and dropping the rest.

use crate::document::{Asset, CanvasConfig, DEFAULT_BACKGROUND, DOCUMENT_VERSION, DesignDocument};
use crate::error::SanitizeError;
use crate::factory::{BRAND_PRIMARY, TEXT_COLOR, create_ellipse, create_line, create_rect, create_text};
use crate::shapes::{
    DesignObject, FontStyle, MIN_OBJECT_SIZE, ObjectBase, ShapeStyle, TextAlign, is_hex_color,
};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Object types a generator may emit.
pub const GENERATABLE_TYPES: [&str; 4] = ["rect", "ellipse", "text", "line"];

/// Lower bound for `x`/`y`, as a fraction of the canvas size.
const MIN_POSITION_FACTOR: f64 = -0.5;

/// Upper bound for `x`/`y`, as a fraction of the canvas size.
const MAX_POSITION_FACTOR: f64 = 1.5;

type Fields = Map<String, Value>;

fn number(fields: &Fields, key: &str) -> Option<f64> {
    fields.get(key)?.as_f64().filter(|n| n.is_finite())
}

fn string<'a>(fields: &'a Fields, key: &str) -> Option<&'a str> {
    fields.get(key)?.as_str()
}

fn hex_or(fields: &Fields, key: &str, fallback: &str) -> String {
    match string(fields, key) {
        Some(color) if is_hex_color(color) => color.to_string(),
        other => {
            if other.is_some() {
                log::debug!("Replacing invalid {key} {other:?} with {fallback}");
            }
            fallback.to_string()
        }
    }
}

/// Validate a generated document.
///
/// Fails only when the value is not an object, `canvas` is missing or not
/// an object, or `objects` is not an array.
pub fn sanitize_document(raw: &Value) -> Result<DesignDocument, SanitizeError> {
    let root = raw.as_object().ok_or(SanitizeError::NotAnObject)?;
    let canvas = root
        .get("canvas")
        .and_then(Value::as_object)
        .ok_or(SanitizeError::MissingCanvas)?;
    let objects = root
        .get("objects")
        .and_then(Value::as_array)
        .ok_or(SanitizeError::ObjectsNotArray)?;

    let canvas = sanitize_canvas(canvas);
    let sanitized: Vec<DesignObject> = objects
        .iter()
        .filter_map(|object| sanitize_object(object, &canvas))
        .collect();
    if sanitized.len() < objects.len() {
        log::debug!(
            "Sanitizer dropped {} of {} generated objects",
            objects.len() - sanitized.len(),
            objects.len()
        );
    }

    Ok(DesignDocument {
        version: DOCUMENT_VERSION,
        canvas,
        objects: sanitized,
        assets: root
            .get("assets")
            .and_then(Value::as_object)
            .map(sanitize_assets)
            .unwrap_or_default(),
    })
}

fn sanitize_canvas(fields: &Fields) -> CanvasConfig {
    let defaults = CanvasConfig::default();
    CanvasConfig {
        width: number(fields, "width")
            .filter(|w| *w >= MIN_OBJECT_SIZE)
            .unwrap_or(defaults.width),
        height: number(fields, "height")
            .filter(|h| *h >= MIN_OBJECT_SIZE)
            .unwrap_or(defaults.height),
        background: hex_or(fields, "background", DEFAULT_BACKGROUND),
    }
}

fn sanitize_assets(fields: &Fields) -> BTreeMap<String, Asset> {
    fields
        .iter()
        .filter_map(|(id, asset)| {
            let asset = asset.as_object()?;
            let url = string(asset, "url")?;
            Some((
                id.clone(),
                Asset {
                    url: url.to_string(),
                    name: string(asset, "name").unwrap_or_default().to_string(),
                },
            ))
        })
        .collect()
}

fn sanitize_object(value: &Value, canvas: &CanvasConfig) -> Option<DesignObject> {
    let Some(fields) = value.as_object() else {
        log::debug!("Dropping non-object entry");
        return None;
    };
    let object: DesignObject = match string(fields, "type") {
        Some("rect") => {
            let mut rect = create_rect();
            sanitize_base(&mut rect.base, fields, canvas);
            sanitize_filled(&mut rect.style, fields);
            rect.corner_radius = number(fields, "cornerRadius").map_or(0.0, |r| r.max(0.0));
            rect.into()
        }
        Some("ellipse") => {
            let mut ellipse = create_ellipse();
            sanitize_base(&mut ellipse.base, fields, canvas);
            sanitize_filled(&mut ellipse.style, fields);
            ellipse.into()
        }
        Some("text") => {
            let mut text = create_text();
            sanitize_base(&mut text.base, fields, canvas);
            text.style.fill = hex_or(fields, "fill", TEXT_COLOR);
            if let Some(content) = string(fields, "text") {
                text.text = content.to_string();
            }
            if let Some(size) = number(fields, "fontSize").filter(|s| *s > 0.0) {
                text.font_size = size;
            }
            if let Some(family) = string(fields, "fontFamily").filter(|f| !f.trim().is_empty()) {
                text.font_family = family.to_string();
            }
            text.font_style = string(fields, "fontStyle")
                .and_then(FontStyle::parse)
                .unwrap_or_default();
            text.align = string(fields, "align")
                .and_then(TextAlign::parse)
                .unwrap_or_default();
            if let Some(line_height) = number(fields, "lineHeight").filter(|h| *h > 0.0) {
                text.line_height = line_height;
            }
            text.letter_spacing = number(fields, "letterSpacing").unwrap_or(0.0);
            text.into()
        }
        Some("line") => {
            let mut line = create_line();
            sanitize_base(&mut line.base, fields, canvas);
            let points: Option<Vec<f64>> = fields
                .get("points")
                .and_then(Value::as_array)
                .map(|points| points.iter().map(Value::as_f64).collect::<Option<Vec<_>>>())
                .and_then(|points| points.filter(|p| p.iter().all(|n| n.is_finite())));
            match points {
                Some(points) if points.len() >= 4 => line.points = points,
                _ => log::debug!("Replacing line points with the default segment"),
            }
            let default_stroke = line.style.stroke.clone();
            line.style.stroke = hex_or(fields, "stroke", &default_stroke);
            if let Some(width) = number(fields, "strokeWidth").filter(|w| *w > 0.0) {
                line.style.stroke_width = width;
            }
            line.into()
        }
        other => {
            log::debug!("Dropping object of unsupported type {other:?}");
            return None;
        }
    };
    Some(object)
}

/// Copy validated base fields onto a factory default. The factory's fresh ID
/// is always kept.
fn sanitize_base(base: &mut ObjectBase, fields: &Fields, canvas: &CanvasConfig) {
    if let Some(name) = string(fields, "name").filter(|n| !n.trim().is_empty()) {
        base.name = name.to_string();
    }
    if let Some(x) = number(fields, "x") {
        base.x = x.clamp(
            MIN_POSITION_FACTOR * canvas.width,
            MAX_POSITION_FACTOR * canvas.width,
        );
    }
    if let Some(y) = number(fields, "y") {
        base.y = y.clamp(
            MIN_POSITION_FACTOR * canvas.height,
            MAX_POSITION_FACTOR * canvas.height,
        );
    }
    let width = number(fields, "width").unwrap_or(base.width);
    let height = number(fields, "height").unwrap_or(base.height);
    base.set_size(width, height);
    if let Some(rotation) = number(fields, "rotation") {
        base.rotation = rotation;
    }
    if let Some(opacity) = number(fields, "opacity") {
        base.set_opacity(opacity);
    }
    if let Some(visible) = fields.get("visible").and_then(Value::as_bool) {
        base.visible = visible;
    }
    if let Some(locked) = fields.get("locked").and_then(Value::as_bool) {
        base.locked = locked;
    }
}

fn sanitize_filled(style: &mut ShapeStyle, fields: &Fields) {
    style.fill = hex_or(fields, "fill", BRAND_PRIMARY);
    style.stroke = hex_or(fields, "stroke", "");
    style.stroke_width = if style.stroke.is_empty() {
        0.0
    } else {
        number(fields, "strokeWidth").map_or(1.0, |w| w.max(0.0))
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{ShapeTrait, StaticObject};
    use serde_json::json;

    fn canvas() -> Value {
        json!({ "width": 390, "height": 844, "background": "#FAFAFA" })
    }

    fn sanitize_one(object: Value) -> Option<StaticObject> {
        let doc = sanitize_document(&json!({ "canvas": canvas(), "objects": [object] })).unwrap();
        doc.objects.into_iter().next().and_then(|o| o.as_static().cloned())
    }

    #[test]
    fn test_structural_rejections() {
        assert_eq!(sanitize_document(&json!([])), Err(SanitizeError::NotAnObject));
        assert_eq!(
            sanitize_document(&json!({ "objects": [] })),
            Err(SanitizeError::MissingCanvas)
        );
        assert_eq!(
            sanitize_document(&json!({ "canvas": "big", "objects": [] })),
            Err(SanitizeError::MissingCanvas)
        );
        assert_eq!(
            sanitize_document(&json!({ "canvas": canvas(), "objects": {} })),
            Err(SanitizeError::ObjectsNotArray)
        );
    }

    #[test]
    fn test_drops_unsupported_types() {
        let doc = sanitize_document(&json!({
            "canvas": canvas(),
            "objects": [
                { "type": "interactive", "x": 0, "y": 0, "width": 10, "height": 10 },
                { "type": "star" },
                { "type": "image", "src": "https://example.com/a.png" },
                "rect",
                { "type": "rect", "x": 10, "y": 10, "width": 50, "height": 50 },
            ]
        }))
        .unwrap();
        assert_eq!(doc.objects.len(), 1);
    }

    #[test]
    fn test_ids_are_regenerated() {
        let doc = sanitize_document(&json!({
            "canvas": canvas(),
            "objects": [
                { "id": "same", "type": "rect" },
                { "id": "same", "type": "ellipse" },
            ]
        }))
        .unwrap();
        assert!(doc.objects.iter().all(|o| o.id() != "same"));
        assert_ne!(doc.objects[0].id(), doc.objects[1].id());
        assert_eq!(doc.integrity_issues(), vec![]);
    }

    #[test]
    fn test_base_clamping() {
        let Some(StaticObject::Rect(rect)) = sanitize_one(json!({
            "type": "rect",
            "name": "",
            "x": -10000,
            "y": 99999,
            "width": 0,
            "height": -4,
            "opacity": 7,
        })) else {
            panic!("expected a rect");
        };
        assert_eq!(rect.base.x, -195.0);
        assert_eq!(rect.base.y, 1266.0);
        assert_eq!((rect.base.width, rect.base.height), (1.0, 1.0));
        assert_eq!(rect.base.opacity, 1.0);
        assert_eq!(rect.base.name, "Rectangle");
    }

    #[test]
    fn test_fill_fallbacks() {
        let Some(StaticObject::Rect(rect)) =
            sanitize_one(json!({ "type": "rect", "fill": "notacolor", "stroke": "red" }))
        else {
            panic!("expected a rect");
        };
        assert_eq!(rect.style.fill, BRAND_PRIMARY);
        assert_eq!(rect.style.stroke, "");

        let Some(StaticObject::Ellipse(ellipse)) =
            sanitize_one(json!({ "type": "ellipse", "fill": "#00FF00", "stroke": "#000" }))
        else {
            panic!("expected an ellipse");
        };
        assert_eq!(ellipse.style.fill, "#00FF00");
        assert_eq!(ellipse.style.stroke, "#000");
    }

    #[test]
    fn test_text_coercion() {
        let Some(StaticObject::Text(text)) = sanitize_one(json!({
            "type": "text",
            "text": "Hello",
            "fontStyle": "oblique",
            "align": "justify",
            "fill": 42,
        })) else {
            panic!("expected text");
        };
        assert_eq!(text.text, "Hello");
        assert_eq!(text.font_style, FontStyle::Normal);
        assert_eq!(text.align, TextAlign::Left);
        assert_eq!(text.style.fill, "#111111");

        let Some(StaticObject::Text(text)) = sanitize_one(json!({
            "type": "text",
            "fontStyle": "italic bold",
            "align": "center",
        })) else {
            panic!("expected text");
        };
        assert_eq!(text.font_style, FontStyle::ItalicBold);
        assert_eq!(text.align, TextAlign::Center);
    }

    #[test]
    fn test_line_points() {
        let Some(StaticObject::Line(line)) =
            sanitize_one(json!({ "type": "line", "points": [0, 0, 10], "stroke": "nope" }))
        else {
            panic!("expected a line");
        };
        assert_eq!(line.points, vec![0.0, 0.0, 150.0, 0.0]);
        assert_eq!(line.style.stroke, "#111111");

        let Some(StaticObject::Line(line)) =
            sanitize_one(json!({ "type": "line", "points": [0, 0, 40, 40], "stroke": "#FF0000" }))
        else {
            panic!("expected a line");
        };
        assert_eq!(line.points, vec![0.0, 0.0, 40.0, 40.0]);
        assert_eq!(line.style.stroke, "#FF0000");
    }

    #[test]
    fn test_canvas_background() {
        let doc = sanitize_document(&json!({
            "canvas": { "width": 1080, "height": 1920, "background": "white" },
            "objects": []
        }))
        .unwrap();
        assert_eq!(doc.canvas.background, "#FFFFFF");
        assert_eq!(doc.canvas.width, 1080.0);

        let doc = sanitize_document(&json!({ "canvas": canvas(), "objects": [] })).unwrap();
        assert_eq!(doc.canvas.background, "#FAFAFA");
    }

    #[test]
    fn test_output_round_trips() {
        let doc = sanitize_document(&json!({
            "canvas": canvas(),
            "objects": [
                { "type": "text", "text": "Title" },
                { "type": "line" },
            ],
            "assets": { "a1": { "url": "https://example.com/a.png" }, "bad": 3 }
        }))
        .unwrap();
        assert_eq!(doc.assets.len(), 1);
        let json = doc.to_json().unwrap();
        assert_eq!(DesignDocument::from_json(&json).unwrap(), doc);
    }
}
