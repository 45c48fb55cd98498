//! Block templates: pre-arranged compositions of primitive objects.
//!
//! Blocks are not an object type. Each function returns a list of ordinary
//! objects laid out around a center point, in back-to-front order, ready to
//! be appended to the document.

use crate::factory::{
    BRAND_ACCENT, BRAND_PRIMARY, MUTED_TEXT_COLOR, TEXT_COLOR, create_badge, create_ellipse,
    create_image, create_line, create_rect, create_text,
};
use crate::shapes::{DesignObject, FontStyle, Shadow, ShapeTrait, Styled, TextAlign};

fn card_shadow() -> Shadow {
    Shadow {
        color: "#000000".to_string(),
        blur: 16.0,
        offset_x: 0.0,
        offset_y: 6.0,
        opacity: 0.12,
    }
}

/// Card with a title and a body paragraph.
pub fn create_info_card(cx: f64, cy: f64) -> Vec<DesignObject> {
    let (w, h) = (300.0, 180.0);
    let (left, top) = (cx - w / 2.0, cy - h / 2.0);

    let mut background = create_rect()
        .named("Info Card")
        .at(left, top)
        .sized(w, h)
        .with_fill("#FFFFFF")
        .with_stroke("#E5E7EB", 1.0)
        .with_shadow(card_shadow());
    background.corner_radius = 16.0;

    let title = create_text()
        .named("Card Title")
        .at(left + 24.0, top + 24.0)
        .sized(w - 48.0, 30.0)
        .with_text("Did you know?")
        .with_font_size(22.0)
        .with_font_style(FontStyle::Bold);

    let body = create_text()
        .named("Card Body")
        .at(left + 24.0, top + 66.0)
        .sized(w - 48.0, 90.0)
        .with_text("Share a helpful tip or a key fact with your customers here.")
        .with_font_size(16.0)
        .with_fill(MUTED_TEXT_COLOR);

    vec![background.into(), title.into(), body.into()]
}

/// Large number with a caption underneath.
pub fn create_stat_counter(cx: f64, cy: f64) -> Vec<DesignObject> {
    let w = 200.0;

    let value = create_text()
        .named("Stat Value")
        .sized(w, 64.0)
        .centered_at(cx, cy - 20.0)
        .with_text("98%")
        .with_font_size(56.0)
        .with_font_style(FontStyle::Bold)
        .with_fill(BRAND_PRIMARY)
        .aligned(TextAlign::Center);

    let label = create_text()
        .named("Stat Label")
        .sized(w, 24.0)
        .centered_at(cx, cy + 32.0)
        .with_text("Customer satisfaction")
        .with_font_size(16.0)
        .with_fill(MUTED_TEXT_COLOR)
        .aligned(TextAlign::Center);

    vec![value.into(), label.into()]
}

/// Quotation with an accent bar and attribution.
pub fn create_quote_block(cx: f64, cy: f64) -> Vec<DesignObject> {
    let (w, h) = (300.0, 150.0);
    let (left, top) = (cx - w / 2.0, cy - h / 2.0);

    let accent = create_rect()
        .named("Quote Accent")
        .at(left, top)
        .sized(4.0, h)
        .with_fill(BRAND_PRIMARY);

    let quote = create_text()
        .named("Quote Text")
        .at(left + 20.0, top)
        .sized(w - 20.0, 100.0)
        .with_text("\u{201C}The best support feels like a conversation with a friend.\u{201D}")
        .with_font_size(20.0)
        .with_font_style(FontStyle::Italic);

    let author = create_text()
        .named("Quote Author")
        .at(left + 20.0, top + 116.0)
        .sized(w - 20.0, 24.0)
        .with_text("\u{2014} Happy Customer")
        .with_font_size(14.0)
        .with_fill(MUTED_TEXT_COLOR);

    vec![accent.into(), quote.into(), author.into()]
}

/// Headline with a call-to-action button.
pub fn create_cta_block(cx: f64, cy: f64) -> Vec<DesignObject> {
    let headline = create_text()
        .named("CTA Headline")
        .sized(300.0, 36.0)
        .centered_at(cx, cy - 40.0)
        .with_text("Need more help?")
        .with_font_size(26.0)
        .with_font_style(FontStyle::Bold)
        .aligned(TextAlign::Center);

    let mut button = create_rect()
        .named("CTA Button")
        .sized(200.0, 52.0)
        .centered_at(cx, cy + 30.0)
        .with_fill(BRAND_PRIMARY);
    button.corner_radius = 26.0;

    let label = create_text()
        .named("CTA Label")
        .sized(200.0, 24.0)
        .centered_at(cx, cy + 30.0)
        .with_text("Contact us")
        .with_font_size(18.0)
        .with_font_style(FontStyle::Bold)
        .with_fill("#FFFFFF")
        .aligned(TextAlign::Center);

    vec![headline.into(), button.into(), label.into()]
}

/// Full-width colored header with title and subtitle.
pub fn create_header_section(cx: f64, cy: f64) -> Vec<DesignObject> {
    let (w, h) = (390.0, 200.0);

    let background = create_rect()
        .named("Header Background")
        .sized(w, h)
        .centered_at(cx, cy)
        .with_gradient(crate::shapes::Gradient::linear(BRAND_PRIMARY, BRAND_ACCENT, 135.0));

    let title = create_text()
        .named("Header Title")
        .sized(w - 48.0, 40.0)
        .centered_at(cx, cy - 18.0)
        .with_text("Welcome to Support")
        .with_font_size(30.0)
        .with_font_style(FontStyle::Bold)
        .with_fill("#FFFFFF")
        .aligned(TextAlign::Center);

    let subtitle = create_text()
        .named("Header Subtitle")
        .sized(w - 48.0, 24.0)
        .centered_at(cx, cy + 26.0)
        .with_text("We're here to help")
        .with_font_size(16.0)
        .with_fill("#F3F4F6")
        .aligned(TextAlign::Center);

    vec![background.into(), title.into(), subtitle.into()]
}

/// 2x2 grid of round icons with labels.
pub fn create_icon_grid(cx: f64, cy: f64) -> Vec<DesignObject> {
    const LABELS: [&str; 4] = ["Orders", "Returns", "Billing", "Account"];
    let (cell_w, cell_h) = (140.0, 110.0);
    let icon_size = 56.0;

    let mut objects = Vec::with_capacity(LABELS.len() * 2);
    for (i, label) in LABELS.iter().enumerate() {
        let col = (i % 2) as f64;
        let row = (i / 2) as f64;
        let cell_cx = cx - cell_w / 2.0 + col * cell_w;
        let cell_cy = cy - cell_h / 2.0 + row * cell_h;

        let icon = create_ellipse()
            .named(format!("{label} Icon"))
            .sized(icon_size, icon_size)
            .centered_at(cell_cx, cell_cy - 14.0)
            .with_fill(if i % 2 == 0 { BRAND_PRIMARY } else { BRAND_ACCENT });

        let caption = create_text()
            .named(format!("{label} Label"))
            .sized(cell_w - 16.0, 20.0)
            .centered_at(cell_cx, cell_cy + 32.0)
            .with_text(*label)
            .with_font_size(14.0)
            .aligned(TextAlign::Center);

        objects.push(icon.into());
        objects.push(caption.into());
    }
    objects
}

/// Image placeholder with a caption.
pub fn create_image_caption(cx: f64, cy: f64) -> Vec<DesignObject> {
    let (w, image_h) = (300.0, 200.0);
    let top = cy - (image_h + 40.0) / 2.0;

    let mut image = create_image()
        .named("Captioned Image")
        .at(cx - w / 2.0, top)
        .sized(w, image_h);
    image.corner_radius = 12.0;

    let caption = create_text()
        .named("Image Caption")
        .at(cx - w / 2.0, top + image_h + 12.0)
        .sized(w, 22.0)
        .with_text("Add a caption")
        .with_font_size(14.0)
        .with_fill(MUTED_TEXT_COLOR)
        .aligned(TextAlign::Center);

    vec![image.into(), caption.into()]
}

/// Three numbered steps with a connecting rule.
pub fn create_numbered_list(cx: f64, cy: f64) -> Vec<DesignObject> {
    const STEPS: [&str; 3] = ["Open the app", "Tap Help", "Chat with us"];
    let row_h = 56.0;
    let w = 300.0;
    let left = cx - w / 2.0;
    let top = cy - row_h * STEPS.len() as f64 / 2.0;

    let mut rule = create_line()
        .named("List Rule")
        .at(left + 16.0, top + 16.0)
        .sized(1.0, row_h * (STEPS.len() - 1) as f64)
        .with_stroke("#E5E7EB", 2.0);
    rule.points = vec![0.0, 0.0, 0.0, row_h * (STEPS.len() - 1) as f64];

    let mut objects: Vec<DesignObject> = vec![rule.into()];
    for (i, step) in STEPS.iter().enumerate() {
        let row_top = top + i as f64 * row_h;
        let number = create_badge()
            .named(format!("Step {} Number", i + 1))
            .at(left, row_top)
            .sized(32.0, 32.0)
            .with_text((i + 1).to_string());

        let label = create_text()
            .named(format!("Step {} Text", i + 1))
            .at(left + 48.0, row_top + 4.0)
            .sized(w - 48.0, 24.0)
            .with_text(*step)
            .with_font_size(18.0)
            .with_fill(TEXT_COLOR);

        objects.push(number.into());
        objects.push(label.into());
    }
    objects
}
