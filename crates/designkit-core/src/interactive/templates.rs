//! Default interactive component templates.
//!
//! Each template is centered on `(cx, cy)`; children are laid out in
//! component-local coordinates with the origin at the component's top-left.

use super::{InteractionConfig, InteractionType, InteractiveComponent, ObjectGroup};
use crate::factory::{
    BRAND_ACCENT, BRAND_PRIMARY, MUTED_TEXT_COLOR, create_ellipse, create_rect, create_text,
};
use crate::shapes::{FontStyle, ShapeTrait, StaticObject, Styled, TextAlign};

struct GroupTemplate {
    role: String,
    label: String,
    children: Vec<StaticObject>,
}

impl GroupTemplate {
    fn new(role: impl Into<String>, label: impl Into<String>, children: Vec<StaticObject>) -> Self {
        Self {
            role: role.into(),
            label: label.into(),
            children,
        }
    }
}

fn assemble(
    interaction_type: InteractionType,
    (width, height): (f64, f64),
    (cx, cy): (f64, f64),
    groups: Vec<GroupTemplate>,
) -> InteractiveComponent {
    let mut component = InteractiveComponent::new(interaction_type, width, height).centered_at(cx, cy);
    for template in groups {
        let mut group = ObjectGroup::new(template.role, template.label);
        for child in template.children {
            group.object_ids.push(child.id().to_string());
            component.children.push(child);
        }
        component.groups.push(group);
    }
    component
}

fn panel(name: &str, width: f64, height: f64, fill: &str, corner_radius: f64) -> StaticObject {
    let mut rect = create_rect()
        .named(name)
        .at(0.0, 0.0)
        .sized(width, height)
        .with_fill(fill);
    rect.corner_radius = corner_radius;
    rect.into()
}

fn heading(name: &str, text: &str, x: f64, y: f64, width: f64, color: &str) -> StaticObject {
    create_text()
        .named(name)
        .at(x, y)
        .sized(width, 32.0)
        .with_text(text)
        .with_font_size(22.0)
        .with_font_style(FontStyle::Bold)
        .with_fill(color)
        .aligned(TextAlign::Center)
        .into()
}

fn body(name: &str, text: &str, x: f64, y: f64, width: f64) -> StaticObject {
    create_text()
        .named(name)
        .at(x, y)
        .sized(width, 48.0)
        .with_text(text)
        .with_font_size(16.0)
        .with_fill(MUTED_TEXT_COLOR)
        .aligned(TextAlign::Center)
        .into()
}

/// Two faces, `front` and `back`.
pub fn create_flip_card(cx: f64, cy: f64) -> InteractiveComponent {
    let (w, h) = (300.0, 200.0);
    assemble(
        InteractionType::FlipCard,
        (w, h),
        (cx, cy),
        vec![
            GroupTemplate::new(
                "front",
                "Front",
                vec![
                    panel("Front Background", w, h, BRAND_PRIMARY, 16.0),
                    heading("Front Title", "Tap to flip", 0.0, h / 2.0 - 16.0, w, "#FFFFFF"),
                ],
            ),
            GroupTemplate::new(
                "back",
                "Back",
                vec![
                    panel("Back Background", w, h, BRAND_ACCENT, 16.0),
                    heading("Back Title", "Here's the answer", 0.0, h / 2.0 - 16.0, w, "#FFFFFF"),
                ],
            ),
        ],
    )
}

/// A `trigger` button and the `sheet` it opens.
pub fn create_bottom_sheet(cx: f64, cy: f64) -> InteractiveComponent {
    let (w, h) = (340.0, 320.0);
    let mut trigger = create_rect()
        .named("Sheet Trigger")
        .at(70.0, 0.0)
        .sized(200.0, 48.0)
        .with_fill(BRAND_PRIMARY);
    trigger.corner_radius = 24.0;

    let handle = create_rect()
        .named("Sheet Handle")
        .at(w / 2.0 - 20.0, 80.0)
        .sized(40.0, 4.0)
        .with_fill("#D1D5DB");

    let mut sheet = create_rect()
        .named("Sheet Background")
        .at(0.0, 68.0)
        .sized(w, h - 68.0)
        .with_fill("#FFFFFF")
        .with_stroke("#E5E7EB", 1.0);
    sheet.corner_radius = 20.0;

    assemble(
        InteractionType::BottomSheet,
        (w, h),
        (cx, cy),
        vec![
            GroupTemplate::new(
                "trigger",
                "Trigger",
                vec![
                    trigger.into(),
                    heading("Trigger Label", "Learn more", 70.0, 8.0, 200.0, "#FFFFFF"),
                ],
            ),
            GroupTemplate::new(
                "sheet",
                "Sheet",
                vec![
                    sheet.into(),
                    handle.into(),
                    heading("Sheet Title", "More details", 20.0, 104.0, w - 40.0, "#111111"),
                    body("Sheet Body", "Put the extra information here.", 20.0, 148.0, w - 40.0),
                ],
            ),
        ],
    )
}

/// A `collapsed` header and the `expanded` content below it.
pub fn create_expandable(cx: f64, cy: f64) -> InteractiveComponent {
    let (w, h) = (320.0, 220.0);
    let chevron = create_text()
        .named("Expand Chevron")
        .at(w - 40.0, 14.0)
        .sized(24.0, 24.0)
        .with_text("\u{25BC}")
        .with_font_size(16.0);

    assemble(
        InteractionType::Expandable,
        (w, h),
        (cx, cy),
        vec![
            GroupTemplate::new(
                "collapsed",
                "Collapsed",
                vec![
                    panel("Header Background", w, 52.0, "#F3F4F6", 12.0),
                    create_text()
                        .named("Header Title")
                        .at(16.0, 12.0)
                        .sized(w - 64.0, 28.0)
                        .with_text("Frequently asked question")
                        .with_font_size(18.0)
                        .with_font_style(FontStyle::Bold)
                        .into(),
                    chevron.into(),
                ],
            ),
            GroupTemplate::new(
                "expanded",
                "Expanded",
                vec![
                    create_rect()
                        .named("Content Background")
                        .at(0.0, 60.0)
                        .sized(w, h - 60.0)
                        .with_fill("#FFFFFF")
                        .with_stroke("#E5E7EB", 1.0)
                        .into(),
                    body("Content Body", "The answer appears when expanded.", 16.0, 80.0, w - 32.0),
                ],
            ),
        ],
    )
}

/// A single `content` group animated into view.
pub fn create_entrance(cx: f64, cy: f64) -> InteractiveComponent {
    let (w, h) = (300.0, 160.0);
    assemble(
        InteractionType::Entrance,
        (w, h),
        (cx, cy),
        vec![GroupTemplate::new(
            "content",
            "Content",
            vec![
                panel("Entrance Background", w, h, "#EEF2FF", 16.0),
                heading("Entrance Title", "Hello there!", 0.0, 40.0, w, "#111111"),
                body("Entrance Body", "This slides in as you scroll.", 20.0, 84.0, w - 40.0),
            ],
        )],
    )
}

/// Three slides, `slide-1` to `slide-3`.
pub fn create_carousel(cx: f64, cy: f64) -> InteractiveComponent {
    let (w, h) = (320.0, 220.0);
    let colors = [BRAND_PRIMARY, BRAND_ACCENT, "#FDCB6E"];
    let groups = colors
        .iter()
        .enumerate()
        .map(|(i, color)| {
            let n = i + 1;
            GroupTemplate::new(
                format!("slide-{n}"),
                format!("Slide {n}"),
                vec![
                    panel(&format!("Slide {n} Background"), w, h, color, 16.0),
                    heading(
                        &format!("Slide {n} Title"),
                        &format!("Slide {n}"),
                        0.0,
                        h / 2.0 - 16.0,
                        w,
                        "#FFFFFF",
                    ),
                ],
            )
        })
        .collect();
    assemble(InteractionType::Carousel, (w, h), (cx, cy), groups)
}

/// One panel per tab label, `tab-1` to `tab-3`.
pub fn create_tabs(cx: f64, cy: f64) -> InteractiveComponent {
    let (w, h) = (340.0, 240.0);
    let labels = match InteractionConfig::default_for(InteractionType::Tabs) {
        InteractionConfig::Tabs(tabs) => tabs.tab_labels,
        _ => Vec::new(),
    };
    let tab_w = w / labels.len().max(1) as f64;
    let groups = labels
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let n = i + 1;
            let indicator = create_rect()
                .named(format!("{label} Indicator"))
                .at(i as f64 * tab_w, 44.0)
                .sized(tab_w, 3.0)
                .with_fill(BRAND_PRIMARY);
            GroupTemplate::new(
                format!("tab-{n}"),
                label.clone(),
                vec![
                    indicator.into(),
                    create_rect()
                        .named(format!("{label} Panel"))
                        .at(0.0, 56.0)
                        .sized(w, h - 56.0)
                        .with_fill("#F9FAFB")
                        .into(),
                    body(
                        &format!("{label} Content"),
                        &format!("Content for {label}"),
                        16.0,
                        80.0,
                        w - 32.0,
                    ),
                ],
            )
        })
        .collect();
    assemble(InteractionType::Tabs, (w, h), (cx, cy), groups)
}

/// `question` with option buttons, then `correct` and `incorrect` feedback.
pub fn create_quiz(cx: f64, cy: f64) -> InteractiveComponent {
    let (w, h) = (320.0, 300.0);
    let (question, options) = match InteractionConfig::default_for(InteractionType::Quiz) {
        InteractionConfig::Quiz(quiz) => (quiz.question_text, quiz.options),
        _ => (String::new(), Vec::new()),
    };

    let mut question_children = vec![
        panel("Quiz Background", w, h, "#FFFFFF", 16.0),
        heading("Question", &question, 16.0, 20.0, w - 32.0, "#111111"),
    ];
    for (i, option) in options.iter().enumerate() {
        let y = 76.0 + i as f64 * 60.0;
        let mut button = create_rect()
            .named(format!("Option {} Button", i + 1))
            .at(16.0, y)
            .sized(w - 32.0, 48.0)
            .with_fill("#F3F4F6")
            .with_stroke("#E5E7EB", 1.0);
        button.corner_radius = 12.0;
        question_children.push(button.into());
        question_children.push(
            create_text()
                .named(format!("Option {} Label", i + 1))
                .at(32.0, y + 12.0)
                .sized(w - 64.0, 24.0)
                .with_text(option.clone())
                .with_font_size(16.0)
                .into(),
        );
    }

    let feedback = |role: &str, label: &str, text: &str, color: &str| {
        let icon = create_ellipse()
            .named(format!("{label} Icon"))
            .at(w / 2.0 - 24.0, 90.0)
            .sized(48.0, 48.0)
            .with_fill(color);
        GroupTemplate::new(
            role,
            label,
            vec![
                icon.into(),
                heading(&format!("{label} Message"), text, 16.0, 160.0, w - 32.0, color),
            ],
        )
    };

    assemble(
        InteractionType::Quiz,
        (w, h),
        (cx, cy),
        vec![
            GroupTemplate::new("question", "Question", question_children),
            feedback("correct", "Correct", "Correct!", BRAND_ACCENT),
            feedback("incorrect", "Incorrect", "Not quite, try again.", "#E17055"),
        ],
    )
}

/// Template for any interaction type.
pub fn create_interactive(interaction_type: InteractionType, cx: f64, cy: f64) -> InteractiveComponent {
    match interaction_type {
        InteractionType::FlipCard => create_flip_card(cx, cy),
        InteractionType::BottomSheet => create_bottom_sheet(cx, cy),
        InteractionType::Expandable => create_expandable(cx, cy),
        InteractionType::Entrance => create_entrance(cx, cy),
        InteractionType::Carousel => create_carousel(cx, cy),
        InteractionType::Tabs => create_tabs(cx, cy),
        InteractionType::Quiz => create_quiz(cx, cy),
    }
}
