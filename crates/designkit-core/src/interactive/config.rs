//! Per-type interaction configuration.

use crate::error::InteractiveError;
use serde::{Deserialize, Serialize};

/// The kind of interaction a component performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InteractionType {
    FlipCard,
    BottomSheet,
    Expandable,
    Entrance,
    Carousel,
    Tabs,
    Quiz,
}

impl InteractionType {
    pub const ALL: [InteractionType; 7] = [
        InteractionType::FlipCard,
        InteractionType::BottomSheet,
        InteractionType::Expandable,
        InteractionType::Entrance,
        InteractionType::Carousel,
        InteractionType::Tabs,
        InteractionType::Quiz,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            InteractionType::FlipCard => "flip-card",
            InteractionType::BottomSheet => "bottom-sheet",
            InteractionType::Expandable => "expandable",
            InteractionType::Entrance => "entrance",
            InteractionType::Carousel => "carousel",
            InteractionType::Tabs => "tabs",
            InteractionType::Quiz => "quiz",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            InteractionType::FlipCard => "Flip Card",
            InteractionType::BottomSheet => "Bottom Sheet",
            InteractionType::Expandable => "Expandable",
            InteractionType::Entrance => "Entrance",
            InteractionType::Carousel => "Carousel",
            InteractionType::Tabs => "Tabs",
            InteractionType::Quiz => "Quiz",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipDirection {
    #[default]
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSide {
    #[default]
    Front,
    Back,
}

/// Flip between a front and a back face.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlipCardConfig {
    /// Milliseconds. The UI keeps this within 100..=2000; the model does not.
    pub flip_duration: u32,
    pub flip_direction: FlipDirection,
    pub default_side: CardSide,
}

impl Default for FlipCardConfig {
    fn default() -> Self {
        Self {
            flip_duration: 600,
            flip_direction: FlipDirection::Horizontal,
            default_side: CardSide::Front,
        }
    }
}

/// A trigger that slides a sheet up from the bottom edge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BottomSheetConfig {
    /// Fraction of the viewport the open sheet covers.
    pub sheet_height: f64,
    pub show_handle: bool,
    pub dismiss_on_backdrop: bool,
}

impl Default for BottomSheetConfig {
    fn default() -> Self {
        Self {
            sheet_height: 0.5,
            show_handle: true,
            dismiss_on_backdrop: true,
        }
    }
}

/// Collapsed summary that expands to reveal more content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExpandableConfig {
    pub expanded_by_default: bool,
    pub animation_duration: u32,
}

impl Default for ExpandableConfig {
    fn default() -> Self {
        Self {
            expanded_by_default: false,
            animation_duration: 300,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntranceAnimation {
    #[default]
    Fade,
    SlideUp,
    SlideLeft,
    Zoom,
}

/// Animate content in when it scrolls into view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EntranceConfig {
    pub animation: EntranceAnimation,
    pub duration: u32,
    pub delay: u32,
    /// Delay between successive children, in milliseconds.
    pub stagger: u32,
}

impl Default for EntranceConfig {
    fn default() -> Self {
        Self {
            animation: EntranceAnimation::Fade,
            duration: 500,
            delay: 0,
            stagger: 100,
        }
    }
}

/// Swipeable slides, one group per slide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CarouselConfig {
    pub auto_play: bool,
    /// Milliseconds; only meaningful when `auto_play` is set.
    pub auto_play_interval: u32,
    pub show_indicators: bool,
    #[serde(rename = "loop")]
    pub loop_slides: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_play: false,
            auto_play_interval: 3000,
            show_indicators: true,
            loop_slides: true,
        }
    }
}

/// Tab bar switching between panels, one group per tab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TabsConfig {
    pub tab_labels: Vec<String>,
    pub active_tab: usize,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            tab_labels: vec!["Tab 1".to_string(), "Tab 2".to_string(), "Tab 3".to_string()],
            active_tab: 0,
        }
    }
}

impl TabsConfig {
    pub fn add_tab(&mut self, label: impl Into<String>) {
        self.tab_labels.push(label.into());
    }

    /// Remove a tab label, keeping `active_tab` in range.
    pub fn remove_tab(&mut self, index: usize) -> bool {
        if index >= self.tab_labels.len() {
            return false;
        }
        self.tab_labels.remove(index);
        if index < self.active_tab {
            self.active_tab -= 1;
        }
        self.clamp();
        true
    }

    pub fn set_active_tab(&mut self, index: usize) {
        self.active_tab = index;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.active_tab = self.active_tab.min(self.tab_labels.len().saturating_sub(1));
    }
}

/// Multiple-choice question with feedback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuizConfig {
    pub question_text: String,
    pub options: Vec<String>,
    /// Always a valid index into `options`.
    pub correct_index: usize,
    pub show_feedback: bool,
    pub feedback_correct: String,
    pub feedback_incorrect: String,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_text: "Which option is correct?".to_string(),
            options: vec![
                "Option A".to_string(),
                "Option B".to_string(),
                "Option C".to_string(),
            ],
            correct_index: 0,
            show_feedback: true,
            feedback_correct: "Correct!".to_string(),
            feedback_incorrect: "Not quite, try again.".to_string(),
        }
    }
}

impl QuizConfig {
    pub fn add_option(&mut self, text: impl Into<String>) {
        self.options.push(text.into());
    }

    /// Remove an option. The last remaining option cannot be removed.
    ///
    /// Removing an option before the correct one keeps the same answer
    /// marked correct; otherwise `correct_index` is clamped into range.
    pub fn remove_option(&mut self, index: usize) -> bool {
        if index >= self.options.len() || self.options.len() <= 1 {
            return false;
        }
        self.options.remove(index);
        if index < self.correct_index {
            self.correct_index -= 1;
        }
        self.clamp();
        true
    }

    pub fn set_correct_index(&mut self, index: usize) {
        self.correct_index = index;
        self.clamp();
    }

    fn clamp(&mut self) {
        self.correct_index = self.correct_index.min(self.options.len().saturating_sub(1));
    }
}

/// Configuration tied to an [`InteractionType`]; the variant is the discriminant.
#[derive(Debug, Clone, PartialEq)]
pub enum InteractionConfig {
    FlipCard(FlipCardConfig),
    BottomSheet(BottomSheetConfig),
    Expandable(ExpandableConfig),
    Entrance(EntranceConfig),
    Carousel(CarouselConfig),
    Tabs(TabsConfig),
    Quiz(QuizConfig),
}

impl InteractionConfig {
    /// Default configuration for a type.
    pub fn default_for(interaction_type: InteractionType) -> Self {
        match interaction_type {
            InteractionType::FlipCard => Self::FlipCard(FlipCardConfig::default()),
            InteractionType::BottomSheet => Self::BottomSheet(BottomSheetConfig::default()),
            InteractionType::Expandable => Self::Expandable(ExpandableConfig::default()),
            InteractionType::Entrance => Self::Entrance(EntranceConfig::default()),
            InteractionType::Carousel => Self::Carousel(CarouselConfig::default()),
            InteractionType::Tabs => Self::Tabs(TabsConfig::default()),
            InteractionType::Quiz => Self::Quiz(QuizConfig::default()),
        }
    }

    pub fn interaction_type(&self) -> InteractionType {
        match self {
            Self::FlipCard(_) => InteractionType::FlipCard,
            Self::BottomSheet(_) => InteractionType::BottomSheet,
            Self::Expandable(_) => InteractionType::Expandable,
            Self::Entrance(_) => InteractionType::Entrance,
            Self::Carousel(_) => InteractionType::Carousel,
            Self::Tabs(_) => InteractionType::Tabs,
            Self::Quiz(_) => InteractionType::Quiz,
        }
    }

    /// Decode the `interactionConfig` JSON for the given type.
    ///
    /// Missing fields take their defaults; index fields are clamped into range.
    pub fn from_value(
        interaction_type: InteractionType,
        value: serde_json::Value,
    ) -> Result<Self, InteractiveError> {
        let wrap = |source| InteractiveError {
            interaction_type: interaction_type.as_str(),
            source,
        };
        let mut config = match interaction_type {
            InteractionType::FlipCard => Self::FlipCard(serde_json::from_value(value).map_err(wrap)?),
            InteractionType::BottomSheet => {
                Self::BottomSheet(serde_json::from_value(value).map_err(wrap)?)
            }
            InteractionType::Expandable => {
                Self::Expandable(serde_json::from_value(value).map_err(wrap)?)
            }
            InteractionType::Entrance => Self::Entrance(serde_json::from_value(value).map_err(wrap)?),
            InteractionType::Carousel => Self::Carousel(serde_json::from_value(value).map_err(wrap)?),
            InteractionType::Tabs => Self::Tabs(serde_json::from_value(value).map_err(wrap)?),
            InteractionType::Quiz => Self::Quiz(serde_json::from_value(value).map_err(wrap)?),
        };
        config.normalize();
        Ok(config)
    }

    /// Encode as the `interactionConfig` JSON object.
    pub fn to_value(&self) -> serde_json::Value {
        let encoded = match self {
            Self::FlipCard(c) => serde_json::to_value(c),
            Self::BottomSheet(c) => serde_json::to_value(c),
            Self::Expandable(c) => serde_json::to_value(c),
            Self::Entrance(c) => serde_json::to_value(c),
            Self::Carousel(c) => serde_json::to_value(c),
            Self::Tabs(c) => serde_json::to_value(c),
            Self::Quiz(c) => serde_json::to_value(c),
        };
        // Plain structs with string keys always encode.
        encoded.unwrap_or(serde_json::Value::Null)
    }

    /// Clamp index fields into range.
    pub fn normalize(&mut self) {
        match self {
            Self::Tabs(tabs) => tabs.clamp(),
            Self::Quiz(quiz) => quiz.clamp(),
            _ => {}
        }
    }

    pub fn as_quiz_mut(&mut self) -> Option<&mut QuizConfig> {
        match self {
            Self::Quiz(quiz) => Some(quiz),
            _ => None,
        }
    }

    pub fn as_tabs_mut(&mut self) -> Option<&mut TabsConfig> {
        match self {
            Self::Tabs(tabs) => Some(tabs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_interaction_type_strings() {
        for ty in InteractionType::ALL {
            let json = serde_json::to_value(ty).unwrap();
            assert_eq!(json, ty.as_str());
        }
    }

    #[test]
    fn test_quiz_clamps_correct_index() {
        let mut quiz = QuizConfig {
            options: vec!["a".into(), "b".into()],
            correct_index: 1,
            ..QuizConfig::default()
        };
        assert!(quiz.remove_option(1));
        assert_eq!(quiz.options.len(), 1);
        assert_eq!(quiz.correct_index, 0);
        assert!(!quiz.remove_option(0));
    }

    #[test]
    fn test_quiz_keeps_answer_when_earlier_option_removed() {
        let mut quiz = QuizConfig::default();
        quiz.set_correct_index(2);
        assert!(quiz.remove_option(0));
        assert_eq!(quiz.correct_index, 1);
        assert_eq!(quiz.options[quiz.correct_index], "Option C");
    }

    #[test]
    fn test_tabs_clamp_active_tab() {
        let mut tabs = TabsConfig {
            active_tab: 2,
            ..TabsConfig::default()
        };
        assert!(tabs.remove_tab(2));
        assert_eq!(tabs.active_tab, 1);
        assert!(!tabs.remove_tab(5));
    }

    #[test]
    fn test_from_value_fills_defaults() {
        let config =
            InteractionConfig::from_value(InteractionType::FlipCard, json!({"flipDuration": 900}))
                .unwrap();
        match config {
            InteractionConfig::FlipCard(flip) => {
                assert_eq!(flip.flip_duration, 900);
                assert_eq!(flip.default_side, CardSide::Front);
            }
            other => panic!("unexpected config {other:?}"),
        }
    }

    #[test]
    fn test_from_value_clamps_indices() {
        let config = InteractionConfig::from_value(
            InteractionType::Quiz,
            json!({"options": ["x", "y"], "correctIndex": 7}),
        )
        .unwrap();
        match config {
            InteractionConfig::Quiz(quiz) => assert_eq!(quiz.correct_index, 1),
            other => panic!("unexpected config {other:?}"),
        }
    }

    #[test]
    fn test_from_value_rejects_wrong_shape() {
        let err = InteractionConfig::from_value(InteractionType::Tabs, json!({"tabLabels": 3}))
            .unwrap_err();
        assert_eq!(err.interaction_type, "tabs");
    }

    #[test]
    fn test_carousel_loop_key() {
        let value = InteractionConfig::Carousel(CarouselConfig::default()).to_value();
        assert_eq!(value["loop"], true);
        assert_eq!(value["autoPlayInterval"], 3000);
    }
}
