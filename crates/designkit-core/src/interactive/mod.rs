//! Interactive components.
//!
//! A component is a multi-state object: a flat list of primitive `children`
//! plus named `groups` that index into it, one group per visual state
//! (front/back of a flip card, one slide of a carousel, ...). Which group is
//! being edited is editor state, not component state.

mod config;
mod templates;

pub use config::{
    BottomSheetConfig, CardSide, CarouselConfig, EntranceAnimation, EntranceConfig,
    ExpandableConfig, FlipCardConfig, FlipDirection, InteractionConfig, InteractionType,
    QuizConfig, TabsConfig,
};
pub use templates::{
    create_bottom_sheet, create_carousel, create_entrance, create_expandable, create_flip_card,
    create_interactive, create_quiz, create_tabs,
};

use crate::error::InteractiveError;
use crate::shapes::{ObjectBase, ObjectId, ShapeTrait, StaticObject, new_object_id};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// One state of a component: an ordered subset of its children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ObjectGroup {
    pub role: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub object_ids: Vec<ObjectId>,
}

impl ObjectGroup {
    pub fn new(role: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            label: label.into(),
            object_ids: Vec::new(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.object_ids.iter().any(|o| o == id)
    }
}

/// A composite, multi-state object.
///
/// Children use component-local coordinates and are always primitives, so
/// components cannot nest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawInteractive", into = "RawInteractive")]
pub struct InteractiveComponent {
    pub base: ObjectBase,
    pub config: InteractionConfig,
    pub groups: Vec<ObjectGroup>,
    pub children: Vec<StaticObject>,
}

impl InteractiveComponent {
    /// An empty component with the default config for its type.
    pub fn new(interaction_type: InteractionType, width: f64, height: f64) -> Self {
        Self {
            base: ObjectBase::new(interaction_type.display_name(), width, height),
            config: InteractionConfig::default_for(interaction_type),
            groups: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn interaction_type(&self) -> InteractionType {
        self.config.interaction_type()
    }

    pub fn group(&self, role: &str) -> Option<&ObjectGroup> {
        self.groups.iter().find(|g| g.role == role)
    }

    pub fn group_mut(&mut self, role: &str) -> Option<&mut ObjectGroup> {
        self.groups.iter_mut().find(|g| g.role == role)
    }

    pub fn has_group(&self, role: &str) -> bool {
        self.group(role).is_some()
    }

    /// Role of the first group; the state shown when not being edited.
    pub fn default_role(&self) -> Option<&str> {
        self.groups.first().map(|g| g.role.as_str())
    }

    pub fn child(&self, id: &str) -> Option<&StaticObject> {
        self.children.iter().find(|c| c.id() == id)
    }

    pub fn child_mut(&mut self, id: &str) -> Option<&mut StaticObject> {
        self.children.iter_mut().find(|c| c.id() == id)
    }

    /// Children of a group, in group order. IDs with no matching child are
    /// skipped.
    pub fn group_objects(&self, role: &str) -> Vec<&StaticObject> {
        let Some(group) = self.group(role) else {
            return Vec::new();
        };
        group
            .object_ids
            .iter()
            .filter_map(|id| self.child(id))
            .collect()
    }

    /// `(role, id)` pairs for group entries with no matching child.
    pub fn dangling_group_ids(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        let child_ids: HashSet<&str> = self.children.iter().map(|c| c.id()).collect();
        self.groups.iter().flat_map(move |group| {
            let missing: Vec<(&str, &str)> = group
                .object_ids
                .iter()
                .filter(|id| !child_ids.contains(id.as_str()))
                .map(|id| (group.role.as_str(), id.as_str()))
                .collect();
            missing
        })
    }

    /// Append a child and register it with a group. Returns false if the
    /// group does not exist.
    pub fn add_child(&mut self, child: StaticObject, role: &str) -> bool {
        let id = child.id().to_string();
        let Some(group) = self.group_mut(role) else {
            return false;
        };
        group.object_ids.push(id);
        self.children.push(child);
        true
    }

    /// Remove children by ID, unregistering them from every group.
    /// Returns the number of children removed.
    pub fn remove_children(&mut self, ids: &[ObjectId]) -> usize {
        let before = self.children.len();
        self.children.retain(|c| !ids.iter().any(|id| id == c.id()));
        for group in &mut self.groups {
            group.object_ids.retain(|id| !ids.contains(id));
        }
        before - self.children.len()
    }

    /// Add an empty group. Tabs get a matching tab label.
    pub fn add_group(&mut self, role: impl Into<String>, label: impl Into<String>) -> bool {
        let group = ObjectGroup::new(role, label);
        if self.has_group(&group.role) {
            return false;
        }
        if let Some(tabs) = self.config.as_tabs_mut() {
            tabs.add_tab(group.label.clone());
        }
        self.groups.push(group);
        true
    }

    /// Remove a group and the children only it referenced. The last group
    /// cannot be removed.
    pub fn remove_group(&mut self, role: &str) -> bool {
        if self.groups.len() <= 1 {
            return false;
        }
        let Some(index) = self.groups.iter().position(|g| g.role == role) else {
            return false;
        };
        let removed = self.groups.remove(index);
        let orphans: Vec<ObjectId> = removed
            .object_ids
            .into_iter()
            .filter(|id| !self.groups.iter().any(|g| g.contains(id)))
            .collect();
        self.children.retain(|c| !orphans.iter().any(|id| id == c.id()));
        if let Some(tabs) = self.config.as_tabs_mut() {
            tabs.remove_tab(index);
        }
        true
    }

    /// Deep copy with a fresh component ID and fresh child IDs; groups are
    /// remapped to the new child IDs.
    pub fn duplicate(&self) -> Self {
        let mut copy = self.clone();
        copy.base.id = new_object_id();

        let mut remap: HashMap<ObjectId, ObjectId> = HashMap::with_capacity(copy.children.len());
        for child in &mut copy.children {
            let fresh = new_object_id();
            remap.insert(child.id().to_string(), fresh.clone());
            child.base_mut().id = fresh;
        }
        for group in &mut copy.groups {
            for id in &mut group.object_ids {
                if let Some(fresh) = remap.get(id) {
                    *id = fresh.clone();
                }
            }
        }
        copy
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
enum InteractiveTag {
    Interactive,
}

/// Wire form of [`InteractiveComponent`]: config kept as raw JSON until the
/// type is known.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInteractive {
    #[serde(rename = "type")]
    tag: InteractiveTag,
    #[serde(flatten)]
    base: ObjectBase,
    interaction_type: InteractionType,
    #[serde(default)]
    interaction_config: serde_json::Value,
    #[serde(default)]
    groups: Vec<ObjectGroup>,
    #[serde(default)]
    children: Vec<StaticObject>,
}

impl TryFrom<RawInteractive> for InteractiveComponent {
    type Error = InteractiveError;

    fn try_from(raw: RawInteractive) -> Result<Self, Self::Error> {
        let config_value = match raw.interaction_config {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            value => value,
        };
        Ok(Self {
            base: raw.base,
            config: InteractionConfig::from_value(raw.interaction_type, config_value)?,
            groups: raw.groups,
            children: raw.children,
        })
    }
}

impl From<InteractiveComponent> for RawInteractive {
    fn from(component: InteractiveComponent) -> Self {
        Self {
            tag: InteractiveTag::Interactive,
            interaction_type: component.interaction_type(),
            interaction_config: component.config.to_value(),
            base: component.base,
            groups: component.groups,
            children: component.children,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::create_text;
    use crate::shapes::DesignObject;

    #[test]
    fn test_serialized_shape() {
        let card = create_flip_card(100.0, 100.0);
        let json = serde_json::to_value(DesignObject::from(card.clone())).unwrap();
        assert_eq!(json["type"], "interactive");
        assert_eq!(json["interactionType"], "flip-card");
        assert_eq!(json["interactionConfig"]["flipDuration"], 600);
        assert_eq!(json["id"], card.base.id.as_str());
        assert_eq!(json["groups"][0]["role"], "front");
        assert!(json["groups"][0]["objectIds"].is_array());
    }

    #[test]
    fn test_deserialize_round_trip() {
        let quiz: DesignObject = create_quiz(0.0, 0.0).into();
        let json = serde_json::to_string(&quiz).unwrap();
        let back: DesignObject = serde_json::from_str(&json).unwrap();
        assert_eq!(back, quiz);
    }

    #[test]
    fn test_bad_config_is_rejected() {
        let raw = r#"{
            "type": "interactive", "id": "c", "x": 0, "y": 0, "width": 10, "height": 10,
            "interactionType": "quiz", "interactionConfig": {"options": "nope"}
        }"#;
        assert!(serde_json::from_str::<DesignObject>(raw).is_err());
    }

    #[test]
    fn test_group_objects_skips_dangling() {
        let mut card = create_flip_card(0.0, 0.0);
        let front_ids = card.group("front").unwrap().object_ids.clone();
        card.children.retain(|c| c.id() != front_ids[0]);

        let resolved = card.group_objects("front");
        assert_eq!(resolved.len(), front_ids.len() - 1);
        let dangling: Vec<_> = card.dangling_group_ids().collect();
        assert_eq!(dangling, vec![("front", front_ids[0].as_str())]);
    }

    #[test]
    fn test_add_and_remove_children() {
        let mut card = create_flip_card(0.0, 0.0);
        let text: StaticObject = create_text().into();
        let id = text.id().to_string();
        assert!(card.add_child(text.clone(), "back"));
        assert!(card.group("back").unwrap().contains(&id));
        assert!(!card.add_child(text, "missing"));

        assert_eq!(card.remove_children(&[id.clone()]), 1);
        assert!(card.child(&id).is_none());
        assert!(!card.group("back").unwrap().contains(&id));
        assert_eq!(card.dangling_group_ids().count(), 0);
    }

    #[test]
    fn test_remove_group_cascades() {
        let mut carousel = create_carousel(0.0, 0.0);
        let slide_ids = carousel.group("slide-2").unwrap().object_ids.clone();
        let children_before = carousel.children.len();

        assert!(carousel.remove_group("slide-2"));
        assert!(!carousel.has_group("slide-2"));
        assert_eq!(carousel.children.len(), children_before - slide_ids.len());
        assert_eq!(carousel.dangling_group_ids().count(), 0);
        assert!(!carousel.remove_group("slide-2"));
    }

    #[test]
    fn test_last_group_is_kept() {
        let mut entrance = create_entrance(0.0, 0.0);
        assert_eq!(entrance.groups.len(), 1);
        assert!(!entrance.remove_group("content"));
    }

    #[test]
    fn test_tabs_groups_track_labels() {
        let mut tabs = create_tabs(0.0, 0.0);
        assert!(tabs.add_group("tab-4", "Tab 4"));
        assert!(!tabs.add_group("tab-4", "again"));
        match &tabs.config {
            InteractionConfig::Tabs(c) => assert_eq!(c.tab_labels.len(), 4),
            other => panic!("unexpected config {other:?}"),
        }
        assert!(tabs.remove_group("tab-1"));
        match &tabs.config {
            InteractionConfig::Tabs(c) => {
                assert_eq!(c.tab_labels.len(), 3);
                assert_eq!(c.tab_labels[0], "Tab 2");
            }
            other => panic!("unexpected config {other:?}"),
        }
    }

    #[test]
    fn test_duplicate_remaps_children() {
        let card = create_flip_card(0.0, 0.0);
        let copy = card.duplicate();
        assert_ne!(copy.base.id, card.base.id);
        assert_eq!(copy.children.len(), card.children.len());
        for (a, b) in card.children.iter().zip(&copy.children) {
            assert_ne!(a.id(), b.id());
        }
        assert_eq!(copy.dangling_group_ids().count(), 0);
        assert_eq!(
            copy.group_objects("front").len(),
            card.group_objects("front").len()
        );
    }
}
