//! Interactive component editing.
//!
//! While a component is being edited the store's active scope is that
//! component's children, and one of its groups is active. New children join
//! the active group.

use super::{EditorStore, id_set, offset_copy};
use crate::interactive::{InteractionConfig, InteractiveComponent};
use crate::shapes::{DesignObject, ObjectId, ObjectPatch, ShapeTrait, StaticObject};

impl EditorStore {
    /// The component currently being edited.
    pub fn editing_component(&self) -> Option<&InteractiveComponent> {
        let id = self.editing_component_id.as_deref()?;
        self.find(id).and_then(DesignObject::as_interactive)
    }

    pub(super) fn editing_component_mut(&mut self) -> Option<&mut InteractiveComponent> {
        let id = self.editing_component_id.as_deref()?;
        self.objects
            .iter_mut()
            .find(|o| o.id() == id)
            .and_then(DesignObject::as_interactive_mut)
    }

    pub fn is_editing_component(&self) -> bool {
        self.editing_component_id.is_some()
    }

    /// Enter a component's editing scope with `initial_role` active.
    pub fn enter_component(&mut self, component_id: &str, initial_role: &str) -> bool {
        let valid = self
            .find(component_id)
            .and_then(DesignObject::as_interactive)
            .is_some_and(|c| c.has_group(initial_role));
        if !valid {
            return false;
        }
        log::debug!("Editing component {component_id} ({initial_role})");
        self.editing_component_id = Some(component_id.to_string());
        self.active_group_role = Some(initial_role.to_string());
        self.selected_ids.clear();
        true
    }

    /// Change the active group. Nothing else changes.
    pub fn switch_group(&mut self, role: &str) -> bool {
        if !self.editing_component().is_some_and(|c| c.has_group(role)) {
            return false;
        }
        self.active_group_role = Some(role.to_string());
        true
    }

    /// Leave the editing scope, selecting the component itself.
    pub fn exit_component(&mut self) -> bool {
        let Some(id) = self.editing_component_id.take() else {
            return false;
        };
        self.active_group_role = None;
        self.selected_ids = vec![id];
        self.prune_selection();
        true
    }

    /// Drop the editing scope and its selection, if any.
    pub(super) fn leave_component(&mut self) {
        if self.editing_component_id.take().is_some() {
            self.active_group_role = None;
            self.selected_ids.clear();
        }
    }

    /// Apply `edit` to a copy of a component and commit it if it reports a
    /// change. One undo step per call.
    fn edit_component(
        &mut self,
        component_id: &str,
        edit: impl FnOnce(&mut InteractiveComponent) -> bool,
    ) -> bool {
        let Some(component) = self.find(component_id).and_then(DesignObject::as_interactive) else {
            return false;
        };
        let mut edited = component.clone();
        if !edit(&mut edited) || edited == *component {
            return false;
        }

        self.checkpoint();
        if let Some(slot) = self.objects.iter_mut().find(|o| o.id() == component_id) {
            *slot = DesignObject::Interactive(edited);
        }
        self.touch();
        self.repair_scope();
        true
    }

    fn edit_editing_component(
        &mut self,
        edit: impl FnOnce(&mut InteractiveComponent) -> bool,
    ) -> bool {
        match self.editing_component_id.clone() {
            Some(id) => self.edit_component(&id, edit),
            None => false,
        }
    }

    /// Add a child to the edited component's active group and select it.
    pub fn add_child_object(&mut self, child: impl Into<StaticObject>) -> bool {
        let child = child.into();
        let child_id = child.id().to_string();
        let Some(role) = self.active_group_role.clone() else {
            return false;
        };
        let added = self.edit_editing_component(|component| component.add_child(child, &role));
        if added {
            self.selected_ids = vec![child_id];
        }
        added
    }

    /// Shallow-merge a patch into a child of the edited component.
    pub fn update_child_object(&mut self, id: &str, patch: &ObjectPatch) -> bool {
        if patch.is_empty() {
            return false;
        }
        self.edit_editing_component(|component| match component.child_mut(id) {
            Some(child) => {
                child.apply_patch(patch);
                true
            }
            None => false,
        })
    }

    /// Remove children of the edited component, unregistering them from
    /// every group.
    pub fn delete_child_objects(&mut self, ids: &[ObjectId]) -> bool {
        self.edit_editing_component(|component| component.remove_children(ids) > 0)
    }

    /// Duplicate children of the edited component. Each copy joins the
    /// groups its original belongs to; the copies become the selection.
    pub fn duplicate_child_objects(&mut self, ids: &[ObjectId]) -> bool {
        let wanted = id_set(ids);
        let offset = self.config.duplicate_offset;
        let mut copy_ids = Vec::new();

        let duplicated = self.edit_editing_component(|component| {
            let copies: Vec<(ObjectId, StaticObject)> = component
                .children
                .iter()
                .filter(|c| wanted.contains(c.id()))
                .map(|c| {
                    let mut copy = c.duplicate();
                    offset_copy(copy.base_mut(), offset);
                    (c.id().to_string(), copy)
                })
                .collect();

            for (original, copy) in copies {
                let copy_id = copy.id().to_string();
                for group in &mut component.groups {
                    if group.contains(&original) {
                        group.object_ids.push(copy_id.clone());
                    }
                }
                component.children.push(copy);
                copy_ids.push(copy_id);
            }
            !copy_ids.is_empty()
        });

        if duplicated {
            self.selected_ids = copy_ids;
        }
        duplicated
    }

    pub fn add_component_group(
        &mut self,
        component_id: &str,
        role: &str,
        label: &str,
    ) -> bool {
        self.edit_component(component_id, |component| component.add_group(role, label))
    }

    /// Remove a group and cascade-remove the children only it referenced.
    /// If it was the active group, the component's first group becomes active.
    pub fn remove_component_group(&mut self, component_id: &str, role: &str) -> bool {
        self.edit_component(component_id, |component| component.remove_group(role))
    }

    /// Replace a component's configuration. The interaction type cannot change.
    pub fn update_interaction_config(
        &mut self,
        component_id: &str,
        config: InteractionConfig,
    ) -> bool {
        self.edit_component(component_id, |component| {
            if config.interaction_type() != component.interaction_type() {
                log::warn!(
                    "Refusing {} config for {} component {}",
                    config.interaction_type().as_str(),
                    component.interaction_type().as_str(),
                    component.base.id
                );
                return false;
            }
            component.config = config;
            component.config.normalize();
            true
        })
    }

    pub fn add_quiz_option(&mut self, component_id: &str, text: &str) -> bool {
        self.edit_component(component_id, |component| match component.config.as_quiz_mut() {
            Some(quiz) => {
                quiz.add_option(text);
                true
            }
            None => false,
        })
    }

    /// Remove a quiz option, keeping `correctIndex` valid.
    pub fn remove_quiz_option(&mut self, component_id: &str, index: usize) -> bool {
        self.edit_component(component_id, |component| {
            component
                .config
                .as_quiz_mut()
                .is_some_and(|quiz| quiz.remove_option(index))
        })
    }

    pub fn set_quiz_correct_index(&mut self, component_id: &str, index: usize) -> bool {
        self.edit_component(component_id, |component| match component.config.as_quiz_mut() {
            Some(quiz) => {
                quiz.set_correct_index(index);
                true
            }
            None => false,
        })
    }

    /// Set the initially active tab, clamped to the last tab.
    pub fn set_active_tab(&mut self, component_id: &str, index: usize) -> bool {
        self.edit_component(component_id, |component| match component.config.as_tabs_mut() {
            Some(tabs) => {
                tabs.set_active_tab(index);
                true
            }
            None => false,
        })
    }
}
