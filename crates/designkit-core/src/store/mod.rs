//! Editor store: the single source of truth for an open design.
//!
//! All document mutation goes through the command methods here. Each
//! content command records an undo snapshot, marks the store dirty and bumps
//! the revision. Commands on stale IDs are silent no-ops that return `false`.
//! Selection and tool changes are not undoable and do not dirty the store.

mod component;

use crate::align::{self, AlignEdge, DistributeAxis};
use crate::config::EditorConfig;
use crate::document::{Asset, CanvasConfig, DesignDocument, DOCUMENT_VERSION};
use crate::history::{DocumentSnapshot, History};
use crate::shapes::{DesignObject, MIN_OBJECT_SIZE, ObjectBase, ObjectId, ObjectPatch, ShapeTrait};
use crate::tools::ToolKind;
use kurbo::{Point, Rect};
use std::collections::{BTreeMap, HashSet};

#[cfg(not(target_arch = "wasm32"))]
use std::time::SystemTime;
#[cfg(target_arch = "wasm32")]
use web_time::SystemTime;

/// Default title for new designs.
pub const UNTITLED: &str = "Untitled design";

fn id_set(ids: &[ObjectId]) -> HashSet<&str> {
    ids.iter().map(String::as_str).collect()
}

/// The editor state.
#[derive(Debug, Clone)]
pub struct EditorStore {
    config: EditorConfig,
    design_id: Option<String>,
    title: String,
    canvas: CanvasConfig,
    objects: Vec<DesignObject>,
    assets: BTreeMap<String, Asset>,
    selected_ids: Vec<ObjectId>,
    active_tool: ToolKind,
    is_dirty: bool,
    is_saving: bool,
    last_saved_at: Option<SystemTime>,
    editing_component_id: Option<ObjectId>,
    active_group_role: Option<String>,
    history: History,
    revision: u64,
}

impl Default for EditorStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorStore {
    /// Create a blank editor with default configuration.
    pub fn new() -> Self {
        Self::with_config(EditorConfig::default())
    }

    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            history: History::new(config.history_limit),
            config,
            design_id: None,
            title: UNTITLED.to_string(),
            canvas: CanvasConfig::default(),
            objects: Vec::new(),
            assets: BTreeMap::new(),
            selected_ids: Vec::new(),
            active_tool: ToolKind::Select,
            is_dirty: false,
            is_saving: false,
            last_saved_at: None,
            editing_component_id: None,
            active_group_role: None,
            revision: 0,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn design_id(&self) -> Option<&str> {
        self.design_id.as_deref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Top-level objects, back to front.
    pub fn objects(&self) -> &[DesignObject] {
        &self.objects
    }

    pub fn assets(&self) -> &BTreeMap<String, Asset> {
        &self.assets
    }

    pub fn selected_ids(&self) -> &[ObjectId] {
        &self.selected_ids
    }

    pub fn active_tool(&self) -> ToolKind {
        self.active_tool
    }

    pub fn is_dirty(&self) -> bool {
        self.is_dirty
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn last_saved_at(&self) -> Option<SystemTime> {
        self.last_saved_at
    }

    pub fn editing_component_id(&self) -> Option<&str> {
        self.editing_component_id.as_deref()
    }

    pub fn active_group_role(&self) -> Option<&str> {
        self.active_group_role.as_deref()
    }

    /// Monotonic counter bumped on every content change, including undo/redo.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Find a top-level object by ID.
    pub fn find(&self, id: &str) -> Option<&DesignObject> {
        self.objects.iter().find(|o| o.id() == id)
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.objects.iter().position(|o| o.id() == id)
    }

    // --- Bookkeeping -------------------------------------------------------

    fn snapshot(&self) -> DocumentSnapshot {
        DocumentSnapshot::capture(&self.objects, &self.canvas, &self.title)
    }

    /// Record the pre-mutation state. Call only once a command is known to
    /// change something.
    fn checkpoint(&mut self) {
        let (objects, canvas, title) = (&self.objects, &self.canvas, &self.title);
        self.history
            .record(|| DocumentSnapshot::capture(objects, canvas, title));
    }

    /// Mark a content change.
    fn touch(&mut self) {
        self.is_dirty = true;
        self.revision += 1;
    }

    fn restore(&mut self, snapshot: DocumentSnapshot) {
        self.objects = snapshot.objects;
        self.canvas = snapshot.canvas;
        self.title = snapshot.title;
        self.touch();
        self.repair_scope();
    }

    /// Drop an editing scope whose component or group no longer exists, and
    /// prune the selection to the active scope.
    fn repair_scope(&mut self) {
        if let Some(id) = self.editing_component_id.clone() {
            let next_role = self
                .find(&id)
                .and_then(DesignObject::as_interactive)
                .map(|component| match self.active_group_role.as_deref() {
                    Some(role) if component.has_group(role) => Some(role.to_string()),
                    _ => component.default_role().map(str::to_string),
                });
            match next_role {
                Some(role) => self.active_group_role = role,
                None => {
                    self.editing_component_id = None;
                    self.active_group_role = None;
                }
            }
        }
        self.prune_selection();
    }

    fn prune_selection(&mut self) {
        let scope: HashSet<String> = self.scope_ids().into_iter().map(str::to_string).collect();
        self.selected_ids.retain(|id| scope.contains(id));
    }

    /// IDs in the active editing scope: a component's children while one is
    /// being edited, otherwise the top-level objects.
    fn scope_ids(&self) -> Vec<&str> {
        match self.editing_component() {
            Some(component) => component.children.iter().map(|c| c.id()).collect(),
            None => self.objects.iter().map(|o| o.id()).collect(),
        }
    }

    fn scoped_base_mut(&mut self, id: &str) -> Option<&mut ObjectBase> {
        if self.editing_component_id.is_some() {
            self.editing_component_mut()?
                .child_mut(id)
                .map(ShapeTrait::base_mut)
        } else {
            self.objects
                .iter_mut()
                .find(|o| o.id() == id)
                .map(ShapeTrait::base_mut)
        }
    }

    /// Bounds of the given IDs within the active scope, in scope order.
    pub fn scoped_bounds(&self, ids: &[ObjectId]) -> Vec<(ObjectId, Rect)> {
        let wanted = id_set(ids);
        match self.editing_component() {
            Some(component) => component
                .children
                .iter()
                .filter(|c| wanted.contains(c.id()))
                .map(|c| (c.id().to_string(), c.bounds()))
                .collect(),
            None => self
                .objects
                .iter()
                .filter(|o| wanted.contains(o.id()))
                .map(|o| (o.id().to_string(), o.bounds()))
                .collect(),
        }
    }

    /// The frame objects in the active scope live in: the canvas, or the
    /// edited component's local box.
    pub fn scope_frame(&self) -> Rect {
        match self.editing_component() {
            Some(component) => Rect::new(0.0, 0.0, component.base.width, component.base.height),
            None => self.canvas.bounds(),
        }
    }

    /// Move objects in the active scope. One undo entry for the whole move;
    /// no-op if nothing actually moves.
    fn move_scoped(&mut self, moves: Vec<(ObjectId, Point)>) -> bool {
        let current = self.scoped_bounds(&moves.iter().map(|(id, _)| id.clone()).collect::<Vec<_>>());
        let changed: Vec<(ObjectId, Point)> = moves
            .into_iter()
            .filter(|(id, to)| {
                current
                    .iter()
                    .any(|(cid, r)| cid == id && (r.x0 != to.x || r.y0 != to.y))
            })
            .collect();
        if changed.is_empty() {
            return false;
        }

        self.checkpoint();
        for (id, to) in changed {
            if let Some(base) = self.scoped_base_mut(&id) {
                base.x = to.x;
                base.y = to.y;
            }
        }
        self.touch();
        true
    }

    // --- Document ----------------------------------------------------------

    /// Replace the entire state from a persisted document. Selection, tool,
    /// editing scope, flags and history are reset.
    pub fn load_document(
        &mut self,
        design_id: impl Into<String>,
        title: impl Into<String>,
        document: DesignDocument,
    ) {
        let design_id = design_id.into();
        log::info!(
            "Loading design {} ({} objects, {} assets)",
            design_id,
            document.objects.len(),
            document.assets.len()
        );
        for issue in document.integrity_issues() {
            log::warn!("Design {design_id}: {issue:?}");
        }

        *self = Self {
            design_id: Some(design_id),
            title: title.into(),
            canvas: document.canvas,
            objects: document.objects,
            assets: document.assets,
            ..Self::with_config(self.config.clone())
        };
    }

    /// The persisted form of the current document.
    pub fn get_document(&self) -> DesignDocument {
        DesignDocument {
            version: DOCUMENT_VERSION,
            canvas: self.canvas.clone(),
            objects: self.objects.clone(),
            assets: self.assets.clone(),
        }
    }

    /// Return to the blank initial state. Safe to call at any time.
    pub fn reset_editor(&mut self) {
        log::debug!("Resetting editor");
        *self = Self::with_config(self.config.clone());
    }

    pub fn set_title(&mut self, title: impl Into<String>) -> bool {
        let title = title.into();
        if title == self.title {
            return false;
        }
        self.checkpoint();
        self.title = title;
        self.touch();
        true
    }

    pub fn set_canvas_size(&mut self, width: f64, height: f64) -> bool {
        let (width, height) = (width.max(MIN_OBJECT_SIZE), height.max(MIN_OBJECT_SIZE));
        if width == self.canvas.width && height == self.canvas.height {
            return false;
        }
        self.checkpoint();
        self.canvas.width = width;
        self.canvas.height = height;
        self.touch();
        true
    }

    pub fn set_canvas_background(&mut self, background: impl Into<String>) -> bool {
        let background = background.into();
        if background == self.canvas.background {
            return false;
        }
        self.checkpoint();
        self.canvas.background = background;
        self.touch();
        true
    }

    /// Register an uploaded asset.
    ///
    /// Asset registration is not undoable: assets live outside the undo
    /// snapshots, so `undo` never removes one. The store is still marked
    /// dirty so the asset gets persisted.
    pub fn add_asset(&mut self, asset_id: impl Into<String>, asset: Asset) {
        self.assets.insert(asset_id.into(), asset);
        self.touch();
    }

    // --- Objects -----------------------------------------------------------

    /// Append an object and select it alone. Leaves any component editing
    /// scope, since the new object is top-level.
    pub fn add_object(&mut self, object: impl Into<DesignObject>) {
        let object = object.into();
        self.leave_component();
        self.checkpoint();
        self.selected_ids = vec![object.id().to_string()];
        self.objects.push(object);
        self.touch();
    }

    /// Append several objects (a block template) as one undo step and
    /// select them all.
    pub fn add_objects(&mut self, objects: Vec<DesignObject>) -> bool {
        if objects.is_empty() {
            return false;
        }
        self.leave_component();
        self.checkpoint();
        self.selected_ids = objects.iter().map(|o| o.id().to_string()).collect();
        self.objects.extend(objects);
        self.touch();
        true
    }

    /// Shallow-merge a patch into a top-level object.
    pub fn update_object(&mut self, id: &str, patch: &ObjectPatch) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if patch.is_empty() {
            return false;
        }
        self.checkpoint();
        self.objects[index].apply_patch(patch);
        self.touch();
        true
    }

    /// Update an object in the active scope.
    pub fn update_scoped(&mut self, id: &str, patch: &ObjectPatch) -> bool {
        if self.editing_component_id.is_some() {
            self.update_child_object(id, patch)
        } else {
            self.update_object(id, patch)
        }
    }

    /// Remove top-level objects, pruning them from the selection.
    pub fn delete_objects(&mut self, ids: &[ObjectId]) -> bool {
        let doomed = id_set(ids);
        if !self.objects.iter().any(|o| doomed.contains(o.id())) {
            return false;
        }
        self.checkpoint();
        self.objects.retain(|o| !doomed.contains(o.id()));
        self.touch();
        self.repair_scope();
        true
    }

    /// Delete the selection in the active scope.
    pub fn delete_selection(&mut self) -> bool {
        let ids = self.selected_ids.clone();
        if self.editing_component_id.is_some() {
            self.delete_child_objects(&ids)
        } else {
            self.delete_objects(&ids)
        }
    }

    /// Move an object to an absolute index (clamped to the end).
    pub fn reorder_object(&mut self, id: &str, new_index: usize) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        let target = new_index.min(self.objects.len() - 1);
        if target == index {
            return false;
        }
        self.checkpoint();
        let object = self.objects.remove(index);
        self.objects.insert(target, object);
        self.touch();
        true
    }

    pub fn bring_to_front(&mut self, id: &str) -> bool {
        self.reorder_object(id, usize::MAX)
    }

    pub fn send_to_back(&mut self, id: &str) -> bool {
        self.reorder_object(id, 0)
    }

    pub fn bring_forward(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) => self.reorder_object(id, index + 1),
            None => false,
        }
    }

    pub fn send_backward(&mut self, id: &str) -> bool {
        match self.index_of(id) {
            Some(index) if index > 0 => self.reorder_object(id, index - 1),
            _ => false,
        }
    }

    /// Deep-copy top-level objects with fresh IDs, offset and a `" copy"`
    /// name suffix. The copies become the selection.
    pub fn duplicate_objects(&mut self, ids: &[ObjectId]) -> bool {
        let wanted = id_set(ids);
        let offset = self.config.duplicate_offset;
        let copies: Vec<DesignObject> = self
            .objects
            .iter()
            .filter(|o| wanted.contains(o.id()))
            .map(|o| {
                let mut copy = o.duplicate();
                offset_copy(copy.base_mut(), offset);
                copy
            })
            .collect();
        if copies.is_empty() {
            return false;
        }

        self.checkpoint();
        self.selected_ids = copies.iter().map(|c| c.id().to_string()).collect();
        self.objects.extend(copies);
        self.touch();
        true
    }

    /// Duplicate the selection in the active scope.
    pub fn duplicate_selection(&mut self) -> bool {
        let ids = self.selected_ids.clone();
        if self.editing_component_id.is_some() {
            self.duplicate_child_objects(&ids)
        } else {
            self.duplicate_objects(&ids)
        }
    }

    /// Align objects in the active scope. One object aligns to the scope's
    /// frame; several align to their union.
    pub fn align_objects(&mut self, ids: &[ObjectId], edge: AlignEdge) -> bool {
        let bounds = self.scoped_bounds(ids);
        let rects: Vec<Rect> = bounds.iter().map(|(_, r)| *r).collect();
        let Some(positions) = align::align(&rects, edge, self.scope_frame()) else {
            return false;
        };
        let moves = bounds.into_iter().map(|(id, _)| id).zip(positions).collect();
        self.move_scoped(moves)
    }

    /// Evenly space three or more objects in the active scope.
    pub fn distribute_objects(&mut self, ids: &[ObjectId], axis: DistributeAxis) -> bool {
        let bounds = self.scoped_bounds(ids);
        let rects: Vec<Rect> = bounds.iter().map(|(_, r)| *r).collect();
        let Some(positions) = align::distribute(&rects, axis) else {
            return false;
        };
        let moves = bounds.into_iter().map(|(id, _)| id).zip(positions).collect();
        self.move_scoped(moves)
    }

    // --- Selection and tools -----------------------------------------------

    /// Select a single object in the active scope.
    pub fn select(&mut self, id: &str) -> bool {
        if !self.scope_ids().contains(&id) {
            return false;
        }
        self.selected_ids = vec![id.to_string()];
        true
    }

    /// Replace the selection. IDs outside the active scope are ignored.
    pub fn set_selection(&mut self, ids: Vec<ObjectId>) {
        self.selected_ids = ids;
        self.prune_selection();
    }

    pub fn toggle_selection(&mut self, id: &str) -> bool {
        if let Some(pos) = self.selected_ids.iter().position(|s| s == id) {
            self.selected_ids.remove(pos);
            return true;
        }
        if !self.scope_ids().contains(&id) {
            return false;
        }
        self.selected_ids.push(id.to_string());
        true
    }

    pub fn clear_selection(&mut self) {
        self.selected_ids.clear();
    }

    /// Select everything in the active scope: all top-level objects, or the
    /// active group's children while editing a component.
    pub fn select_all(&mut self) {
        self.selected_ids = match (self.editing_component(), self.active_group_role.as_deref()) {
            (Some(component), Some(role)) => component
                .group_objects(role)
                .into_iter()
                .map(|c| c.id().to_string())
                .collect(),
            (Some(component), None) => component
                .children
                .iter()
                .map(|c| c.id().to_string())
                .collect(),
            (None, _) => self.objects.iter().map(|o| o.id().to_string()).collect(),
        };
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected_ids.iter().any(|s| s == id)
    }

    pub fn set_tool(&mut self, tool: ToolKind) {
        self.active_tool = tool;
    }

    // --- History -----------------------------------------------------------

    /// Group subsequent commands into one undo entry until
    /// [`end_transaction`](Self::end_transaction). Transactions nest.
    pub fn begin_transaction(&mut self) {
        let (objects, canvas, title) = (&self.objects, &self.canvas, &self.title);
        self.history
            .begin_batch(|| DocumentSnapshot::capture(objects, canvas, title));
    }

    /// Close a transaction. Returns whether an undo entry was recorded.
    pub fn end_transaction(&mut self) -> bool {
        self.history.end_batch()
    }

    /// Restore the previous snapshot. An open transaction is closed first.
    pub fn undo(&mut self) -> bool {
        while self.history.is_batching() {
            self.history.end_batch();
        }
        if !self.history.can_undo() {
            return false;
        }
        let current = self.snapshot();
        match self.history.undo(current) {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    /// Restore the next snapshot.
    pub fn redo(&mut self) -> bool {
        if self.history.is_batching() || !self.history.can_redo() {
            return false;
        }
        let current = self.snapshot();
        match self.history.redo(current) {
            Some(snapshot) => {
                self.restore(snapshot);
                true
            }
            None => false,
        }
    }

    // --- Save status -------------------------------------------------------

    pub fn set_saving(&mut self, saving: bool) {
        self.is_saving = saving;
    }

    /// Record a successful save.
    pub fn mark_saved(&mut self, at: SystemTime) {
        self.is_dirty = false;
        self.is_saving = false;
        self.last_saved_at = Some(at);
    }
}

fn offset_copy(base: &mut ObjectBase, offset: f64) {
    base.x += offset;
    base.y += offset;
    base.name = format!("{} copy", base.name);
}
