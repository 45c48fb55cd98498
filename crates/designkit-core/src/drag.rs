//! Pointer drag sessions.
//!
//! A session is created on pointer-down, fed pointer positions every frame
//! and consumed on pointer-up. Frames never touch the store: they only
//! compute snapped positions and transient guides. The commit on
//! [`DragSession::end`] is a single undo entry.

use crate::shapes::{ObjectBase, ObjectId, ObjectPatch, ShapeTrait};
use crate::snap::{Guide, SnapMode, magnetic_snap_with_threshold, snap_to_grid};
use crate::store::EditorStore;
use kurbo::{Point, Rect, Vec2};

/// An in-progress move of one or more objects.
#[derive(Debug, Clone)]
pub struct DragSession {
    start_pointer: Point,
    /// Starting bounds of every dragged object.
    origins: Vec<(ObjectId, Rect)>,
    /// Bounds of visible objects that are not being dragged.
    others: Vec<Rect>,
    frame: Rect,
    snap_mode: SnapMode,
    grid_size: f64,
    snap_threshold: f64,
    offset: Vec2,
    guides: Vec<Guide>,
}

fn scope_bases(store: &EditorStore) -> Vec<&ObjectBase> {
    match store.editing_component() {
        Some(component) => component.children.iter().map(ShapeTrait::base).collect(),
        None => store.objects().iter().map(ShapeTrait::base).collect(),
    }
}

impl DragSession {
    /// Start dragging `ids` from `pointer`. Locked, hidden and unknown objects
    /// are left behind; returns `None` if nothing remains to drag.
    pub fn begin(store: &EditorStore, ids: &[ObjectId], pointer: Point) -> Option<Self> {
        let mut origins = Vec::new();
        let mut others = Vec::new();
        for base in scope_bases(store) {
            let dragged = ids.iter().any(|id| *id == base.id);
            if dragged && !base.locked && base.visible {
                origins.push((base.id.clone(), base.bounds()));
            } else if !dragged && base.visible {
                others.push(base.bounds());
            }
        }
        if origins.is_empty() {
            return None;
        }

        let config = store.config();
        log::debug!("Drag started with {} object(s)", origins.len());
        Some(Self {
            start_pointer: pointer,
            origins,
            others,
            frame: store.scope_frame(),
            snap_mode: config.snap_mode,
            grid_size: config.grid_size,
            snap_threshold: config.snap_threshold,
            offset: Vec2::ZERO,
            guides: Vec::new(),
        })
    }

    /// Override the snap mode for the rest of the drag (e.g. while a
    /// modifier key is held).
    pub fn set_snap_mode(&mut self, mode: SnapMode) {
        self.snap_mode = mode;
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.origins.iter().map(|(id, _)| id.as_str())
    }

    /// Guides for the current frame.
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    /// Net offset applied to every dragged object.
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Current top-left position of every dragged object.
    pub fn positions(&self) -> Vec<(ObjectId, Point)> {
        self.origins
            .iter()
            .map(|(id, r)| (id.clone(), r.origin() + self.offset))
            .collect()
    }

    /// Starting bounds of the whole dragged set.
    fn origin_bounds(&self) -> Rect {
        self.origins
            .iter()
            .map(|(_, r)| *r)
            .reduce(|acc, r| acc.union(r))
            .unwrap_or_default()
    }

    /// Feed a pointer position. The dragged set moves as one unit; snapping
    /// applies to its combined bounds.
    pub fn update(&mut self, pointer: Point) -> &[Guide] {
        let raw = pointer - self.start_pointer;
        let moved = self.origin_bounds() + raw;
        let mut target = moved.origin();
        self.guides.clear();

        let (mut snapped_x, mut snapped_y) = (false, false);
        if self.snap_mode.snaps_magnetically() {
            let snap = magnetic_snap_with_threshold(
                moved,
                &self.others,
                self.frame.width(),
                self.frame.height(),
                self.snap_threshold,
            );
            target = Point::new(snap.x, snap.y);
            snapped_x = snap.snapped_x;
            snapped_y = snap.snapped_y;
            self.guides = snap.guides;
        }
        if self.snap_mode.snaps_to_grid() {
            let grid = snap_to_grid(target.x, target.y, self.grid_size);
            if !snapped_x {
                target.x = grid.x;
            }
            if !snapped_y {
                target.y = grid.y;
            }
        }

        self.offset = target - self.origin_bounds().origin();
        &self.guides
    }

    /// Commit the drag as one undo entry. Returns whether anything moved.
    pub fn end(self, store: &mut EditorStore) -> bool {
        if self.offset == Vec2::ZERO {
            return false;
        }
        store.begin_transaction();
        let mut moved = false;
        for (id, position) in self.positions() {
            moved |= store.update_scoped(&id, &ObjectPatch::position(position.x, position.y));
        }
        store.end_transaction();
        log::debug!("Drag committed, offset {:?}", self.offset);
        moved
    }

    /// Abandon the drag. The store is untouched.
    pub fn cancel(self) {
        log::debug!("Drag cancelled");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EditorConfig;
    use crate::document::DesignDocument;
    use crate::factory::create_rect;
    use crate::shapes::DesignObject;
    use crate::snap::GuideOrientation;

    fn store_with(config: EditorConfig, objects: Vec<DesignObject>) -> EditorStore {
        let mut store = EditorStore::with_config(config);
        store.load_document(
            "design-1",
            "Drag",
            DesignDocument {
                objects,
                ..DesignDocument::default()
            },
        );
        store
    }

    fn config(mode: SnapMode) -> EditorConfig {
        EditorConfig {
            snap_mode: mode,
            ..EditorConfig::default()
        }
    }

    #[test]
    fn test_frames_do_not_touch_store() {
        let rect = create_rect().at(10.0, 10.0).sized(50.0, 50.0);
        let id = rect.base.id.clone();
        let store = store_with(config(SnapMode::None), vec![rect.into()]);

        let mut drag = DragSession::begin(&store, &[id.clone()], Point::new(20.0, 20.0)).unwrap();
        for step in 1..=30 {
            drag.update(Point::new(20.0 + f64::from(step), 20.0));
        }
        assert_eq!(store.find(&id).unwrap().base().x, 10.0);
        assert!(!store.can_undo());
        assert_eq!(drag.positions(), vec![(id, Point::new(40.0, 10.0))]);
    }

    #[test]
    fn test_end_commits_single_entry() {
        let rect = create_rect().at(10.0, 10.0).sized(50.0, 50.0);
        let id = rect.base.id.clone();
        let mut store = store_with(config(SnapMode::None), vec![rect.into()]);

        let mut drag = DragSession::begin(&store, &[id.clone()], Point::ZERO).unwrap();
        drag.update(Point::new(5.0, 5.0));
        drag.update(Point::new(33.0, 47.0));
        assert!(drag.end(&mut store));

        let base = store.find(&id).unwrap().base();
        assert_eq!((base.x, base.y), (43.0, 57.0));
        assert_eq!(store.history().undo_len(), 1);
        assert!(store.undo());
        assert_eq!(store.find(&id).unwrap().base().x, 10.0);
    }

    #[test]
    fn test_zero_offset_commits_nothing() {
        let rect = create_rect();
        let id = rect.base.id.clone();
        let mut store = store_with(config(SnapMode::None), vec![rect.into()]);
        let drag = DragSession::begin(&store, &[id], Point::ZERO).unwrap();
        assert!(!drag.end(&mut store));
        assert!(!store.can_undo());
    }

    #[test]
    fn test_magnetic_snap_emits_guides() {
        let anchor = create_rect().at(200.0, 400.0).sized(100.0, 100.0);
        let moving = create_rect().at(0.0, 100.0).sized(10.0, 10.0);
        let id = moving.base.id.clone();
        let store = store_with(config(SnapMode::Magnetic), vec![anchor.into(), moving.into()]);

        let mut drag = DragSession::begin(&store, &[id.clone()], Point::ZERO).unwrap();
        let guides = drag.update(Point::new(207.0, 3.0)).to_vec();
        assert_eq!(guides.len(), 1);
        assert_eq!(guides[0].orientation, GuideOrientation::Vertical);
        assert_eq!(guides[0].position, 200.0);
        assert_eq!(drag.positions(), vec![(id, Point::new(200.0, 103.0))]);

        drag.update(Point::new(220.0, 3.0));
        assert!(drag.guides().is_empty());
    }

    #[test]
    fn test_grid_snap() {
        let rect = create_rect().at(0.0, 0.0).sized(30.0, 30.0);
        let id = rect.base.id.clone();
        let store = store_with(config(SnapMode::Grid), vec![rect.into()]);

        let mut drag = DragSession::begin(&store, &[id.clone()], Point::ZERO).unwrap();
        drag.update(Point::new(27.0, 52.0));
        assert_eq!(drag.positions(), vec![(id, Point::new(20.0, 60.0))]);
        assert!(drag.guides().is_empty());
    }

    #[test]
    fn test_locked_objects_stay_put() {
        let mut locked = create_rect().at(10.0, 10.0);
        locked.base.locked = true;
        let free = create_rect().at(100.0, 10.0);
        let (locked_id, free_id) = (locked.base.id.clone(), free.base.id.clone());
        let mut store = store_with(config(SnapMode::None), vec![locked.into(), free.into()]);

        assert!(DragSession::begin(&store, &[locked_id.clone()], Point::ZERO).is_none());

        let mut drag =
            DragSession::begin(&store, &[locked_id.clone(), free_id.clone()], Point::ZERO).unwrap();
        assert_eq!(drag.ids().collect::<Vec<_>>(), vec![free_id.as_str()]);
        drag.update(Point::new(0.0, 15.0));
        assert!(drag.end(&mut store));
        assert_eq!(store.find(&locked_id).unwrap().base().y, 10.0);
        assert_eq!(store.find(&free_id).unwrap().base().y, 25.0);
    }

    #[test]
    fn test_multi_object_drag_moves_together() {
        let a = create_rect().at(10.0, 10.0).sized(20.0, 20.0);
        let b = create_rect().at(50.0, 70.0).sized(20.0, 20.0);
        let ids = vec![a.base.id.clone(), b.base.id.clone()];
        let mut store = store_with(config(SnapMode::None), vec![a.into(), b.into()]);

        let mut drag = DragSession::begin(&store, &ids, Point::ZERO).unwrap();
        drag.update(Point::new(5.0, -5.0));
        assert!(drag.end(&mut store));
        assert_eq!(store.history().undo_len(), 1);
        let moved: Vec<(f64, f64)> = store
            .objects()
            .iter()
            .map(|o| (o.base().x, o.base().y))
            .collect();
        assert_eq!(moved, vec![(15.0, 5.0), (55.0, 65.0)]);
    }

    #[test]
    fn test_reset_mid_drag_is_harmless() {
        let rect = create_rect();
        let id = rect.base.id.clone();
        let mut store = store_with(config(SnapMode::None), vec![rect.into()]);
        let mut drag = DragSession::begin(&store, &[id], Point::ZERO).unwrap();
        drag.update(Point::new(10.0, 10.0));
        store.reset_editor();
        assert!(!drag.end(&mut store));
        assert!(!store.can_undo());
    }
}
