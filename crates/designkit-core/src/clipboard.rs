//! Copy/paste service.
//!
//! The clipboard lives outside the [`EditorStore`] and is never part of undo
//! history. Pasting is an ordinary store command and is undoable.

use crate::shapes::{DesignObject, ShapeTrait, StaticObject};
use crate::store::EditorStore;

/// Holds copied objects between copy and paste.
#[derive(Debug, Clone, Default)]
pub struct Clipboard {
    objects: Vec<DesignObject>,
    /// Pastes since the last copy; each paste lands one offset step further.
    paste_count: u32,
}

impl Clipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn objects(&self) -> &[DesignObject] {
        &self.objects
    }

    pub fn clear(&mut self) {
        self.objects.clear();
        self.paste_count = 0;
    }

    /// Copy the selection in the store's active scope. Returns the number of
    /// objects copied; an empty selection leaves the clipboard untouched.
    pub fn copy(&mut self, store: &EditorStore) -> usize {
        let selected = store.selected_ids();
        let copied: Vec<DesignObject> = match store.editing_component() {
            Some(component) => component
                .children
                .iter()
                .filter(|c| selected.iter().any(|id| id == c.id()))
                .cloned()
                .map(DesignObject::from)
                .collect(),
            None => store
                .objects()
                .iter()
                .filter(|o| selected.iter().any(|id| id == o.id()))
                .cloned()
                .collect(),
        };
        if copied.is_empty() {
            return 0;
        }

        log::debug!("Copied {} object(s)", copied.len());
        self.objects = copied;
        self.paste_count = 0;
        self.objects.len()
    }

    /// Copy the selection, then delete it from the store.
    pub fn cut(&mut self, store: &mut EditorStore) -> usize {
        let copied = self.copy(store);
        if copied > 0 {
            store.delete_selection();
        }
        copied
    }

    /// Paste fresh copies into the store's active scope as one undo step.
    /// The pasted objects become the selection.
    ///
    /// While a component is being edited, copies join its active group and
    /// interactive components on the clipboard are skipped.
    pub fn paste(&mut self, store: &mut EditorStore) -> bool {
        if self.objects.is_empty() {
            return false;
        }
        let offset = store.config().paste_offset * f64::from(self.paste_count + 1);
        let copies: Vec<DesignObject> = self
            .objects
            .iter()
            .map(|object| {
                let mut copy = object.duplicate();
                let base = copy.base_mut();
                base.x += offset;
                base.y += offset;
                copy
            })
            .collect();

        let pasted = if store.is_editing_component() {
            paste_children(store, copies)
        } else {
            store.add_objects(copies)
        };
        if pasted {
            self.paste_count += 1;
        }
        pasted
    }
}

fn paste_children(store: &mut EditorStore, copies: Vec<DesignObject>) -> bool {
    let children: Vec<StaticObject> = copies
        .into_iter()
        .filter_map(|object| match object {
            DesignObject::Shape(shape) => Some(shape),
            DesignObject::Interactive(_) => None,
        })
        .collect();
    if children.is_empty() {
        return false;
    }

    let ids: Vec<String> = children.iter().map(|c| c.id().to_string()).collect();
    store.begin_transaction();
    let mut pasted = false;
    for child in children {
        pasted |= store.add_child_object(child);
    }
    store.end_transaction();
    if pasted {
        store.set_selection(ids);
    }
    pasted
}
