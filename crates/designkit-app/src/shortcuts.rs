//! Keyboard shortcut registry and dispatch into store commands.

use designkit_core::{Clipboard, EditorStore, ToolKind};

/// What a shortcut does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    SelectAll,
    Undo,
    Redo,
    Duplicate,
    Copy,
    Cut,
    Paste,
    Delete,
    /// Clear the selection and return to the select tool.
    Cancel,
    Tool(ToolKind),
}

/// A keyboard shortcut definition. `ctrl` means Cmd on macOS.
#[derive(Debug, Clone)]
pub struct Shortcut {
    pub key: &'static str,
    pub ctrl: bool,
    pub shift: bool,
    pub action: ShortcutAction,
    pub description: &'static str,
}

impl Shortcut {
    pub const fn new(
        key: &'static str,
        ctrl: bool,
        shift: bool,
        action: ShortcutAction,
        description: &'static str,
    ) -> Self {
        Self {
            key,
            ctrl,
            shift,
            action,
            description,
        }
    }

    /// Format the shortcut for display (e.g., "Ctrl+Shift+Z").
    pub fn format(&self) -> String {
        let mut parts = Vec::new();
        if self.ctrl {
            parts.push("Ctrl");
        }
        if self.shift {
            parts.push("Shift");
        }
        parts.push(self.key);
        parts.join("+")
    }

    fn matches(&self, input: &KeyInput) -> bool {
        self.key.eq_ignore_ascii_case(&input.key)
            && self.ctrl == input.ctrl
            && self.shift == input.shift
    }
}

/// A key press as delivered by the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyInput {
    /// Key name: a single character, or "Delete", "Backspace", "Escape".
    pub key: String,
    /// Ctrl on Windows/Linux, Cmd on macOS.
    pub ctrl: bool,
    pub shift: bool,
}

impl KeyInput {
    pub fn plain(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ctrl: false,
            shift: false,
        }
    }

    pub fn ctrl(key: impl Into<String>) -> Self {
        Self {
            ctrl: true,
            ..Self::plain(key)
        }
    }

    pub fn ctrl_shift(key: impl Into<String>) -> Self {
        Self {
            shift: true,
            ..Self::ctrl(key)
        }
    }
}

/// Registry of all keyboard shortcuts.
pub struct ShortcutRegistry;

impl ShortcutRegistry {
    /// Get all registered shortcuts.
    pub fn all() -> Vec<Shortcut> {
        use ShortcutAction::*;

        let mut shortcuts = vec![
            Shortcut::new("A", true, false, SelectAll, "Select all objects"),
            Shortcut::new("Z", true, false, Undo, "Undo"),
            Shortcut::new("Z", true, true, Redo, "Redo"),
            Shortcut::new("Y", true, false, Redo, "Redo"),
            Shortcut::new("D", true, false, Duplicate, "Duplicate selection"),
            Shortcut::new("C", true, false, Copy, "Copy selection"),
            Shortcut::new("X", true, false, Cut, "Cut selection"),
            Shortcut::new("V", true, false, Paste, "Paste"),
            Shortcut::new("Delete", false, false, Delete, "Delete selection"),
            Shortcut::new("Backspace", false, false, Delete, "Delete selection"),
            Shortcut::new("Escape", false, false, Cancel, "Clear selection"),
        ];
        shortcuts.extend([
            Shortcut::new("V", false, false, Tool(ToolKind::Select), "Select tool"),
            Shortcut::new("R", false, false, Tool(ToolKind::Rect), "Rectangle tool"),
            Shortcut::new("E", false, false, Tool(ToolKind::Ellipse), "Ellipse tool"),
            Shortcut::new("T", false, false, Tool(ToolKind::Text), "Text tool"),
            Shortcut::new("L", false, false, Tool(ToolKind::Line), "Line tool"),
        ]);
        shortcuts
    }

    /// Find the action bound to a key press.
    pub fn resolve(input: &KeyInput) -> Option<ShortcutAction> {
        Self::all()
            .into_iter()
            .find(|shortcut| shortcut.matches(input))
            .map(|shortcut| shortcut.action)
    }

    /// Print all shortcuts to console.
    pub fn print_all() {
        println!("\n=== Keyboard Shortcuts ===");
        for shortcut in Self::all() {
            println!("  {:20} {}", shortcut.format(), shortcut.description);
        }
        println!();
    }
}

/// Run the command bound to `input`. Returns the action if one was bound,
/// whether or not it changed anything. Commands act on the active editing
/// scope, so Delete removes children while a component is being edited.
pub fn dispatch_key(
    store: &mut EditorStore,
    clipboard: &mut Clipboard,
    input: &KeyInput,
) -> Option<ShortcutAction> {
    let action = ShortcutRegistry::resolve(input)?;
    match action {
        ShortcutAction::SelectAll => {
            store.select_all();
            log::info!("Selected all {} objects", store.selected_ids().len());
        }
        ShortcutAction::Undo => {
            if store.undo() {
                log::info!("Undo performed");
            } else {
                log::info!("Nothing to undo");
            }
        }
        ShortcutAction::Redo => {
            if store.redo() {
                log::info!("Redo performed");
            } else {
                log::info!("Nothing to redo");
            }
        }
        ShortcutAction::Duplicate => {
            store.duplicate_selection();
        }
        ShortcutAction::Copy => {
            let copied = clipboard.copy(store);
            log::info!("Copied {copied} objects");
        }
        ShortcutAction::Cut => {
            let cut = clipboard.cut(store);
            log::info!("Cut {cut} objects");
        }
        ShortcutAction::Paste => {
            if clipboard.paste(store) {
                log::info!("Pasted {} objects", clipboard.len());
            }
        }
        ShortcutAction::Delete => {
            store.delete_selection();
        }
        ShortcutAction::Cancel => {
            store.clear_selection();
            store.set_tool(ToolKind::Select);
        }
        ShortcutAction::Tool(tool) => store.set_tool(tool),
    }
    Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use designkit_core::factory::{create_rect, create_text};
    use designkit_core::interactive::create_flip_card;
    use designkit_core::{DesignDocument, DesignObject, ShapeTrait};

    fn setup(objects: Vec<DesignObject>) -> (EditorStore, Clipboard) {
        let mut store = EditorStore::new();
        store.load_document(
            "d1",
            "Keys",
            DesignDocument {
                objects,
                ..DesignDocument::default()
            },
        );
        (store, Clipboard::new())
    }

    #[test]
    fn test_format() {
        let redo = Shortcut::new("Z", true, true, ShortcutAction::Redo, "Redo");
        assert_eq!(redo.format(), "Ctrl+Shift+Z");
    }

    #[test]
    fn test_resolve() {
        assert_eq!(ShortcutRegistry::resolve(&KeyInput::ctrl("z")), Some(ShortcutAction::Undo));
        assert_eq!(
            ShortcutRegistry::resolve(&KeyInput::ctrl_shift("Z")),
            Some(ShortcutAction::Redo)
        );
        assert_eq!(
            ShortcutRegistry::resolve(&KeyInput::plain("v")),
            Some(ShortcutAction::Tool(ToolKind::Select))
        );
        assert_eq!(ShortcutRegistry::resolve(&KeyInput::ctrl("v")), Some(ShortcutAction::Paste));
        assert_eq!(
            ShortcutRegistry::resolve(&KeyInput::plain("Backspace")),
            Some(ShortcutAction::Delete)
        );
        assert_eq!(ShortcutRegistry::resolve(&KeyInput::plain("q")), None);
        assert_eq!(ShortcutRegistry::resolve(&KeyInput::ctrl("r")), None);
    }

    #[test]
    fn test_tool_keys_match_tool_shortcuts() {
        for tool in [ToolKind::Select, ToolKind::Rect, ToolKind::Ellipse, ToolKind::Text, ToolKind::Line] {
            let key = tool.shortcut().unwrap().to_string();
            assert_eq!(
                ShortcutRegistry::resolve(&KeyInput::plain(key)),
                Some(ShortcutAction::Tool(tool))
            );
        }
    }

    #[test]
    fn test_delete_and_undo() {
        let rect = create_rect();
        let id = rect.base.id.clone();
        let (mut store, mut clipboard) = setup(vec![rect.into()]);
        store.select(&id);

        dispatch_key(&mut store, &mut clipboard, &KeyInput::plain("Delete"));
        assert!(store.objects().is_empty());
        dispatch_key(&mut store, &mut clipboard, &KeyInput::ctrl("z"));
        assert_eq!(store.objects().len(), 1);
        dispatch_key(&mut store, &mut clipboard, &KeyInput::ctrl_shift("z"));
        assert!(store.objects().is_empty());
    }

    #[test]
    fn test_select_all_duplicate_and_escape() {
        let (mut store, mut clipboard) = setup(vec![create_rect().into(), create_text().into()]);
        store.set_tool(ToolKind::Rect);

        dispatch_key(&mut store, &mut clipboard, &KeyInput::ctrl("a"));
        assert_eq!(store.selected_ids().len(), 2);
        dispatch_key(&mut store, &mut clipboard, &KeyInput::ctrl("d"));
        assert_eq!(store.objects().len(), 4);

        dispatch_key(&mut store, &mut clipboard, &KeyInput::plain("Escape"));
        assert!(store.selected_ids().is_empty());
        assert_eq!(store.active_tool(), ToolKind::Select);
    }

    #[test]
    fn test_copy_paste() {
        let rect = create_rect();
        let id = rect.base.id.clone();
        let (mut store, mut clipboard) = setup(vec![rect.into()]);
        store.select(&id);

        dispatch_key(&mut store, &mut clipboard, &KeyInput::ctrl("c"));
        dispatch_key(&mut store, &mut clipboard, &KeyInput::ctrl("v"));
        assert_eq!(store.objects().len(), 2);
        assert_eq!(store.objects()[1].base().x, store.objects()[0].base().x + 20.0);
    }

    #[test]
    fn test_delete_is_scoped_to_component() {
        let card = create_flip_card(195.0, 300.0);
        let card_id = card.base.id.clone();
        let (mut store, mut clipboard) = setup(vec![card.into()]);
        assert!(store.enter_component(&card_id, "front"));
        store.select_all();
        let front_count = store.selected_ids().len();
        assert!(front_count > 0);

        dispatch_key(&mut store, &mut clipboard, &KeyInput::plain("Backspace"));
        let component = store.find(&card_id).unwrap().as_interactive().unwrap();
        assert!(component.group_objects("front").is_empty());
        assert!(!component.group_objects("back").is_empty());
        assert_eq!(store.objects().len(), 1);
    }

    #[test]
    fn test_unbound_key() {
        let (mut store, mut clipboard) = setup(Vec::new());
        assert_eq!(dispatch_key(&mut store, &mut clipboard, &KeyInput::plain("k")), None);
    }
}
