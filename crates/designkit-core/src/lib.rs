//! DesignKit Core Library
//!
//! Document model, mutation layer, undo history and snapping engine for the
//! DesignKit editor. Rendering consumes the object model but is not part of it.

pub mod align;
pub mod blocks;
pub mod clipboard;
pub mod config;
pub mod document;
pub mod drag;
pub mod error;
pub mod factory;
pub mod generation;
pub mod history;
pub mod interactive;
pub mod sanitize;
pub mod shapes;
pub mod snap;
pub mod storage;
pub mod store;
pub mod tools;

pub use align::{AlignEdge, DistributeAxis};
pub use clipboard::Clipboard;
pub use config::EditorConfig;
pub use document::{Asset, CanvasConfig, DesignDocument, IntegrityIssue};
pub use drag::DragSession;
pub use error::{DocumentError, GenerationError, InteractiveError, SanitizeError};
pub use generation::{GenerationMode, GenerationRequest, StructuredInput, accept_generated};
pub use history::History;
pub use interactive::{InteractionConfig, InteractionType, InteractiveComponent, ObjectGroup};
pub use sanitize::sanitize_document;
pub use shapes::{DesignObject, ObjectId, ObjectPatch, ShapeTrait, StaticObject, Styled};
pub use snap::{Guide, MagneticSnap, SnapMode, magnetic_snap, snap_to_grid};
pub use storage::{AutoSaveScheduler, MemoryStorage, Storage, StorageError, StorageResult};
pub use store::EditorStore;
pub use tools::ToolKind;
