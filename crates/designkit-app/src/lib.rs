//! DesignKit Application
//!
//! Headless shell around the editor core: keyboard dispatch and document
//! loading for the `designkit` binary.

mod cli;
mod shortcuts;

pub use cli::{CliError, Options, load_design};
pub use shortcuts::{KeyInput, Shortcut, ShortcutAction, ShortcutRegistry, dispatch_key};
