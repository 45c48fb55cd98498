//! `designkit` binary: load (or sanitize) a design and print it canonically.

use clap::Parser;
use designkit_app::{Options, ShortcutRegistry, load_design};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    let options = Options::parse();
    if options.shortcuts {
        ShortcutRegistry::print_all();
    }

    let store = match load_design(&options) {
        Ok(store) => store,
        Err(e) => {
            log::error!("{e}");
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let document = store.get_document();
    log::info!(
        "Loaded {} ({} objects, canvas {}x{})",
        store.title(),
        document.objects.len(),
        document.canvas.width,
        document.canvas.height
    );
    let issues = document.integrity_issues();
    if !issues.is_empty() {
        log::warn!("{} integrity issue(s) found", issues.len());
    }
    for orphan in document.orphaned_assets() {
        log::debug!("Orphaned asset {orphan}");
    }

    match serde_json::to_string_pretty(&document) {
        Ok(json) => {
            println!("{json}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to encode design: {e}");
            ExitCode::FAILURE
        }
    }
}
