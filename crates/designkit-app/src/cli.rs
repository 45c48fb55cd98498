//! Command-line options and document loading.

use clap::Parser;
use designkit_core::{DesignDocument, EditorConfig, EditorStore, accept_generated};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Document(#[from] designkit_core::DocumentError),
    #[error(transparent)]
    Sanitize(#[from] designkit_core::SanitizeError),
}

/// DesignKit - load a design and print it canonically
#[derive(Debug, Clone, Default, PartialEq, Parser)]
#[command(name = "designkit")]
#[command(about = "Load, sanitize and normalize DesignKit documents")]
pub struct Options {
    /// Design document (JSON)
    pub design: PathBuf,

    /// Treat the input as untrusted generator output and sanitize it
    #[arg(long)]
    pub ai: bool,

    /// Editor configuration file (JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Print the keyboard shortcuts before loading
    #[arg(long)]
    pub shortcuts: bool,
}

fn read(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Build a store holding the design described by `options`.
pub fn load_design(options: &Options) -> Result<EditorStore, CliError> {
    let config = match &options.config {
        Some(path) => EditorConfig::from_json(&read(path)?).map_err(|source| CliError::Json {
            path: path.clone(),
            source,
        })?,
        None => EditorConfig::default(),
    };

    let text = read(&options.design)?;
    let document = if options.ai {
        let raw: serde_json::Value =
            serde_json::from_str(&text).map_err(|source| CliError::Json {
                path: options.design.clone(),
                source,
            })?;
        accept_generated(&raw)?
    } else {
        DesignDocument::from_json(&text)?
    };

    let design_id = options
        .design
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "design".to_string());
    let mut store = EditorStore::with_config(config);
    store.load_document(design_id.clone(), design_id, document);
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_args() {
        let options =
            Options::try_parse_from(["designkit", "poster.json", "--ai", "--config", "cfg.json"])
                .unwrap();
        assert_eq!(options.design, PathBuf::from("poster.json"));
        assert!(options.ai);
        assert!(!options.shortcuts);
        assert_eq!(options.config, Some(PathBuf::from("cfg.json")));
    }

    #[test]
    fn test_parse_short_config_and_shortcuts() {
        let options =
            Options::try_parse_from(["designkit", "-c", "cfg.json", "--shortcuts", "a.json"]).unwrap();
        assert_eq!(options.design, PathBuf::from("a.json"));
        assert_eq!(options.config, Some(PathBuf::from("cfg.json")));
        assert!(options.shortcuts);
        assert!(!options.ai);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(Options::try_parse_from(["designkit"]).is_err());
        assert!(Options::try_parse_from(["designkit", "a.json", "b.json"]).is_err());
        assert!(Options::try_parse_from(["designkit", "a.json", "--config"]).is_err());
        assert!(Options::try_parse_from(["designkit", "a.json", "--verbose"]).is_err());
    }

    #[test]
    fn test_missing_file() {
        let options = Options {
            design: PathBuf::from("/nonexistent/design.json"),
            ..Options::default()
        };
        assert!(matches!(load_design(&options), Err(CliError::Read { .. })));
    }
}
