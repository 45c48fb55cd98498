//! Editor configuration.

use crate::history::DEFAULT_HISTORY_LIMIT;
use crate::snap::{DEFAULT_GRID_SIZE, MAGNETIC_SNAP_THRESHOLD, SnapMode};
use serde::{Deserialize, Serialize};

/// Offset applied to duplicated objects, in canvas pixels.
pub const DEFAULT_DUPLICATE_OFFSET: f64 = 20.0;

/// Offset applied per paste, in canvas pixels.
pub const DEFAULT_PASTE_OFFSET: f64 = 20.0;

/// Tunables for an [`EditorStore`](crate::store::EditorStore) and its
/// collaborators. Missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EditorConfig {
    /// Undo steps retained before the oldest is dropped.
    pub history_limit: usize,
    pub grid_size: f64,
    /// Inclusive magnetic snap distance.
    pub snap_threshold: f64,
    pub duplicate_offset: f64,
    pub paste_offset: f64,
    #[serde(skip)]
    pub snap_mode: SnapMode,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            grid_size: DEFAULT_GRID_SIZE,
            snap_threshold: MAGNETIC_SNAP_THRESHOLD,
            duplicate_offset: DEFAULT_DUPLICATE_OFFSET,
            paste_offset: DEFAULT_PASTE_OFFSET,
            snap_mode: SnapMode::default(),
        }
    }
}

impl EditorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.history_limit, 50);
        assert_eq!(config.grid_size, 20.0);
        assert_eq!(config.snap_threshold, 8.0);
        assert_eq!(config.duplicate_offset, 20.0);
        assert_eq!(config.snap_mode, SnapMode::Magnetic);
    }

    #[test]
    fn test_partial_json() {
        let config = EditorConfig::from_json(r#"{"historyLimit": 10, "gridSize": 8}"#).unwrap();
        assert_eq!(config.history_limit, 10);
        assert_eq!(config.grid_size, 8.0);
        assert_eq!(config.paste_offset, 20.0);
    }

    #[test]
    fn test_rejects_wrong_types() {
        assert!(EditorConfig::from_json(r#"{"historyLimit": "many"}"#).is_err());
    }
}
