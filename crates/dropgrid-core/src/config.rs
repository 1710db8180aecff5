//! Board configuration loaded from JSON.

use crate::item::{Item, ItemId, demo_items};
use crate::snap::{DEFAULT_CELL_SIZE, GridConfig, GridError, SnapMode};
use crate::store::{PositionStore, StoreError};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid board: {0}")]
    Store(#[from] StoreError),
    #[error("Invalid grid: {0}")]
    Grid(#[from] GridError),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// A drag to replay against the board, expressed as a pointer delta.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScriptedDrag {
    pub id: ItemId,
    pub dx: f64,
    pub dy: f64,
}

/// Everything needed to set up a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub snap_mode: SnapMode,
    pub cell_size: u32,
    pub hide_source_on_drag: bool,
    pub items: Vec<Item>,
    pub drags: Vec<ScriptedDrag>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            snap_mode: SnapMode::None,
            cell_size: DEFAULT_CELL_SIZE,
            hide_source_on_drag: true,
            items: demo_items(),
            drags: Vec::new(),
        }
    }
}

impl BoardConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.grid()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        log::debug!("Loading board config from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The configured grid.
    pub fn grid(&self) -> Result<GridConfig, GridError> {
        GridConfig::new(self.cell_size)
    }

    /// Seed a store with the configured items.
    pub fn build_store(&self) -> ConfigResult<PositionStore> {
        Ok(PositionStore::from_items(self.items.iter().cloned())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.snap_mode, SnapMode::None);
        assert_eq!(config.grid().unwrap().cell_size(), 32);
        assert!(config.hide_source_on_drag);
        assert_eq!(config.build_store().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_json_uses_defaults() {
        let config = BoardConfig::from_json_str("{}").unwrap();
        assert_eq!(config, BoardConfig::default());
    }

    #[test]
    fn test_parse_full() {
        let json = r#"{
            "snap_mode": "both",
            "cell_size": 20,
            "hide_source_on_drag": false,
            "items": [{ "id": "x", "left": 1, "top": 2, "title": "X" }],
            "drags": [{ "id": "x", "dx": 10.5, "dy": -3.0 }]
        }"#;
        let config = BoardConfig::from_json_str(json).unwrap();

        assert_eq!(config.snap_mode, SnapMode::Both);
        assert_eq!(config.cell_size, 20);
        assert!(!config.hide_source_on_drag);
        assert_eq!(config.items, vec![Item::new("x", 1, 2, "X")]);
        assert_eq!(config.drags[0].dx, 10.5);
    }

    #[test]
    fn test_zero_cell_size_rejected() {
        let result = BoardConfig::from_json_str(r#"{ "cell_size": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Grid(GridError::ZeroCellSize))));
    }

    #[test]
    fn test_items_without_ids_get_distinct_ids() {
        let json = r#"{ "items": [
            { "left": 0, "top": 0, "title": "one" },
            { "left": 5, "top": 5, "title": "two" }
        ] }"#;
        let store = BoardConfig::from_json_str(json).unwrap().build_store().unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_duplicate_items_rejected_on_build() {
        let json = r#"{ "items": [
            { "id": "a", "left": 0, "top": 0, "title": "one" },
            { "id": "a", "left": 5, "top": 5, "title": "two" }
        ] }"#;
        let config = BoardConfig::from_json_str(json).unwrap();
        assert!(matches!(
            config.build_store(),
            Err(ConfigError::Store(StoreError::DuplicateId(_)))
        ));
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(
            BoardConfig::from_json_str("{ not json"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "snap_mode": "after_drop" }}"#).unwrap();

        let config = BoardConfig::load(file.path()).unwrap();
        assert_eq!(config.snap_mode, SnapMode::AfterDrop);
        assert_eq!(config.items, demo_items());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = BoardConfig::load(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_json_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("board.json");
        let config = BoardConfig {
            snap_mode: SnapMode::WhileDragging,
            ..BoardConfig::default()
        };
        std::fs::write(&path, serde_json::to_string_pretty(&config).unwrap()).unwrap();

        assert_eq!(BoardConfig::load(&path).unwrap(), config);
    }
}
