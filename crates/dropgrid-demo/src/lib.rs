//! dropgrid demo
//!
//! Seeds a board from a config, replays scripted drags the way an
//! interaction layer would drive them, and reports the final items.

use dropgrid_core::{BoardConfig, ConfigError, DragSession, Item, SnapMode, StoreError, source_visible};
use kurbo::Point;
use thiserror::Error;

/// Demo errors.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Drag failed: {0}")]
    Drag(#[from] StoreError),
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
    #[error("Unknown argument: {0}")]
    Usage(String),
}

/// Command line options.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoArgs {
    /// Board file to load instead of the built-in board.
    pub config_path: Option<String>,
    /// `--snap-after-drop`
    pub snap_after_drop: bool,
    /// `--snap-while-dragging`
    pub snap_while_dragging: bool,
}

impl DemoArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: impl IntoIterator<Item = String>) -> Result<Self, DemoError> {
        let mut parsed = Self::default();
        for arg in args {
            match arg.as_str() {
                "--snap-after-drop" => parsed.snap_after_drop = true,
                "--snap-while-dragging" => parsed.snap_while_dragging = true,
                flag if flag.starts_with("--") => return Err(DemoError::Usage(arg)),
                _ if parsed.config_path.is_none() => parsed.config_path = Some(arg),
                _ => return Err(DemoError::Usage(arg)),
            }
        }
        Ok(parsed)
    }

    /// Load the board and switch on any snapping requested on the command line.
    pub fn load_config(&self) -> Result<BoardConfig, DemoError> {
        let mut config = match &self.config_path {
            Some(path) => BoardConfig::load(path)?,
            None => BoardConfig::default(),
        };
        config.snap_mode = SnapMode::from_flags(
            config.snap_mode.snaps_after_drop() || self.snap_after_drop,
            config.snap_mode.snaps_while_dragging() || self.snap_while_dragging,
        );
        if config.snap_mode.is_enabled() {
            log::info!("Grid snapping {:?}, cell size {}", config.snap_mode, config.cell_size);
        }
        Ok(config)
    }
}

/// Replay every scripted drag in `config` and return the resulting items.
pub fn replay(config: &BoardConfig) -> Result<Vec<Item>, DemoError> {
    let mut store = config.build_store()?;
    let grid = config.grid().map_err(ConfigError::from)?;

    for drag in &config.drags {
        // Offsets are relative to where the gesture started.
        let mut session = DragSession::begin(&store, &drag.id, Point::ZERO)?;
        session.update(Point::new(drag.dx, drag.dy));

        let preview = session.preview_offset(config.snap_mode, grid);
        log::debug!(
            "Preview for {} at ({}, {}) from {:?}, source visible: {}",
            drag.id,
            preview.x,
            preview.y,
            session.origin,
            source_visible(true, config.hide_source_on_drag)
        );

        let item = session.commit(&mut store, config.snap_mode, grid)?;
        log::info!("Dropped {} at ({}, {})", item.id, item.left, item.top);
    }

    Ok(store.list())
}

/// Render items as pretty JSON.
pub fn render(items: &[Item]) -> Result<String, DemoError> {
    Ok(serde_json::to_string_pretty(items)?)
}
