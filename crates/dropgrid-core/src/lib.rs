//! dropgrid core library
//!
//! UI-independent state for drag-and-drop boards: item positions, grid
//! snapping, and per-gesture drag sessions.

pub mod config;
pub mod drag;
pub mod item;
pub mod snap;
pub mod store;

pub use config::{BoardConfig, ConfigError, ConfigResult, ScriptedDrag};
pub use drag::{DragSession, layer_offset, source_visible};
pub use item::{Item, ItemId, demo_items};
pub use snap::{
    DEFAULT_CELL_SIZE, GridConfig, GridError, MAX_COORD, SnapMode, SnapResult, snap_coord, snap_to_grid,
};
pub use store::{PositionStore, StoreError, StoreResult};
