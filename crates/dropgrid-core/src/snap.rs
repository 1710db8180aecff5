//! Snap functionality for aligning item positions to a grid.

use kurbo::Point;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default grid cell size in pixels (matches the demo board's grid).
pub const DEFAULT_CELL_SIZE: u32 = 32;

/// Grid errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("Grid cell size must be positive")]
    ZeroCellSize,
}

/// A square grid that committed coordinates can be snapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct GridConfig {
    cell_size: u32,
}

impl GridConfig {
    /// Create a grid with the given cell size.
    pub fn new(cell_size: u32) -> Result<Self, GridError> {
        if cell_size == 0 {
            return Err(GridError::ZeroCellSize);
        }
        Ok(Self { cell_size })
    }

    /// Cell size in pixels. Always positive.
    pub fn cell_size(self) -> u32 {
        self.cell_size
    }
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
        }
    }
}

impl TryFrom<u32> for GridConfig {
    type Error = GridError;

    fn try_from(cell_size: u32) -> Result<Self, Self::Error> {
        Self::new(cell_size)
    }
}

impl From<GridConfig> for u32 {
    fn from(grid: GridConfig) -> Self {
        grid.cell_size
    }
}

/// When grid snapping applies during a drag.
///
/// The two flags are independent: snapping after drop changes what gets
/// committed, snapping while dragging only changes the preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapMode {
    /// No snapping.
    #[default]
    None,
    /// Snap the committed position when the item is dropped.
    AfterDrop,
    /// Snap the drag preview on every pointer move.
    WhileDragging,
    /// Snap both the preview and the committed position.
    Both,
}

impl SnapMode {
    /// Cycle to the next snap mode.
    pub fn next(self) -> Self {
        match self {
            SnapMode::None => SnapMode::AfterDrop,
            SnapMode::AfterDrop => SnapMode::WhileDragging,
            SnapMode::WhileDragging => SnapMode::Both,
            SnapMode::Both => SnapMode::None,
        }
    }

    /// Build a mode from the two independent toggles.
    pub fn from_flags(after_drop: bool, while_dragging: bool) -> Self {
        match (after_drop, while_dragging) {
            (false, false) => SnapMode::None,
            (true, false) => SnapMode::AfterDrop,
            (false, true) => SnapMode::WhileDragging,
            (true, true) => SnapMode::Both,
        }
    }

    /// Check if the committed position is snapped on drop.
    pub fn snaps_after_drop(self) -> bool {
        matches!(self, SnapMode::AfterDrop | SnapMode::Both)
    }

    /// Check if the drag preview is snapped while moving.
    pub fn snaps_while_dragging(self) -> bool {
        matches!(self, SnapMode::WhileDragging | SnapMode::Both)
    }

    /// Check if any snapping is enabled.
    pub fn is_enabled(self) -> bool {
        self != SnapMode::None
    }
}

/// Result of a snap operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SnapResult {
    /// The snapped point.
    pub point: Point,
    /// Whether the X coordinate moved.
    pub snapped_x: bool,
    /// Whether the Y coordinate moved.
    pub snapped_y: bool,
}

impl SnapResult {
    /// Create a result with no snapping.
    pub fn none(point: Point) -> Self {
        Self {
            point,
            snapped_x: false,
            snapped_y: false,
        }
    }

    /// Check if any snapping occurred.
    pub fn is_snapped(&self) -> bool {
        self.snapped_x || self.snapped_y
    }
}

/// Largest absolute coordinate a store accepts. Above 2^53 an `f64` no
/// longer holds every integer.
pub const MAX_COORD: i64 = 1 << 53;

/// Round a raw coordinate to the nearest integer, half away from zero.
/// Returns `None` for NaN, infinite input, or a magnitude above [`MAX_COORD`].
pub fn round_coord(raw: f64) -> Option<i64> {
    if !raw.is_finite() {
        return None;
    }
    let rounded = raw.round();
    if rounded.abs() > MAX_COORD as f64 {
        return None;
    }
    Some(rounded as i64)
}

/// Snap an integer coordinate to the nearest multiple of the cell size.
///
/// Ties round half away from zero, the same as [`f64::round`], so both axes
/// and both signs behave identically. Returns `None` if the snapped value
/// does not fit in an `i64`.
pub fn snap_coord(value: i64, grid: GridConfig) -> Option<i64> {
    let cell = i64::from(grid.cell_size);
    let quotient = value / cell;
    let remainder = value % cell;
    let rounded = if remainder.unsigned_abs() * 2 >= cell.unsigned_abs() {
        quotient.checked_add(value.signum())?
    } else {
        quotient
    };
    rounded.checked_mul(cell)
}

/// Snap a point to the nearest grid intersection.
pub fn snap_to_grid(point: Point, grid: GridConfig) -> SnapResult {
    let cell = f64::from(grid.cell_size);
    let snapped = Point::new(
        (point.x / cell).round() * cell,
        (point.y / cell).round() * cell,
    );

    SnapResult {
        point: snapped,
        snapped_x: snapped.x != point.x,
        snapped_y: snapped.y != point.y,
    }
}

/// Snap a point relative to an origin instead of the grid's zero.
///
/// Used by drag previews: the grid is anchored at where the drag started,
/// so a box that begins off-grid keeps its sub-cell offset while moving.
pub fn snap_relative(point: Point, origin: Point, grid: GridConfig) -> SnapResult {
    let local = snap_to_grid(point - origin.to_vec2(), grid);
    SnapResult {
        point: local.point + origin.to_vec2(),
        ..local
    }
}

/// Snap a point based on the preview half of the current snap mode.
pub fn snap_preview(point: Point, origin: Point, mode: SnapMode, grid: GridConfig) -> SnapResult {
    if mode.snaps_while_dragging() {
        snap_relative(point, origin, grid)
    } else {
        SnapResult::none(point)
    }
}
