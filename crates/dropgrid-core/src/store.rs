//! Position store: owns every item on a board.

use crate::item::{Item, ItemId};
use crate::snap::{GridConfig, round_coord, snap_coord};
use std::collections::HashMap;
use thiserror::Error;

/// Store errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("Item not found: {0}")]
    NotFound(ItemId),
    #[error("Duplicate item id: {0}")]
    DuplicateId(ItemId),
    #[error("Coordinate is not a finite number")]
    NonFiniteCoordinate,
    #[error("Coordinate {0} is outside the supported range")]
    CoordinateOutOfRange(f64),
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Mapping from item id to item, mutated only through [`PositionStore::move_item`].
///
/// Iteration follows seeding order so that snapshots are stable.
#[derive(Debug, Clone, Default)]
pub struct PositionStore {
    items: HashMap<ItemId, Item>,
    order: Vec<ItemId>,
}

impl PositionStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with the given items.
    pub fn from_items(items: impl IntoIterator<Item = Item>) -> StoreResult<Self> {
        let mut store = Self::new();
        for item in items {
            store.insert(item)?;
        }
        Ok(store)
    }

    /// Seed a new item.
    pub fn insert(&mut self, item: Item) -> StoreResult<()> {
        if self.items.contains_key(&item.id) {
            return Err(StoreError::DuplicateId(item.id));
        }
        self.order.push(item.id.clone());
        self.items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Get a copy of an item.
    pub fn get(&self, id: &ItemId) -> StoreResult<Item> {
        self.items
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.clone()))
    }

    /// Snapshot of all items in seeding order.
    pub fn list(&self) -> Vec<Item> {
        self.order
            .iter()
            .filter_map(|id| self.items.get(id))
            .cloned()
            .collect()
    }

    pub fn contains(&self, id: &ItemId) -> bool {
        self.items.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Move an item to a new position.
    ///
    /// The raw coordinates are rounded to integers, then snapped to `grid`
    /// when one is given. Only `left` and `top` change; the rest of the item
    /// is left as is. Nothing is written if the id is unknown or either
    /// coordinate is not finite or beyond [`MAX_COORD`](crate::snap::MAX_COORD).
    pub fn move_item(
        &mut self,
        id: &ItemId,
        raw_left: f64,
        raw_top: f64,
        grid: Option<GridConfig>,
    ) -> StoreResult<Item> {
        let Some(item) = self.items.get_mut(id) else {
            log::warn!("Rejected move of unknown item {id}");
            return Err(StoreError::NotFound(id.clone()));
        };

        let (mut left, mut top) = match (committed_coord(raw_left), committed_coord(raw_top)) {
            (Ok(left), Ok(top)) => (left, top),
            (Err(err), _) | (_, Err(err)) => {
                log::warn!("Rejected move of {id} to ({raw_left}, {raw_top}): {err}");
                return Err(err);
            }
        };

        if let Some(grid) = grid {
            left = snap_coord(left, grid).ok_or(StoreError::CoordinateOutOfRange(raw_left))?;
            top = snap_coord(top, grid).ok_or(StoreError::CoordinateOutOfRange(raw_top))?;
        }

        item.left = left;
        item.top = top;
        log::debug!("Moved {id} to ({left}, {top})");
        Ok(item.clone())
    }
}

/// Round a raw coordinate, telling non-finite and out-of-range input apart.
fn committed_coord(raw: f64) -> StoreResult<i64> {
    if !raw.is_finite() {
        return Err(StoreError::NonFiniteCoordinate);
    }
    round_coord(raw).ok_or(StoreError::CoordinateOutOfRange(raw))
}
