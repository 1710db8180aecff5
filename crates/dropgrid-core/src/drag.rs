//! Drag session state, from pick-up to drop.
//!
//! The interaction layer reports the dragged source's client offset when the
//! gesture starts and on every pointer move. A session turns those offsets
//! into a preview position per frame and a single store write on drop.

use crate::item::{Item, ItemId};
use crate::snap::{GridConfig, SnapMode, snap_preview};
use crate::store::{PositionStore, StoreResult};
use kurbo::{Point, Vec2};

/// State of an in-flight drag of a single item.
#[derive(Debug, Clone)]
pub struct DragSession {
    /// The item being dragged.
    pub item_id: ItemId,
    /// Item position when the drag started.
    pub origin: Point,
    /// Source client offset when the drag started.
    pub initial_offset: Point,
    /// Latest source client offset.
    pub current_offset: Point,
}

impl DragSession {
    /// Start dragging an item that exists in `store`.
    pub fn begin(store: &PositionStore, item_id: &ItemId, initial_offset: Point) -> StoreResult<Self> {
        let item = store.get(item_id)?;
        log::debug!("Drag started for {item_id} at ({}, {})", item.left, item.top);
        let origin = item.position();
        Ok(Self {
            item_id: item.id,
            origin,
            initial_offset,
            current_offset: initial_offset,
        })
    }

    /// Record the latest pointer position.
    pub fn update(&mut self, current_offset: Point) {
        self.current_offset = current_offset;
    }

    /// Difference between the current and the initial offset.
    pub fn delta(&self) -> Vec2 {
        self.current_offset - self.initial_offset
    }

    /// Unrounded position the item would land on if dropped now.
    pub fn drop_position(&self) -> Point {
        self.origin + self.delta()
    }

    /// Where the drag layer should draw the preview this frame.
    /// Does not touch the store.
    pub fn preview_offset(&self, mode: SnapMode, grid: GridConfig) -> Point {
        snap_preview(self.current_offset, self.initial_offset, mode, grid).point
    }

    /// Drop the item, writing its new position to the store.
    ///
    /// The grid is applied only when `mode` snaps after drop.
    pub fn commit(self, store: &mut PositionStore, mode: SnapMode, grid: GridConfig) -> StoreResult<Item> {
        let target = self.drop_position();
        let grid = mode.snaps_after_drop().then_some(grid);
        store.move_item(&self.item_id, target.x, target.y, grid)
    }
}

/// Whether a source box should be drawn. Only a box that is being dragged
/// can be hidden.
pub fn source_visible(is_dragging: bool, hide_source_on_drag: bool) -> bool {
    !(is_dragging && hide_source_on_drag)
}

/// Preview position for a custom drag layer.
///
/// Returns `None` while either offset is unknown, meaning nothing should be
/// drawn.
pub fn layer_offset(
    initial_offset: Option<Point>,
    current_offset: Option<Point>,
    mode: SnapMode,
    grid: GridConfig,
) -> Option<Point> {
    let (initial, current) = (initial_offset?, current_offset?);
    Some(snap_preview(current, initial, mode, grid).point)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::demo_items;
    use crate::store::StoreError;

    fn seeded() -> PositionStore {
        PositionStore::from_items(demo_items()).unwrap()
    }

    #[test]
    fn test_begin_unknown_item() {
        let store = seeded();
        let result = DragSession::begin(&store, &ItemId::from("zzz"), Point::ZERO);
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn test_delta_and_drop_position() {
        let store = seeded();
        let mut session = DragSession::begin(&store, &ItemId::from("a"), Point::new(100.0, 100.0)).unwrap();
        assert_eq!(session.delta(), Vec2::ZERO);

        session.update(Point::new(103.5, 104.0));
        assert_eq!(session.delta(), Vec2::new(3.5, 4.0));
        assert_eq!(session.drop_position(), Point::new(83.5, 24.0));
    }

    #[test]
    fn test_commit_without_snap_rounds() {
        let mut store = seeded();
        let mut session = DragSession::begin(&store, &ItemId::from("a"), Point::ZERO).unwrap();
        session.update(Point::new(0.4, 0.6));

        let item = session
            .commit(&mut store, SnapMode::WhileDragging, GridConfig::default())
            .unwrap();
        assert_eq!((item.left, item.top), (80, 21));
    }

    #[test]
    fn test_commit_with_snap_after_drop() {
        let mut store = seeded();
        let mut session = DragSession::begin(&store, &ItemId::from("a"), Point::new(10.0, 10.0)).unwrap();
        session.update(Point::new(13.0, 14.0));

        let item = session
            .commit(&mut store, SnapMode::AfterDrop, GridConfig::default())
            .unwrap();
        assert_eq!(item, Item::new("a", 96, 32, "Drag me around"));
        assert_eq!(store.get(&ItemId::from("a")).unwrap(), item);
    }

    #[test]
    fn test_preview_does_not_touch_store() {
        let store = seeded();
        let mut session = DragSession::begin(&store, &ItemId::from("b"), Point::new(20.0, 180.0)).unwrap();
        session.update(Point::new(45.0, 190.0));

        let preview = session.preview_offset(SnapMode::Both, GridConfig::default());
        // Local delta (25, 10) snaps to (32, 0) from the initial offset.
        assert_eq!(preview, Point::new(52.0, 180.0));
        assert_eq!(store.get(&ItemId::from("b")).unwrap(), demo_items()[1]);
    }

    #[test]
    fn test_preview_unsnapped_follows_pointer() {
        let store = seeded();
        let mut session = DragSession::begin(&store, &ItemId::from("b"), Point::ZERO).unwrap();
        session.update(Point::new(7.0, 9.0));
        assert_eq!(
            session.preview_offset(SnapMode::AfterDrop, GridConfig::default()),
            Point::new(7.0, 9.0)
        );
    }

    #[test]
    fn test_source_visibility() {
        assert!(!source_visible(true, true));
        assert!(source_visible(true, false));
        assert!(source_visible(false, true));
        assert!(source_visible(false, false));
    }

    #[test]
    fn test_layer_offset_hidden_without_offsets() {
        let grid = GridConfig::default();
        assert_eq!(layer_offset(None, Some(Point::ZERO), SnapMode::None, grid), None);
        assert_eq!(layer_offset(Some(Point::ZERO), None, SnapMode::None, grid), None);
    }

    #[test]
    fn test_layer_offset_snaps_relative_to_initial() {
        let grid = GridConfig::new(32).unwrap();
        let initial = Some(Point::new(5.0, 5.0));
        let current = Some(Point::new(55.0, 20.0));

        assert_eq!(
            layer_offset(initial, current, SnapMode::WhileDragging, grid),
            Some(Point::new(69.0, 5.0))
        );
        assert_eq!(
            layer_offset(initial, current, SnapMode::None, grid),
            Some(Point::new(55.0, 20.0))
        );
    }
}
