//! Draggable items.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identifier of an item on a board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create an identifier from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A box that can be dragged around the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique identifier within a store. Generated when missing from input.
    #[serde(default = "ItemId::generate")]
    pub id: ItemId,
    /// Left edge in pixels.
    pub left: i64,
    /// Top edge in pixels.
    pub top: i64,
    /// Label shown inside the box.
    pub title: String,
}

impl Item {
    /// Create an item with an explicit id.
    pub fn new(id: impl Into<ItemId>, left: i64, top: i64, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            left,
            top,
            title: title.into(),
        }
    }

    /// Position as a point, for offset arithmetic.
    pub fn position(&self) -> kurbo::Point {
        kurbo::Point::new(self.left as f64, self.top as f64)
    }
}

/// The two boxes every demo board starts with.
pub fn demo_items() -> Vec<Item> {
    vec![
        Item::new("a", 80, 20, "Drag me around"),
        Item::new("b", 20, 180, "Drag me too"),
    ]
}
