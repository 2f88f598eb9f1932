//! Frontend Models
//!
//! Core data structures for the placement board.

use serde::{Deserialize, Serialize};

/// Slots per zone, both zones
pub const SLOTS_PER_ZONE: usize = 4;

/// A draggable item: identity, display label, and a color class.
/// Immutable during interaction except for its logical location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub label: String,
    pub color: String,
}

impl Item {
    fn new(id: u32, label: &str, color: &str) -> Self {
        Self {
            id,
            label: label.to_string(),
            color: color.to_string(),
        }
    }

    /// The canonical four items the board starts with and resets to
    pub fn defaults() -> Vec<Item> {
        vec![
            Item::new(1, "Item 1", "item-blue"),
            Item::new(2, "Item 2", "item-green"),
            Item::new(3, "Item 3", "item-yellow"),
            Item::new(4, "Item 4", "item-purple"),
        ]
    }
}

/// The two fixed zones of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneId {
    Left,
    Right,
}

impl ZoneId {
    pub fn title(self) -> &'static str {
        match self {
            ZoneId::Left => "Left Zone",
            ZoneId::Right => "Right Zone",
        }
    }
}

/// Where an in-flight drag started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DragOrigin {
    Tray,
    Slot(ZoneId, usize),
}

/// Payload written into the browser DataTransfer on drag start. Advisory
/// only: the store remains the authoritative source during drop resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    pub id: u32,
    pub origin: DragOrigin,
}
