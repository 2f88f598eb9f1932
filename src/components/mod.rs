//! UI Components
//!
//! Reusable Leptos components.

mod item_tile;
mod slot_cell;
mod tray;
mod zone_panel;

pub use item_tile::ItemTile;
pub use slot_cell::SlotCell;
pub use tray::Tray;
pub use zone_panel::ZonePanel;
