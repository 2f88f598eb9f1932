//! Board State Core
//!
//! Pure placement logic: an owned state snapshot plus a reducer over
//! interaction actions. No rendering dependencies, so everything here is
//! unit testable headlessly.

use crate::models::{DragOrigin, Item, ZoneId, SLOTS_PER_ZONE};

/// A named zone: fixed-length ordered sequence of slots
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub slots: Vec<Option<Item>>,
}

impl Zone {
    pub fn empty() -> Self {
        Self {
            slots: vec![None; SLOTS_PER_ZONE],
        }
    }
}

/// The in-flight drag: which item, and where it started
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveDrag {
    pub item: Item,
    pub origin: DragOrigin,
}

/// Complete board state, transient drag/hover state included.
/// The reducer owns every transition; components only read and dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub left: Zone,
    pub right: Zone,
    /// Items not currently placed in any slot, in display order
    pub tray: Vec<Item>,
    pub dragging: Option<ActiveDrag>,
    /// Tray item currently hovered during a drag (scale cue)
    pub hover_id: Option<u32>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            left: Zone::empty(),
            right: Zone::empty(),
            tray: Item::defaults(),
            dragging: None,
            hover_id: None,
        }
    }
}

impl BoardState {
    pub fn zone(&self, id: ZoneId) -> &Zone {
        match id {
            ZoneId::Left => &self.left,
            ZoneId::Right => &self.right,
        }
    }

    fn zone_mut(&mut self, id: ZoneId) -> &mut Zone {
        match id {
            ZoneId::Left => &mut self.left,
            ZoneId::Right => &mut self.right,
        }
    }

    /// Occupant of (zone, index), cloned out for rendering
    pub fn slot(&self, zone: ZoneId, index: usize) -> Option<Item> {
        self.zone(zone).slots.get(index).cloned().flatten()
    }
}

/// User interaction intents, one per gesture
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    StartDrag { item: Item, origin: DragOrigin },
    DropOnSlot { zone: ZoneId, index: usize },
    DropOnTray,
    /// Drag passing over a tray item (tray only)
    Hover(u32),
    EndDrag,
    Reset,
}

/// Single transition function. Pure and total: every action is defined for
/// every state, invalid or redundant gestures return the state unchanged
/// (transient drag/hover state still clears where the gesture ends a drag).
pub fn reduce(state: &BoardState, action: Action) -> BoardState {
    let mut next = state.clone();
    match action {
        Action::StartDrag { item, origin } => {
            next.dragging = Some(ActiveDrag { item, origin });
            next.hover_id = None;
        }
        Action::DropOnSlot { zone, index } => {
            if index < SLOTS_PER_ZONE {
                if let Some(drag) = next.dragging.take() {
                    place_in_slot(&mut next, drag, zone, index);
                }
            }
            next.dragging = None;
            next.hover_id = None;
        }
        Action::DropOnTray => {
            if let Some(drag) = next.dragging.take() {
                return_to_tray(&mut next, drag);
            }
            next.dragging = None;
            next.hover_id = None;
        }
        Action::Hover(id) => {
            // Only meaningful mid-drag, and never over the dragged item itself
            match &next.dragging {
                Some(drag) if drag.item.id != id => next.hover_id = Some(id),
                _ => {}
            }
        }
        Action::EndDrag => {
            // Native drag cancel: transient state resets, placement untouched
            next.dragging = None;
            next.hover_id = None;
        }
        Action::Reset => {
            next = BoardState::default();
        }
    }
    next
}

/// Drop resolution for a zone slot. Origin-tracked swap semantics:
/// the origin location is vacated first, and a displaced occupant moves
/// into it (slot origin) or returns to the tray's end (tray origin).
fn place_in_slot(state: &mut BoardState, drag: ActiveDrag, zone: ZoneId, index: usize) {
    if drag.origin == DragOrigin::Slot(zone, index) {
        // Dropped back onto its own slot
        return;
    }

    let displaced = state.zone_mut(zone).slots[index].take();
    match drag.origin {
        DragOrigin::Tray => {
            state.tray.retain(|item| item.id != drag.item.id);
            if let Some(out) = displaced {
                state.tray.push(out);
            }
        }
        DragOrigin::Slot(from_zone, from_index) => {
            state.zone_mut(from_zone).slots[from_index] = displaced;
        }
    }
    state.zone_mut(zone).slots[index] = Some(drag.item);
}

/// Drop resolution for the tray region: slot items come back to the tray's
/// end; a tray item dropped over another tray item swaps the two positions.
fn return_to_tray(state: &mut BoardState, drag: ActiveDrag) {
    match drag.origin {
        DragOrigin::Slot(zone, index) => {
            state.zone_mut(zone).slots[index] = None;
            state.tray.push(drag.item);
        }
        DragOrigin::Tray => {
            if let Some(hover_id) = state.hover_id {
                let from = state.tray.iter().position(|i| i.id == drag.item.id);
                let to = state.tray.iter().position(|i| i.id == hover_id);
                if let (Some(from), Some(to)) = (from, to) {
                    if from != to {
                        state.tray.swap(from, to);
                    }
                }
            }
        }
    }
}
