//! Global Application State Store
//!
//! Uses Leptos reactive_stores for reactivity. All mutation goes through
//! `dispatch`, which runs the pure reducer and writes the new snapshot back.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::board::{self, Action, BoardState};

/// Global application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The entire board, transient drag/hover state included
    pub board: BoardState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Run one action through the reducer and publish the resulting snapshot
pub fn dispatch(store: &AppStore, action: Action) {
    log_action(&action);
    let current = store.board().get_untracked();
    let next = board::reduce(&current, action);
    *store.board().write() = next;
}

fn log_action(action: &Action) {
    match action {
        Action::DropOnSlot { zone, index } => {
            web_sys::console::log_1(&format!("[BOARD] drop on {:?}[{}]", zone, index).into());
        }
        Action::DropOnTray => {
            web_sys::console::log_1(&"[BOARD] drop on tray".into());
        }
        Action::Reset => {
            web_sys::console::log_1(&"[BOARD] reset".into());
        }
        // Drag start/hover/end are high-frequency, not worth the noise
        _ => {}
    }
}
