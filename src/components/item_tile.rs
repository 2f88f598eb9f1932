//! Item Tile Component
//!
//! A draggable item tile, rendered both in the tray and inside slots.

use leptos::prelude::*;
use web_sys::DragEvent;

use crate::board::Action;
use crate::models::{DragOrigin, DragPayload, Item};
use crate::store::{dispatch, use_app_store, AppStateStoreFields};

/// MIME type of the DataTransfer payload stamped on drag start
const PAYLOAD_MIME: &str = "application/json";

/// A single draggable tile
#[component]
pub fn ItemTile(item: Item, origin: DragOrigin) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let label = item.label.clone();
    let color = item.color.clone();
    let payload = serde_json::to_string(&DragPayload { id, origin }).unwrap_or_default();

    let drag_item = item.clone();
    let on_dragstart = move |ev: DragEvent| {
        leptos_dragdrop::start_drag(&ev, PAYLOAD_MIME, &payload);
        dispatch(
            &store,
            Action::StartDrag {
                item: drag_item.clone(),
                origin,
            },
        );
    };

    let on_dragend = move |_ev: DragEvent| {
        dispatch(&store, Action::EndDrag);
    };

    // Tray tiles double as hover targets for the reorder cue; drops on them
    // bubble up to the tray container
    let on_dragover = move |ev: DragEvent| {
        if origin == DragOrigin::Tray {
            leptos_dragdrop::accept(&ev);
            if store.board().read_untracked().hover_id != Some(id) {
                dispatch(&store, Action::Hover(id));
            }
        }
    };

    let class = move || {
        let mut c = format!("item-tile {}", color);
        if origin == DragOrigin::Tray && store.board().read().hover_id == Some(id) {
            c.push_str(" scaled");
        }
        c
    };

    view! {
        <div
            class=class
            draggable="true"
            on:dragstart=on_dragstart
            on:dragend=on_dragend
            on:dragover=on_dragover
        >
            {label}
        </div>
    }
}
