//! Slot Cell Component
//!
//! One drop-accepting slot in a zone grid.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop};
use web_sys::DragEvent;

use super::ItemTile;
use crate::board::Action;
use crate::models::{DragOrigin, ZoneId};
use crate::store::{dispatch, use_app_store, AppStateStoreFields};

/// A single slot at (zone, index), holding at most one item
#[component]
pub fn SlotCell(zone: ZoneId, index: usize) -> impl IntoView {
    let store = use_app_store();
    let (is_over, set_is_over) = signal(false);

    let on_drop = Callback::new(move |_ev: DragEvent| {
        dispatch(&store, Action::DropOnSlot { zone, index });
    });

    let occupant = move || store.board().read().slot(zone, index);

    view! {
        <div
            class=move || if is_over.get() { "slot-cell active" } else { "slot-cell" }
            on:dragover=make_on_dragover(set_is_over)
            on:dragleave=make_on_dragleave(set_is_over)
            on:drop=make_on_drop(set_is_over, on_drop)
        >
            {move || {
                occupant().map(|item| view! { <ItemTile item origin=DragOrigin::Slot(zone, index) /> })
            }}
        </div>
    }
}
