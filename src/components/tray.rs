//! Tray Component
//!
//! The "available items" region: holds unplaced items and accepts drops
//! (returning a slot item, or reordering within the tray).

use leptos::prelude::*;
use leptos_dragdrop::{make_on_dragleave, make_on_dragover, make_on_drop};
use web_sys::DragEvent;

use super::ItemTile;
use crate::board::Action;
use crate::models::DragOrigin;
use crate::store::{dispatch, use_app_store, AppStateStoreFields};

#[component]
pub fn Tray() -> impl IntoView {
    let store = use_app_store();
    let (is_over, set_is_over) = signal(false);

    let on_drop = Callback::new(move |_ev: DragEvent| {
        dispatch(&store, Action::DropOnTray);
    });

    let items = move || store.board().read().tray.clone();

    view! {
        <div class="tray-region">
            <h2>"Available Items:"</h2>
            <div
                class=move || if is_over.get() { "tray active" } else { "tray" }
                on:dragover=make_on_dragover(set_is_over)
                on:dragleave=make_on_dragleave(set_is_over)
                on:drop=make_on_drop(set_is_over, on_drop)
            >
                <For
                    each=items
                    key=|item| item.id
                    children=move |item| view! { <ItemTile item origin=DragOrigin::Tray /> }
                />
            </div>
        </div>
    }
}
