//! Placement Board App
//!
//! Root component: tray and reset control above the two slot zones.

use leptos::prelude::*;

use crate::board::Action;
use crate::components::{Tray, ZonePanel};
use crate::models::ZoneId;
use crate::store::{dispatch, AppState, AppStore};

#[component]
pub fn App() -> impl IntoView {
    let store = AppStore::new(AppState::default());

    // Provide the store to all children
    provide_context(store);

    let reset = move |_| dispatch(&store, Action::Reset);

    view! {
        <div class="app-layout">
            <header class="board-header">
                <Tray />
                <button class="reset-btn" on:click=reset>"Reset All"</button>
            </header>

            <div class="zones-row">
                <ZonePanel zone=ZoneId::Left />
                <ZonePanel zone=ZoneId::Right />
            </div>
        </div>
    }
}
