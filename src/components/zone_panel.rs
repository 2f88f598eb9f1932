//! Zone Panel Component
//!
//! A named zone rendered as a 2x2 grid of slots.

use leptos::prelude::*;

use super::SlotCell;
use crate::models::{ZoneId, SLOTS_PER_ZONE};

#[component]
pub fn ZonePanel(zone: ZoneId) -> impl IntoView {
    view! {
        <section class="zone-panel">
            <h2>{zone.title()}</h2>
            <div class="zone-grid">
                {(0..SLOTS_PER_ZONE)
                    .map(|index| view! { <SlotCell zone index /> })
                    .collect_view()}
            </div>
        </section>
    }
}
