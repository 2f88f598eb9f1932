//! Leptos DragDrop Utilities
//!
//! Native HTML5 drag-and-drop helpers for Leptos: handler factories that
//! wire DragEvent plumbing (default-prevention, drop effect, hover
//! highlight) to plain callbacks. Domain-agnostic; the application decides
//! what a drop means.

use leptos::prelude::*;
use web_sys::DragEvent;

/// Accept a drag passing over a drop target. Browsers refuse the drop
/// unless dragover is default-prevented.
pub fn accept(ev: &DragEvent) {
    ev.prevent_default();
    if let Some(dt) = ev.data_transfer() {
        dt.set_drop_effect("move");
    }
}

/// Stamp the outgoing drag with a payload string. Firefox will not start
/// a drag at all unless some data is set on the DataTransfer.
pub fn start_drag(ev: &DragEvent, mime: &str, payload: &str) {
    if let Some(dt) = ev.data_transfer() {
        dt.set_effect_allowed("move");
        let _ = dt.set_data(mime, payload);
    }
}

/// Create dragover handler: accept the drop and raise the highlight
pub fn make_on_dragover(set_is_over: WriteSignal<bool>) -> impl Fn(DragEvent) + Copy + 'static {
    move |ev: DragEvent| {
        accept(&ev);
        set_is_over.set(true);
    }
}

/// Create dragleave handler: lower the highlight
pub fn make_on_dragleave(set_is_over: WriteSignal<bool>) -> impl Fn(DragEvent) + Copy + 'static {
    move |_ev: DragEvent| {
        set_is_over.set(false);
    }
}

/// Create drop handler: default-prevent, lower the highlight, then hand
/// the event to the application callback
pub fn make_on_drop(
    set_is_over: WriteSignal<bool>,
    on_drop: Callback<DragEvent>,
) -> impl Fn(DragEvent) + 'static {
    move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        on_drop.run(ev);
    }
}
