//! Drop Zone Component
//!
//! A horizontal gap between sibling menu items for drag-and-drop reordering.

use leptos::prelude::*;
use leptos_dragdrop::*;

/// Gap shown while dragging; dropping here inserts at `position` under `parent`
#[component]
pub fn DropZone(
    dnd: DndSignals<String>,
    /// Parent key of the gap's context (None = root)
    parent: Option<String>,
    /// 1-based position the dropped item takes
    #[prop(into)]
    position: Signal<usize>,
) -> impl IntoView {
    let on_mouseenter = make_on_zone_mouseenter(dnd, parent.clone(), position);
    let on_mouseleave = make_on_mouseleave(dnd);

    let zone_class = move || {
        let mut c = String::from("drop-zone");
        if dnd.dragging().is_none() { c.push_str(" hidden"); }
        if dnd.is_target(&DropTarget::Zone(parent.clone(), position.get())) { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            data-position=move || position.get().to_string()
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
