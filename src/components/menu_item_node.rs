//! Menu Item Node Component
//!
//! One accordion row of the menu structure, followed by its children.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos_dragdrop::*;
use wasm_bindgen::JsCast;

use crate::components::DropZone;
use crate::menu::item_fragment;
use crate::store::{store_mutate_menu, use_admin_store, AdminStateStoreFields};

fn event_value(ev: &web_sys::Event) -> Option<String> {
    let target = ev.target()?;
    if let Some(select) = target.dyn_ref::<web_sys::HtmlSelectElement>() {
        return Some(select.value());
    }
    target.dyn_ref::<web_sys::HtmlInputElement>().map(|input| input.value())
}

/// A menu item row and its subtree. Recursive, hence `AnyView`.
#[component]
pub fn MenuItemNode(
    item_key: String,
    depth: usize,
    dnd: DndSignals<String>,
    /// Keys whose settings body is expanded; outlives row re-creation
    open_rows: RwSignal<HashSet<String>>,
) -> AnyView {
    let store = use_admin_store();
    let open = {
        let key = item_key.clone();
        Memo::new(move |_| open_rows.with(|rows| rows.contains(&key)))
    };

    let fragment = {
        let key = item_key.clone();
        Memo::new(move |_| item_fragment(&store.menu().read(), &key))
    };
    let child_keys = {
        let key = item_key.clone();
        Memo::new(move |_| store.menu().read().child_keys(Some(&key)))
    };
    let has_children = {
        let key = item_key.clone();
        Memo::new(move |_| store.menu().read().has_children(&key))
    };

    let on_mousedown = make_on_mousedown(dnd, item_key.clone());
    let on_mouseenter = make_on_item_mouseenter(dnd, item_key.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    let node_class = {
        let key = item_key.clone();
        let target = DropTarget::Item(item_key.clone());
        move || {
            let mut c = String::from("menu-item");
            if dnd.is_dragging(&key) { c.push_str(" dragging"); }
            if dnd.is_target(&target) { c.push_str(" drop-target"); }
            c
        }
    };

    // A drag that ends over the header must not toggle the accordion
    let toggle = {
        let key = item_key.clone();
        move |_: web_sys::MouseEvent| {
            if dnd.drag_just_ended_read.get_untracked() {
                return;
            }
            open_rows.update(|rows| {
                if !rows.remove(&key) {
                    rows.insert(key.clone());
                }
            });
        }
    };

    let on_label_change = {
        let key = item_key.clone();
        move |ev: web_sys::Event| {
            if let Some(label) = event_value(&ev) {
                store_mutate_menu(&store, "set_label", |tree| tree.set_label(&key, &label));
            }
        }
    };

    let on_parent_change = {
        let key = item_key.clone();
        move |ev: web_sys::Event| {
            let Some(value) = event_value(&ev) else { return };
            let parent = (!value.is_empty()).then_some(value);
            log::debug!("[MENU] Reparent {} under {:?}", key, parent);
            store_mutate_menu(&store, "reparent", |tree| tree.reparent(&key, parent.as_deref()));
        }
    };

    let on_order_change = {
        let key = item_key.clone();
        move |ev: web_sys::Event| {
            let Some(position) = event_value(&ev).and_then(|v| v.parse::<usize>().ok()) else { return };
            store_mutate_menu(&store, "reorder", |tree| tree.reorder(&key, position));
        }
    };

    let on_remove = {
        let key = item_key.clone();
        move |ev: web_sys::MouseEvent| {
            ev.prevent_default();
            if let Some(removed) = store_mutate_menu(&store, "remove", |tree| tree.remove(&key)) {
                log::info!("[MENU] Removed {} item(s) with {}", removed.len(), key);
                open_rows.update(|rows| rows.retain(|k| !removed.contains(k)));
            }
        }
    };

    let children_parent = item_key.clone();
    let body_id = format!("{}-body", item_key);
    let controls_id = body_id.clone();

    view! {
        <div class=node_class data-key=item_key.clone() data-depth=depth.to_string()>
            <div class="accordion">
                <div
                    class="item-header"
                    on:mousedown=on_mousedown
                    on:mouseenter=on_mouseenter
                    on:mouseleave=on_mouseleave
                    on:click=toggle
                >
                    <span class="menu-item-name">{move || fragment.get().map(|f| f.name).unwrap_or_default()}</span>
                    <span class="menu-type">{move || fragment.get().map(|f| f.item_type.to_string()).unwrap_or_default()}</span>
                    <span
                        class="menu-toggle"
                        aria-expanded=move || open.get().to_string()
                        aria-controls=controls_id
                    >
                        {move || if open.get() { "▲" } else { "▼" }}
                    </span>
                </div>

                <Show when=move || open.get()>
                    <div id=body_id.clone() class="item-body">
                        <div class="form-group">
                            <label>"Navigation Label"</label>
                            <input
                                type="text"
                                name="menu-item-name"
                                class="form-control"
                                prop:value=move || fragment.get().map(|f| f.label).unwrap_or_default()
                                on:change=on_label_change.clone()
                            />
                        </div>

                        {move || fragment.get().and_then(|f| f.url).map(|url| view! {
                            <p class="menu-item-url">{url}</p>
                        })}

                        <div class="form-group">
                            <label>"Menu Parent"</label>
                            <select name="parent-select" class="parent-select form-control" on:change=on_parent_change.clone()>
                                {move || fragment.get().map(|f| f.parent_choices).unwrap_or_default().into_iter().map(|choice| {
                                    view! {
                                        <option value=choice.key.unwrap_or_default() selected=choice.selected>
                                            {choice.name}
                                        </option>
                                    }
                                }).collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"Menu Order"</label>
                            <select name="order-select" class="order-select form-control" on:change=on_order_change.clone()>
                                {move || {
                                    let (choices, current) = fragment.get()
                                        .map(|f| (f.order_choices, f.order))
                                        .unwrap_or_default();
                                    choices.into_iter().map(|n| view! {
                                        <option value=n.to_string() selected={n == current}>{n}</option>
                                    }).collect_view()
                                }}
                            </select>
                        </div>

                        <div class="item-controls">
                            <a href="#" class="btn remove-item-btn" on:click=on_remove.clone()>"Remove"</a>
                        </div>
                    </div>
                </Show>
            </div>

            <Show when=move || has_children.get()>
                {
                    let parent = children_parent.clone();
                    let first_gap_parent = children_parent.clone();
                    view! {
                        <div class="menu-children">
                            <DropZone dnd=dnd parent=Some(first_gap_parent) position=1usize />
                            <For
                                each=move || child_keys.get()
                                key=|key| key.clone()
                                children=move |key| {
                                    let gap_after = {
                                        let key = key.clone();
                                        Signal::derive(move || store.menu().read().slot_after(&key))
                                    };
                                    view! {
                                        <MenuItemNode item_key=key depth=depth + 1 dnd=dnd open_rows=open_rows />
                                        <DropZone dnd=dnd parent=Some(parent.clone()) position=gap_after />
                                    }
                                }
                            />
                        </div>
                    }
                }
            </Show>
        </div>
    }
    .into_any()
}
