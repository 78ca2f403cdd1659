//! Available Items Panel
//!
//! One collapsible group per source type (pages, categories, tags) with
//! checkboxes and an "Add to Menu" action.

use leptos::prelude::*;

use crate::components::Collapsible;
use crate::menu::ItemSource;
use crate::models::SourceGroup;
use crate::store::{store_add_sources, use_admin_store};

/// State of a group's select-all box as `(checked, indeterminate)`
pub fn select_all_state(checked: usize, total: usize) -> (bool, bool) {
    let all = total > 0 && checked == total;
    (all, checked > 0 && !all)
}

#[component]
fn SourceGroupPanel(group: SourceGroup) -> impl IntoView {
    let store = use_admin_store();
    let checked = RwSignal::new(Vec::<i64>::new());

    let SourceGroup { item_type, title, entries } = group;
    let total = entries.len();
    let all_ids: Vec<i64> = entries.iter().map(|e| e.id).collect();
    let entries = StoredValue::new(entries);

    let state = Memo::new(move |_| select_all_state(checked.with(Vec::len), total));

    let toggle_all = move |_: web_sys::Event| {
        if state.get_untracked().0 {
            checked.set(Vec::new());
        } else {
            checked.set(all_ids.clone());
        }
    };

    let add_checked = move |_: web_sys::MouseEvent| {
        let ids = checked.get_untracked();
        let sources: Vec<ItemSource> = entries.with_value(|entries| {
            entries
                .iter()
                .filter(|e| ids.contains(&e.id))
                .map(|e| ItemSource::Listed { item_type, ref_id: e.id, name: e.name.clone() })
                .collect()
        });
        let added = store_add_sources(&store, sources);
        log::info!("[MENU] Added {} {} item(s)", added.len(), item_type);
        checked.set(Vec::new());
    };

    let group_id = format!("{}-group", item_type);

    view! {
        <Collapsible header=move || title.clone() class=group_id>
            <label class="select-all">
                <input
                    type="checkbox"
                    prop:checked=move || state.get().0
                    prop:indeterminate=move || state.get().1
                    disabled={total == 0}
                    on:change=toggle_all.clone()
                />
                " Select All"
            </label>

            <ul class="source-entries">
                {entries.get_value().into_iter().map(|entry| {
                    let id = entry.id;
                    let input_id = format!("{}-{}", item_type, id);
                    view! {
                        <li>
                            <input
                                type="checkbox"
                                id=input_id.clone()
                                prop:checked=move || checked.with(|c| c.contains(&id))
                                on:change=move |_| checked.update(|c| {
                                    if let Some(pos) = c.iter().position(|x| *x == id) {
                                        c.remove(pos);
                                    } else {
                                        c.push(id);
                                    }
                                })
                            />
                            <label for=input_id>{entry.name}</label>
                        </li>
                    }
                }).collect_view()}
            </ul>

            <button type="button" class="btn add-to-menu" on:click=add_checked.clone()>"Add to Menu"</button>
        </Collapsible>
    }
}

#[component]
pub fn AvailableItems(sources: Vec<SourceGroup>) -> impl IntoView {
    view! {
        <div class="available-items">
            {sources.into_iter().map(|group| view! { <SourceGroupPanel group=group /> }).collect_view()}
        </div>
    }
}
