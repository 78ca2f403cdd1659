//! Category Quick-Add Component
//!
//! Category checkbox list for the product form with an inline
//! "add new category" block.

use leptos::html::Div;
use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::components::{Collapsible, LoadingButton};
use crate::context::use_admin_context;
use crate::error::AdminError;
use crate::models::{CategoryCreated, CategoryPageData};
use crate::notify::Notifier;
use crate::store::{use_admin_store, StoreNotifier};

pub const EMPTY_NAME_MESSAGE: &str = "New Category field cannot be empty";
pub const CATEGORY_ADDED_MESSAGE: &str = "Category added successfully";

/// A category row of the checkbox list
#[derive(Debug, Clone, PartialEq)]
struct CategoryRow {
    id: i64,
    name: String,
    checked: bool,
}

#[component]
pub fn CategoryQuickAdd(page: CategoryPageData) -> impl IntoView {
    let ctx = use_admin_context();
    let store = use_admin_store();
    let notifier = StoreNotifier::new(store, ctx.config.toast_timeout_ms);

    let rows = RwSignal::new(
        page.categories
            .into_iter()
            .map(|c| CategoryRow { id: c.id, name: c.name, checked: false })
            .collect::<Vec<_>>(),
    );
    let parent_select = RwSignal::new(page.parent_select);
    let name = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let select_ref = NodeRef::<Div>::new();

    // The parent select is server-rendered markup; read whatever it holds now
    let selected_parent = move || -> String {
        select_ref
            .get_untracked()
            .and_then(|div| div.query_selector("select").ok().flatten())
            .and_then(|el| el.dyn_into::<web_sys::HtmlSelectElement>().ok())
            .map(|select| select.value())
            .unwrap_or_default()
    };

    let on_created = move |created: CategoryCreated| {
        let CategoryCreated { select_field, category } = created;
        log::info!("[CATEGORY] Created {} ({})", category.name, category.id);
        parent_select.set(select_field);
        rows.update(|rows| {
            rows.insert(0, CategoryRow { id: category.id, name: category.name, checked: true });
        });
        name.set(String::new());
        notifier.success(CATEGORY_ADDED_MESSAGE);
    };

    let submit = Callback::new(move |_: ()| {
        let new_name = name.get_untracked().trim().to_string();
        if new_name.is_empty() {
            notifier.error(EMPTY_NAME_MESSAGE);
            return;
        }
        let parent = selected_parent();
        let ctx = ctx.clone();
        loading.set(true);
        spawn_local(async move {
            match ctx.api().create_category(&new_name, &parent).await {
                Ok(created) => on_created(created),
                Err(AdminError::Unauthorized) => ctx.redirect_to_login(),
                Err(e) => {
                    log::error!("[CATEGORY] Create {:?} failed: {}", new_name, e);
                    notifier.error(&e.user_message());
                }
            }
            loading.set(false);
        });
    });

    view! {
        <div class="category-quick-add">
            <ul class="category-list">
                <For
                    each=move || rows.get()
                    key=|row| row.id
                    children=move |row| {
                        let id = row.id;
                        let input_id = format!("category-{}", id);
                        view! {
                            <li>
                                <input
                                    type="checkbox"
                                    name="categories"
                                    id=input_id.clone()
                                    value=id.to_string()
                                    prop:checked=move || rows.with(|rows| rows.iter().any(|r| r.id == id && r.checked))
                                    on:change=move |ev| {
                                        let checked = ev.target()
                                            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                                            .map(|input| input.checked())
                                            .unwrap_or(false);
                                        rows.update(|rows| {
                                            if let Some(r) = rows.iter_mut().find(|r| r.id == id) {
                                                r.checked = checked;
                                            }
                                        });
                                    }
                                />
                                <label for=input_id>{row.name}</label>
                            </li>
                        }
                    }
                />
            </ul>

            <Collapsible header=|| "+ Add New Category" class="new-category">
                <div class="form-group">
                    <label>"New Category"</label>
                    <input
                        type="text"
                        name="new_category"
                        class="form-control"
                        prop:value=move || name.get()
                        on:input=move |ev| {
                            if let Some(input) = ev.target().and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok()) {
                                name.set(input.value());
                            }
                        }
                    />
                </div>
                <div class="form-group">
                    <label>"Parent Category"</label>
                    <div class="parent-select" node_ref=select_ref inner_html=move || parent_select.get()></div>
                </div>
                <LoadingButton label="Add New Category" loading=loading on_click=submit />
            </Collapsible>
        </div>
    }
}
