//! Custom Link Form Component
//!
//! Adds an arbitrary URL to the menu.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::Collapsible;
use crate::context::use_admin_context;
use crate::error::AdminError;
use crate::menu::ItemSource;
use crate::notify::Notifier;
use crate::store::{use_admin_store, AdminStateStoreFields, StoreNotifier};

fn input_value(ev: &web_sys::Event) -> String {
    ev.target()
        .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| input.value())
        .unwrap_or_default()
}

#[component]
pub fn CustomLinkForm() -> impl IntoView {
    let ctx = use_admin_context();
    let store = use_admin_store();
    let notifier = StoreNotifier::new(store, ctx.config.toast_timeout_ms);

    let url = RwSignal::new(String::new());
    let text = RwSignal::new(String::new());

    let add_link = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let source = ItemSource::Custom {
            url: url.get_untracked(),
            text: text.get_untracked(),
            ref_id: js_sys::Date::now() as i64,
        };
        let result = store.menu().write().add(source);
        match result {
            Ok(key) => {
                log::info!("[MENU] Added custom link {:?}", key);
                url.set(String::new());
                text.set(String::new());
            }
            Err(e) => notifier.error(&AdminError::from(e).user_message()),
        }
    };

    view! {
        <Collapsible header=|| "Custom Links" class="custom-links">
            <form class="custom-link-form" on:submit=add_link>
                <div class="form-group">
                    <label>"URL"</label>
                    <input
                        type="url"
                        name="custom_url"
                        placeholder="https://"
                        prop:value=move || url.get()
                        on:input=move |ev| url.set(input_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label>"Link Text"</label>
                    <input
                        type="text"
                        name="custom_text"
                        prop:value=move || text.get()
                        on:input=move |ev| text.set(input_value(&ev))
                    />
                </div>
                <button type="submit" class="btn add-to-menu">"Add to Menu"</button>
            </form>
        </Collapsible>
    }
}
