//! Toast Host Component
//!
//! Renders the store's toast queue, newest first.

use leptos::prelude::*;

use crate::context::use_admin_context;
use crate::notify::Toast;
use crate::store::{store_dismiss_toast, use_admin_store, AdminStateStoreFields};

#[component]
fn ToastView(toast: Toast) -> impl IntoView {
    let store = use_admin_store();
    let login_route = use_admin_context().config.login_route;
    let id = toast.id;
    let category = toast.category;

    view! {
        <div class=format!("alert alert-{}", category.as_str()) role="alert">
            <span class="alert-icon">{category.icon()}</span>
            // Text node, never parsed as markup
            <span class="alert-message">{toast.message}</span>
            {toast.options.login_link.then(|| view! {
                <a class="alert-login" href=login_route>"Log in"</a>
            })}
            <button
                type="button"
                class="alert-close"
                aria-label="Close"
                on:click=move |_| store_dismiss_toast(&store, id)
            >"×"</button>
        </div>
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="alert-container" aria-live="polite">
            <For
                each=move || store.toasts().read().toasts().to_vec()
                key=|toast| toast.id
                children=move |toast| view! { <ToastView toast=toast /> }
            />
        </div>
    }
}
