//! Loading Button Component
//!
//! Submit button that is disabled and shows a spinner while `loading` is true.

use leptos::prelude::*;

#[component]
pub fn LoadingButton(
    #[prop(into)] label: String,
    #[prop(into)] loading: Signal<bool>,
    #[prop(into, default = "btn btn-primary".to_string())] class: String,
    #[prop(into)] on_click: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=move || if loading.get() { format!("{} loading", class) } else { class.clone() }
            disabled=move || loading.get()
            aria-busy=move || loading.get().to_string()
            on:click=move |ev| {
                ev.prevent_default();
                if !loading.get_untracked() {
                    on_click.run(());
                }
            }
        >
            <Show when=move || loading.get()>
                <span class="spinner" aria-hidden="true"></span>
            </Show>
            <span class="btn-label">{label}</span>
        </button>
    }
}
