//! Collapsible Component
//!
//! Accordion block: a clickable header toggling its body.

use leptos::prelude::*;

#[component]
pub fn Collapsible(
    /// Header content
    #[prop(into)] header: ViewFn,
    #[prop(default = false)] open: bool,
    #[prop(into, default = String::new())] class: String,
    children: ChildrenFn,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(open);

    view! {
        <div class=move || {
            let mut c = format!("collapsible {}", class);
            if expanded.get() { c.push_str(" open"); }
            c
        }>
            <div
                class="collapsible-header"
                role="button"
                aria-expanded=move || expanded.get().to_string()
                on:click=move |_| set_expanded.update(|v| *v = !*v)
            >
                <span class="collapsible-title">{header.run()}</span>
                <span class="collapsible-arrow">{move || if expanded.get() { "▼" } else { "▶" }}</span>
            </div>
            <Show when=move || expanded.get()>
                <div class="collapsible-body">{children()}</div>
            </Show>
        </div>
    }
}
