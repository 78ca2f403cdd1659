//! Menu Builder Component
//!
//! Two-column editor: item sources on the left, the menu structure with
//! drag-and-drop on the right. Uses leptos-dragdrop with explicit
//! DropZones between siblings.

use std::collections::HashSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_dragdrop::*;

use crate::components::{AvailableItems, CustomLinkForm, DropZone, LoadingButton, MenuItemNode};
use crate::context::use_admin_context;
use crate::menu::{self, MenuTree, SaveOutcome};
use crate::models::MenuPageData;
use crate::store::{store_mutate_menu, use_admin_store, AdminStateStoreFields, StoreNotifier};

#[component]
pub fn MenuBuilder(page: MenuPageData) -> impl IntoView {
    let ctx = use_admin_context();
    let store = use_admin_store();

    let MenuPageData { slug, items, sources } = page;
    log::info!("[MENU] Loading menu {:?} with {} item(s)", slug, items.len());
    store.menu().set(MenuTree::from_snapshot(items));

    let dnd = create_dnd_signals::<String>();
    let open_rows = RwSignal::new(HashSet::<String>::new());

    bind_global_mouseup(dnd, move |dragged, target| {
        log::debug!("[DND] Drop {} on {:?}", dragged, target);
        match target {
            DropTarget::Item(parent) => {
                store_mutate_menu(&store, "drop", |tree| tree.reparent(&dragged, Some(&parent)));
            }
            DropTarget::Zone(parent, slot) => {
                store_mutate_menu(&store, "drop", |tree| tree.drop_at(&dragged, parent.as_deref(), slot));
            }
        }
    });

    let root_keys = Memo::new(move |_| store.menu().read().child_keys(None));
    let is_empty = Memo::new(move |_| store.menu().read().is_empty());
    let saving = Signal::derive(move || store.saving().get());

    let on_save = Callback::new(move |_: ()| {
        if store.saving().get_untracked() {
            return;
        }
        store.saving().set(true);
        let payload = store.menu().read_untracked().to_payload();
        let notifier = StoreNotifier::new(store, ctx.config.toast_timeout_ms);
        let api = ctx.api().clone();
        let slug = slug.clone();
        spawn_local(async move {
            if menu::save(&payload, &slug, &api, &notifier).await == SaveOutcome::Failed {
                log::warn!("[SAVE] Menu {:?} left unsaved", slug);
            }
            store.saving().set(false);
        });
    });

    view! {
        <div class="menu-builder">
            <aside class="menu-sources">
                <AvailableItems sources=sources />
                <CustomLinkForm />
            </aside>

            <section class="menu-structure">
                <h2>"Menu Structure"</h2>

                <Show when=move || is_empty.get()>
                    <p class="no-menu-items">"No menu items yet. Add items from the left."</p>
                </Show>

                <div class="menu-items-list">
                    <DropZone dnd=dnd parent=None position=1usize />
                    <For
                        each=move || root_keys.get()
                        key=|key| key.clone()
                        children=move |key| {
                            let gap_after = {
                                let key = key.clone();
                                Signal::derive(move || store.menu().read().slot_after(&key))
                            };
                            view! {
                                <MenuItemNode item_key=key depth=0 dnd=dnd open_rows=open_rows />
                                <DropZone dnd=dnd parent=None position=gap_after />
                            }
                        }
                    />
                </div>

                <div class="menu-foot">
                    <LoadingButton label="Save Menu" loading=saving on_click=on_save />
                </div>
            </section>
        </div>
    }
}
