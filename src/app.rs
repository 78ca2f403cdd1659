//! Admin Panel App
//!
//! Mounts every panel whose page data island is present.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{CategoryQuickAdd, MenuBuilder, TagAutocomplete, ToastHost};
use crate::config::{read_island, AdminConfig};
use crate::context::AdminContext;
use crate::models::{CategoryPageData, FlashMessage, MenuPageData, TagPageData};
use crate::notify::replay_flashes;
use crate::store::{AdminState, StoreNotifier};

pub const MENU_ISLAND: &str = "menu-builder-data";
pub const TAGS_ISLAND: &str = "product-tags-data";
pub const CATEGORY_ISLAND: &str = "category-quick-add-data";
pub const FLASH_ISLAND: &str = "flash-messages";

/// Read an optional panel island, logging malformed data
fn panel_data<T: serde::de::DeserializeOwned>(id: &str) -> Option<T> {
    match read_island::<T>(id) {
        Ok(data) => data,
        Err(e) => {
            log::error!("[APP] Skipping panel: {}", e);
            None
        }
    }
}

#[component]
pub fn App(config: AdminConfig) -> impl IntoView {
    let toast_timeout_ms = config.toast_timeout_ms;
    let store = Store::new(AdminState::default());
    provide_context(AdminContext::new(config));
    provide_context(store);

    if let Some(flashes) = panel_data::<Vec<FlashMessage>>(FLASH_ISLAND) {
        replay_flashes(&StoreNotifier::new(store, toast_timeout_ms), &flashes, toast_timeout_ms);
    }

    let menu = panel_data::<MenuPageData>(MENU_ISLAND);
    let tags = panel_data::<TagPageData>(TAGS_ISLAND);
    let categories = panel_data::<CategoryPageData>(CATEGORY_ISLAND);
    log::debug!(
        "[APP] Panels: menu={} tags={} categories={}",
        menu.is_some(),
        tags.is_some(),
        categories.is_some()
    );

    view! {
        <ToastHost />
        {menu.map(|page| view! { <MenuBuilder page=page /> })}
        {tags.map(|page| view! { <TagAutocomplete initial_tags=page.tags /> })}
        {categories.map(|page| view! { <CategoryQuickAdd page=page /> })}
    }
}
