//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::menu::{ItemSource, MenuTree, TreeResult};
use crate::notify::{AlertCategory, AlertOptions, Notifier, ToastQueue};

/// Global admin state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Navigation menu being edited
    pub menu: MenuTree,
    /// Visible toasts, newest first
    pub toasts: ToastQueue,
    /// A menu save is in flight
    pub saving: bool,
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Run a mutation against the menu tree, logging rejected operations
pub fn store_mutate_menu<T>(store: &AdminStore, op: &str, f: impl FnOnce(&mut MenuTree) -> TreeResult<T>) -> Option<T> {
    match f(&mut *store.menu().write()) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("[MENU] {} rejected: {}", op, e);
            None
        }
    }
}

/// Add several sources, returning the keys that were created
pub fn store_add_sources(store: &AdminStore, sources: Vec<ItemSource>) -> Vec<String> {
    let menu = store.menu();
    let mut tree = menu.write();
    let mut added = Vec::new();
    for source in sources {
        match tree.add(source) {
            Ok(Some(key)) => added.push(key),
            Ok(None) => {}
            Err(e) => log::warn!("[MENU] add rejected: {}", e),
        }
    }
    added
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &AdminStore, id: u64) {
    store.toasts().write().dismiss(id);
}

/// `Notifier` that renders into the toast host
#[derive(Clone, Copy)]
pub struct StoreNotifier {
    store: AdminStore,
    default_timeout_ms: u32,
}

impl StoreNotifier {
    pub fn new(store: AdminStore, default_timeout_ms: u32) -> Self {
        Self { store, default_timeout_ms }
    }

    fn defaults(&self) -> AlertOptions {
        AlertOptions {
            timeout_ms: self.default_timeout_ms,
            ..AlertOptions::default()
        }
    }
}

impl Notifier for StoreNotifier {
    fn notify(&self, message: &str, category: AlertCategory, options: AlertOptions) {
        let id = self.store.toasts().write().push(message, category, options);
        if options.timeout_ms > 0 {
            let store = self.store;
            Timeout::new(options.timeout_ms, move || store_dismiss_toast(&store, id)).forget();
        }
    }

    fn success(&self, message: &str) {
        self.notify(message, AlertCategory::Success, self.defaults());
    }

    fn error(&self, message: &str) {
        self.notify(message, AlertCategory::Error, self.defaults());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemType;

    fn listed(ref_id: i64, name: &str) -> ItemSource {
        ItemSource::Listed { item_type: ItemType::Page, ref_id, name: name.to_string() }
    }

    #[test]
    fn test_add_sources_skips_items_already_in_menu() {
        let store = Store::new(AdminState::default());
        let added = store_add_sources(&store, vec![listed(1, "Home"), listed(2, "About"), listed(1, "Home")]);
        assert_eq!(added.len(), 2);

        let added = store_add_sources(&store, vec![listed(2, "About"), listed(3, "Contact")]);
        assert_eq!(added.len(), 1);
        assert_eq!(store.menu().read_untracked().len(), 3);
    }
}
