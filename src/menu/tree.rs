//! Tree Mutator
//!
//! `MenuTree` owns the Item Store and is the only way to change it. Every
//! public mutation leaves the store consistent: parents exist, parent chains
//! terminate and each sibling context is numbered `1..N`.

use super::guard::{descendants, is_valid_parent, on_cycle};
use super::store::ItemStore;
use crate::models::{ItemType, MenuItem, SavePayload};

pub type TreeResult<T> = Result<T, TreeError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    NotFound(String),
    /// The parent assignment would create a cycle
    CycleRejected { key: String, parent: String },
    InvalidInput(String),
}

impl std::fmt::Display for TreeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TreeError::NotFound(key) => write!(f, "Menu item not found: {}", key),
            TreeError::CycleRejected { key, parent } => {
                write!(f, "Cannot move {} under {}: it would become its own ancestor", key, parent)
            }
            TreeError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
        }
    }
}

impl std::error::Error for TreeError {}

/// Where a new menu item comes from
#[derive(Debug, Clone, PartialEq)]
pub enum ItemSource {
    /// A checked entry of the available-items panel
    Listed { item_type: ItemType, ref_id: i64, name: String },
    /// The custom link form; `ref_id` is a millisecond timestamp
    Custom { url: String, text: String, ref_id: i64 },
}

/// Key of a listed (non-custom) source
pub fn listed_key(item_type: ItemType, ref_id: i64) -> String {
    format!("{}-{}", item_type.as_str(), ref_id)
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuTree {
    store: ItemStore,
}

impl MenuTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tree from backend records, repairing anything that would
    /// break the invariants.
    pub fn from_snapshot(items: Vec<MenuItem>) -> Self {
        let mut store = ItemStore::new();
        for item in items {
            if store.contains(&item.key) {
                log::warn!("[MENU] duplicate key {} in snapshot, keeping the last record", item.key);
            }
            store.set(item);
        }

        // Dangling parents go to root
        let keys: Vec<String> = store.keys().map(str::to_string).collect();
        for key in &keys {
            let dangling = store
                .get(key)
                .and_then(|item| item.parent_key.clone())
                .filter(|parent| !store.contains(parent));
            if let Some(parent) = dangling {
                log::warn!("[MENU] {} references missing parent {}, moving to root", key, parent);
                if let Some(item) = store.get_mut(key) {
                    item.parent_key = None;
                }
            }
        }

        // Break cycles by detaching the first member found on each one
        for key in &keys {
            if on_cycle(&store, key) {
                log::warn!("[MENU] {} is part of a parent cycle, moving to root", key);
                if let Some(item) = store.get_mut(key) {
                    item.parent_key = None;
                }
            }
        }

        let mut tree = Self { store };
        let mut contexts: Vec<Option<String>> = vec![None];
        for item in tree.store.values() {
            if let Some(parent) = &item.parent_key {
                if !contexts.contains(&Some(parent.clone())) {
                    contexts.push(Some(parent.clone()));
                }
            }
        }
        for parent in contexts {
            tree.renumber(parent.as_deref());
        }
        tree
    }

    pub fn store(&self) -> &ItemStore {
        &self.store
    }

    pub fn get(&self, key: &str) -> Option<&MenuItem> {
        self.store.get(key)
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Children of `parent` (None = root) in sibling order
    pub fn children(&self, parent: Option<&str>) -> Vec<&MenuItem> {
        let mut children: Vec<&MenuItem> = self
            .store
            .values()
            .filter(|item| item.parent_key.as_deref() == parent)
            .collect();
        // Stable sort keeps insertion order for equal orders
        children.sort_by_key(|item| item.order);
        children
    }

    pub fn child_keys(&self, parent: Option<&str>) -> Vec<String> {
        self.children(parent).into_iter().map(|item| item.key.clone()).collect()
    }

    /// Gap slot directly after `key` among its siblings
    pub fn slot_after(&self, key: &str) -> usize {
        self.store.get(key).map_or(1, |item| item.order as usize + 1)
    }

    pub fn has_children(&self, key: &str) -> bool {
        self.store.values().any(|item| item.parent_key.as_deref() == Some(key))
    }

    /// Number of items sharing `key`'s parent, `key` included
    pub fn sibling_count(&self, key: &str) -> usize {
        match self.store.get(key) {
            Some(item) => self.children(item.parent_key.as_deref()).len(),
            None => 0,
        }
    }

    /// Insert a new root item. Returns the new key, or `None` when the
    /// listed reference is already in the menu.
    pub fn add(&mut self, source: ItemSource) -> TreeResult<Option<String>> {
        let order = self.children(None).len() as u32 + 1;

        let item = match source {
            ItemSource::Listed { item_type, ref_id, name } => {
                let key = listed_key(item_type, ref_id);
                if self.store.contains(&key) {
                    log::debug!("[MENU] {} already in menu, skipping", key);
                    return Ok(None);
                }
                let name = name.trim().to_string();
                MenuItem {
                    key,
                    ref_id,
                    item_type,
                    label: name.clone(),
                    name,
                    parent_key: None,
                    order,
                    url: None,
                }
            }
            ItemSource::Custom { url, text, ref_id } => {
                let url = url.trim();
                let text = text.trim();
                if url.is_empty() || text.is_empty() {
                    return Err(TreeError::InvalidInput("URL and Link Text required".to_string()));
                }
                let mut ref_id = ref_id;
                while self.store.contains(&listed_key(ItemType::Custom, ref_id)) {
                    ref_id += 1;
                }
                MenuItem {
                    key: listed_key(ItemType::Custom, ref_id),
                    ref_id,
                    item_type: ItemType::Custom,
                    name: text.to_string(),
                    label: text.to_string(),
                    parent_key: None,
                    order,
                    url: Some(url.to_string()),
                }
            }
        };

        let key = item.key.clone();
        log::debug!("[MENU] added {} at root position {}", key, order);
        self.store.set(item);
        Ok(Some(key))
    }

    /// Remove `key` and its whole subtree. Returns every removed key.
    pub fn remove(&mut self, key: &str) -> TreeResult<Vec<String>> {
        let parent = self
            .store
            .get(key)
            .ok_or_else(|| TreeError::NotFound(key.to_string()))?
            .parent_key
            .clone();

        let mut removed = vec![key.to_string()];
        removed.extend(descendants(&self.store, key));
        for k in &removed {
            self.store.delete(k);
        }
        self.renumber(parent.as_deref());
        log::debug!("[MENU] removed {:?}", removed);
        Ok(removed)
    }

    /// Move `key` under `new_parent` (None = root), appended after the
    /// existing children.
    pub fn reparent(&mut self, key: &str, new_parent: Option<&str>) -> TreeResult<()> {
        let current = self.parent_of(key)?;
        if current.as_deref() == new_parent {
            return Ok(());
        }
        self.move_to(key, new_parent, usize::MAX)
    }

    /// Move `key` to the 1-based `position` among its current siblings.
    /// Out-of-range positions are clamped.
    pub fn reorder(&mut self, key: &str, position: usize) -> TreeResult<()> {
        let parent = self.parent_of(key)?;
        self.move_to(key, parent.as_deref(), position)
    }

    /// Drop `key` into the gap `slot` of `parent`'s children as currently
    /// displayed: slot 1 is before the first child, slot N+1 after the last.
    pub fn drop_at(&mut self, key: &str, parent: Option<&str>, slot: usize) -> TreeResult<()> {
        let item = self.store.get(key).ok_or_else(|| TreeError::NotFound(key.to_string()))?;
        let mut position = slot.max(1);
        // Leaving the gap list shifts every later gap up by one
        if item.parent_key.as_deref() == parent && (item.order as usize) < position {
            position -= 1;
        }
        self.move_to(key, parent, position)
    }

    /// Place `key` at `position` (1-based, clamped) under `parent`, then
    /// renumber every touched context.
    pub fn move_to(&mut self, key: &str, parent: Option<&str>, position: usize) -> TreeResult<()> {
        let old_parent = self.parent_of(key)?;

        if let Some(p) = parent {
            if !self.store.contains(p) {
                return Err(TreeError::NotFound(p.to_string()));
            }
            if !is_valid_parent(&self.store, key, p) {
                log::debug!("[MENU] rejected {} -> {}: cycle", key, p);
                return Err(TreeError::CycleRejected {
                    key: key.to_string(),
                    parent: p.to_string(),
                });
            }
        }

        let mut siblings: Vec<String> = self
            .child_keys(parent)
            .into_iter()
            .filter(|k| k != key)
            .collect();
        let index = position.saturating_sub(1).min(siblings.len());
        siblings.insert(index, key.to_string());

        if let Some(item) = self.store.get_mut(key) {
            item.parent_key = parent.map(str::to_string);
        }
        self.assign_orders(&siblings);

        if old_parent.as_deref() != parent {
            self.renumber(old_parent.as_deref());
        }
        log::debug!("[MENU] moved {} under {:?} at {}", key, parent, index + 1);
        Ok(())
    }

    pub fn set_label(&mut self, key: &str, label: &str) -> TreeResult<()> {
        let item = self.store.get_mut(key).ok_or_else(|| TreeError::NotFound(key.to_string()))?;
        item.label = label.to_string();
        Ok(())
    }

    /// Whole-tree save payload, in store order
    pub fn to_payload(&self) -> SavePayload {
        SavePayload {
            items: self.store.values().cloned().collect(),
        }
    }

    fn parent_of(&self, key: &str) -> TreeResult<Option<String>> {
        self.store
            .get(key)
            .map(|item| item.parent_key.clone())
            .ok_or_else(|| TreeError::NotFound(key.to_string()))
    }

    /// Re-number `parent`'s children to `1..N`, keeping their relative order
    fn renumber(&mut self, parent: Option<&str>) {
        let keys = self.child_keys(parent);
        self.assign_orders(&keys);
    }

    fn assign_orders(&mut self, keys: &[String]) {
        for (idx, key) in keys.iter().enumerate() {
            if let Some(item) = self.store.get_mut(key) {
                item.order = idx as u32 + 1;
            }
        }
    }
}
