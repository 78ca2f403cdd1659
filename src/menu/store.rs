//! Item Store
//!
//! Authoritative key -> record map. Iteration follows insertion order,
//! not sibling order.

use crate::models::MenuItem;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemStore {
    items: Vec<MenuItem>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.key == key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut MenuItem> {
        self.items.iter_mut().find(|item| item.key == key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Store `item` under its key. Last write wins; an overwritten entry
    /// keeps its original insertion slot.
    pub fn set(&mut self, item: MenuItem) {
        match self.get_mut(&item.key) {
            Some(existing) => *existing = item,
            None => self.items.push(item),
        }
    }

    pub fn delete(&mut self, key: &str) -> Option<MenuItem> {
        let idx = self.items.iter().position(|item| item.key == key)?;
        Some(self.items.remove(idx))
    }

    pub fn values(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemType;

    fn make_item(key: &str, name: &str) -> MenuItem {
        MenuItem {
            key: key.to_string(),
            ref_id: 1,
            item_type: ItemType::Page,
            name: name.to_string(),
            label: name.to_string(),
            parent_key: None,
            order: 1,
            url: None,
        }
    }

    #[test]
    fn test_set_overwrites_in_place() {
        let mut store = ItemStore::new();
        store.set(make_item("a", "A"));
        store.set(make_item("b", "B"));
        store.set(make_item("a", "A2"));

        assert_eq!(store.len(), 2);
        let keys: Vec<&str> = store.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(store.get("a").unwrap().name, "A2");
    }

    #[test]
    fn test_delete() {
        let mut store = ItemStore::new();
        store.set(make_item("a", "A"));
        assert!(store.delete("a").is_some());
        assert!(store.delete("a").is_none());
        assert!(store.is_empty());
    }
}
