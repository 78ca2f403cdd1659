//! Cycle Guard
//!
//! Parent assignments must never make an item its own ancestor.

use std::collections::{HashSet, VecDeque};

use super::store::ItemStore;

/// Whether `proposed_parent` may become the parent of `candidate`.
///
/// Rejects self-parenting, unknown parents and any parent whose ancestor
/// chain already contains `candidate`.
pub fn is_valid_parent(store: &ItemStore, candidate: &str, proposed_parent: &str) -> bool {
    if candidate == proposed_parent || !store.contains(proposed_parent) {
        return false;
    }

    let mut current = Some(proposed_parent);
    let mut steps = 0;
    while let Some(key) = current {
        if key == candidate {
            return false;
        }
        // A chain longer than the store is already corrupt
        steps += 1;
        if steps > store.len() {
            return false;
        }
        current = store.get(key).and_then(|item| item.parent_key.as_deref());
    }
    true
}

/// Whether walking up from `key` leads back to `key` itself. Chains that
/// only run into some other cycle do not count.
pub fn on_cycle(store: &ItemStore, key: &str) -> bool {
    let mut seen = HashSet::new();
    let mut current = store.get(key).and_then(|item| item.parent_key.as_deref());
    while let Some(ancestor) = current {
        if ancestor == key {
            return true;
        }
        if !seen.insert(ancestor) {
            return false;
        }
        current = store.get(ancestor).and_then(|item| item.parent_key.as_deref());
    }
    false
}

/// All descendants of `key`, breadth-first
pub fn descendants(store: &ItemStore, key: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut to_visit = VecDeque::from([key.to_string()]);

    while let Some(current) = to_visit.pop_front() {
        for item in store.values() {
            let is_child = item.parent_key.as_deref() == Some(current.as_str());
            if is_child && item.key != key && !result.contains(&item.key) {
                to_visit.push_back(item.key.clone());
                result.push(item.key.clone());
            }
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ItemType, MenuItem};

    fn make_item(key: &str, parent: Option<&str>) -> MenuItem {
        MenuItem {
            key: key.to_string(),
            ref_id: 0,
            item_type: ItemType::Custom,
            name: key.to_uppercase(),
            label: key.to_uppercase(),
            parent_key: parent.map(str::to_string),
            order: 1,
            url: Some("/".to_string()),
        }
    }

    /// a -> b -> c, plus a separate root d
    fn chain() -> ItemStore {
        let mut store = ItemStore::new();
        store.set(make_item("a", None));
        store.set(make_item("b", Some("a")));
        store.set(make_item("c", Some("b")));
        store.set(make_item("d", None));
        store
    }

    #[test]
    fn test_rejects_self_and_descendants() {
        let store = chain();
        assert!(!is_valid_parent(&store, "a", "a"));
        assert!(!is_valid_parent(&store, "a", "b"));
        assert!(!is_valid_parent(&store, "a", "c"));
        assert!(!is_valid_parent(&store, "b", "c"));
    }

    #[test]
    fn test_accepts_non_descendants() {
        let store = chain();
        assert!(is_valid_parent(&store, "a", "d"));
        assert!(is_valid_parent(&store, "c", "a"));
        assert!(is_valid_parent(&store, "d", "c"));
        assert!(is_valid_parent(&store, "b", "d"));
    }

    #[test]
    fn test_rejects_unknown_parent() {
        let store = chain();
        assert!(!is_valid_parent(&store, "a", "zzz"));
    }

    #[test]
    fn test_exhaustive_against_descendants() {
        let store = chain();
        let keys: Vec<String> = store.keys().map(str::to_string).collect();
        for k in &keys {
            let below = descendants(&store, k);
            for p in &keys {
                let expected = p != k && !below.contains(p);
                assert_eq!(is_valid_parent(&store, k, p), expected, "k={} p={}", k, p);
            }
        }
    }

    #[test]
    fn test_descendants_breadth_first() {
        let mut store = chain();
        store.set(make_item("e", Some("a")));
        assert_eq!(descendants(&store, "a"), vec!["b", "e", "c"]);
        assert!(descendants(&store, "d").is_empty());
    }

    #[test]
    fn test_on_cycle_only_for_members() {
        let mut store = ItemStore::new();
        store.set(make_item("w", Some("x")));
        store.set(make_item("x", Some("y")));
        store.set(make_item("y", Some("x")));
        store.set(make_item("r", None));
        assert!(on_cycle(&store, "x"));
        assert!(on_cycle(&store, "y"));
        assert!(!on_cycle(&store, "w"));
        assert!(!on_cycle(&store, "r"));
    }

    #[test]
    fn test_corrupt_cycle_terminates() {
        let mut store = ItemStore::new();
        store.set(make_item("x", Some("y")));
        store.set(make_item("y", Some("x")));
        store.set(make_item("z", None));
        assert!(!is_valid_parent(&store, "z", "x"));
        let below = descendants(&store, "x");
        assert_eq!(below, vec!["y"]);
    }
}
