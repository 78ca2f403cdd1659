//! Renderer view models
//!
//! Pure projections of a `MenuTree` consumed by the menu builder
//! components. Selectors are recomputed from the store on every change.

use super::guard::is_valid_parent;
use super::tree::MenuTree;
use crate::models::ItemType;

/// One option of a parent selector
#[derive(Debug, Clone, PartialEq)]
pub struct ParentChoice {
    /// None = "-- No Parent --"
    pub key: Option<String>,
    pub name: String,
    pub selected: bool,
}

/// Everything needed to draw one menu item's settings body
#[derive(Debug, Clone, PartialEq)]
pub struct ItemFragment {
    pub key: String,
    pub name: String,
    pub item_type: ItemType,
    pub label: String,
    pub url: Option<String>,
    pub parent_choices: Vec<ParentChoice>,
    pub order_choices: Vec<u32>,
    pub order: u32,
}

pub const NO_PARENT_LABEL: &str = "-- No Parent --";

/// Parent options for `key`: root first, then every item the Cycle Guard
/// accepts, in store order.
pub fn parent_choices(tree: &MenuTree, key: &str) -> Vec<ParentChoice> {
    let current = tree.get(key).and_then(|item| item.parent_key.as_deref());

    let mut choices = vec![ParentChoice {
        key: None,
        name: NO_PARENT_LABEL.to_string(),
        selected: current.is_none(),
    }];
    choices.extend(
        tree.store()
            .values()
            .filter(|candidate| is_valid_parent(tree.store(), key, &candidate.key))
            .map(|candidate| ParentChoice {
                key: Some(candidate.key.clone()),
                name: candidate.name.clone(),
                selected: current == Some(candidate.key.as_str()),
            }),
    );
    choices
}

/// `1..=sibling_count` for `key`'s context
pub fn order_choices(tree: &MenuTree, key: &str) -> Vec<u32> {
    (1..=tree.sibling_count(key) as u32).collect()
}

pub fn item_fragment(tree: &MenuTree, key: &str) -> Option<ItemFragment> {
    let item = tree.get(key)?;
    Some(ItemFragment {
        key: item.key.clone(),
        name: item.name.clone(),
        item_type: item.item_type,
        label: item.label.clone(),
        url: item.url.clone(),
        parent_choices: parent_choices(tree, key),
        order_choices: order_choices(tree, key),
        order: item.order,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::menu::ItemSource;

    fn build() -> MenuTree {
        // Home
        //   Shop
        //     Shoes
        // About
        let mut tree = MenuTree::new();
        for (id, name) in [(1, "Home"), (2, "Shop"), (3, "Shoes"), (4, "About")] {
            tree.add(ItemSource::Listed { item_type: ItemType::Page, ref_id: id, name: name.to_string() })
                .unwrap();
        }
        tree.reparent("page-2", Some("page-1")).unwrap();
        tree.reparent("page-3", Some("page-2")).unwrap();
        tree
    }

    fn keys(choices: &[ParentChoice]) -> Vec<Option<&str>> {
        choices.iter().map(|c| c.key.as_deref()).collect()
    }

    #[test]
    fn test_parent_choices_exclude_self_and_descendants() {
        let tree = build();
        let choices = parent_choices(&tree, "page-1");
        assert_eq!(keys(&choices), vec![None, Some("page-4")]);
        assert!(choices[0].selected);
        assert_eq!(choices[0].name, NO_PARENT_LABEL);
    }

    #[test]
    fn test_parent_choices_mark_current_parent() {
        let tree = build();
        let choices = parent_choices(&tree, "page-3");
        assert_eq!(keys(&choices), vec![None, Some("page-1"), Some("page-2"), Some("page-4")]);
        let selected: Vec<_> = choices.iter().filter(|c| c.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].key.as_deref(), Some("page-2"));
    }

    #[test]
    fn test_order_choices_follow_context_size() {
        let tree = build();
        assert_eq!(order_choices(&tree, "page-1"), vec![1, 2]);
        assert_eq!(order_choices(&tree, "page-3"), vec![1]);
        assert!(order_choices(&tree, "page-9").is_empty());
    }

    #[test]
    fn test_fragment_refreshes_after_structural_change() {
        let mut tree = build();
        let before = item_fragment(&tree, "page-4").unwrap();
        assert_eq!(before.order_choices, vec![1, 2]);

        tree.reparent("page-2", None).unwrap();
        let after = item_fragment(&tree, "page-4").unwrap();
        assert_eq!(after.order_choices, vec![1, 2, 3]);
        assert_eq!(after.order, 2);

        let home = item_fragment(&tree, "page-1").unwrap();
        assert_eq!(keys(&home.parent_choices), vec![None, Some("page-2"), Some("page-3"), Some("page-4")]);
    }
}
