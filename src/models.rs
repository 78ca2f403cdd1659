//! Frontend Models
//!
//! Data structures exchanged with the admin API and the page data islands.

use serde::{Deserialize, Serialize};

/// Kind of object a menu item points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Page,
    Category,
    Tag,
    /// Free-form link with its own URL
    Custom,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Page => "page",
            ItemType::Category => "category",
            ItemType::Tag => "tag",
            ItemType::Custom => "custom",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One navigation menu entry (matches the save payload item)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub key: String,
    pub ref_id: i64,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub name: String,
    pub label: String,
    pub parent_key: Option<String>,
    /// 1-based position among siblings
    pub order: u32,
    pub url: Option<String>,
}

impl MenuItem {
    /// Check if this is a root item (no parent)
    pub fn is_root(&self) -> bool {
        self.parent_key.is_none()
    }
}

/// Body of the save-items request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePayload {
    pub items: Vec<MenuItem>,
}

/// Standard admin API envelope
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiResponse<T = serde_json::Value> {
    pub status: String,
    #[serde(default)]
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        self.status == "success"
    }
}

/// Selectable object listed in the available-items panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceEntry {
    pub id: i64,
    pub name: String,
}

/// One collapsible group of the available-items panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceGroup {
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub title: String,
    #[serde(default)]
    pub entries: Vec<SourceEntry>,
}

/// Menu builder page data island
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MenuPageData {
    pub slug: String,
    #[serde(default)]
    pub items: Vec<MenuItem>,
    #[serde(default)]
    pub sources: Vec<SourceGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub parent_id: Option<i64>,
}

/// `data` of a successful add-category response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryCreated {
    pub select_field: String,
    pub category: Category,
}

/// Category quick-add data island
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CategoryPageData {
    #[serde(default)]
    pub parent_select: String,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// `data` of a tag suggestions response
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TagSuggestions {
    #[serde(default)]
    pub suggestions: Vec<String>,
}

/// Product tags data island
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TagPageData {
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Server-side flash message rendered into the page
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FlashMessage {
    pub message: String,
    /// Flask category: success, error, danger, warning, info, message
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub timeout_ms: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_wire_names() {
        let item = MenuItem {
            key: "page-1".to_string(),
            ref_id: 1,
            item_type: ItemType::Page,
            name: "Home".to_string(),
            label: "Home".to_string(),
            parent_key: None,
            order: 1,
            url: None,
        };
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "page");
        assert!(json["parent_key"].is_null());
        assert!(json["url"].is_null());
        assert_eq!(json["order"], 1);
    }

    #[test]
    fn test_api_response_without_data() {
        let resp: ApiResponse = serde_json::from_str(r#"{"status":"success","message":"Saved"}"#).unwrap();
        assert!(resp.is_success());
        assert_eq!(resp.message, "Saved");
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_category_response_with_and_without_data() {
        let resp: ApiResponse<CategoryCreated> = serde_json::from_str(
            r#"{"status":"success","data":{"select_field":"<select></select>","category":{"id":9,"name":"Boots","parent_id":4}}}"#,
        )
        .unwrap();
        let created = resp.data.unwrap();
        assert_eq!(created.category.name, "Boots");
        assert_eq!(created.category.parent_id, Some(4));

        let resp: ApiResponse<CategoryCreated> =
            serde_json::from_str(r#"{"status":"error","message":"Duplicate"}"#).unwrap();
        assert!(!resp.is_success());
        assert!(resp.data.is_none());
    }

    #[test]
    fn test_source_group_parses() {
        let group: SourceGroup = serde_json::from_str(
            r#"{"type":"category","title":"Categories","entries":[{"id":4,"name":"Shoes"}]}"#,
        )
        .unwrap();
        assert_eq!(group.item_type, ItemType::Category);
        assert_eq!(group.entries[0].name, "Shoes");
    }
}
