//! Page Configuration
//!
//! Settings and seed data arrive as JSON inside
//! `<script type="application/json" id="...">` elements rendered by the
//! server.

use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::encode_component;
use crate::error::{AdminError, AdminResult};
use crate::notify::DEFAULT_TIMEOUT_MS;

pub const CONFIG_ISLAND: &str = "admin-config";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Root of the admin REST API, absolute or relative to the page origin
    pub api_base: String,
    pub login_route: String,
    /// 0 keeps toasts until closed
    pub toast_timeout_ms: u32,
    pub log_level: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/admin".to_string(),
            login_route: "/login".to_string(),
            toast_timeout_ms: DEFAULT_TIMEOUT_MS,
            log_level: "info".to_string(),
        }
    }
}

impl AdminConfig {
    /// Read `#admin-config`, falling back to defaults
    pub fn load() -> Self {
        match read_island::<AdminConfig>(CONFIG_ISLAND) {
            Ok(Some(config)) => config,
            Ok(None) => Self::default(),
            Err(e) => {
                log::warn!("[CONFIG] {}, using defaults", e);
                Self::default()
            }
        }
    }

    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// Parse the text of a JSON island
pub fn parse_island<T: DeserializeOwned>(id: &str, text: &str) -> AdminResult<T> {
    serde_json::from_str(text).map_err(|e| AdminError::Structural(format!("malformed #{} island: {}", id, e)))
}

/// Read and parse a JSON island. `Ok(None)` when the element is absent.
pub fn read_island<T: DeserializeOwned>(id: &str) -> AdminResult<Option<T>> {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        return Ok(None);
    };
    let text = element.text_content().unwrap_or_default();
    parse_island(id, &text).map(Some)
}

/// Turn a configured API base into an absolute URL
pub fn resolve_api_base(origin: &str, api_base: &str) -> String {
    if api_base.starts_with("http://") || api_base.starts_with("https://") {
        return api_base.trim_end_matches('/').to_string();
    }
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        api_base.trim_start_matches('/').trim_end_matches('/')
    )
}

/// Login URL that brings the user back to `return_to` afterwards
pub fn login_redirect_url(login_route: &str, return_to: &str) -> String {
    format!("{}?next={}", login_route, encode_component(return_to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuPageData;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config: AdminConfig = parse_island(CONFIG_ISLAND, r#"{"api_base": "/backend/api"}"#).unwrap();
        assert_eq!(config.api_base, "/backend/api");
        assert_eq!(config.login_route, "/login");
        assert_eq!(config.toast_timeout_ms, 5000);
    }

    #[test]
    fn test_malformed_island_is_structural() {
        let result: AdminResult<MenuPageData> = parse_island("menu-builder-data", "{not json");
        assert!(matches!(result, Err(AdminError::Structural(_))));
    }

    #[test]
    fn test_level_filter() {
        let mut config = AdminConfig::default();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
        config.log_level = "debug".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Debug);
        config.log_level = "chatty".to_string();
        assert_eq!(config.level_filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_resolve_api_base() {
        assert_eq!(resolve_api_base("https://shop.example", "/api/admin"), "https://shop.example/api/admin");
        assert_eq!(resolve_api_base("https://shop.example/", "api/admin/"), "https://shop.example/api/admin");
        assert_eq!(resolve_api_base("https://shop.example", "https://api.example/v1/"), "https://api.example/v1");
    }

    #[test]
    fn test_login_redirect_url() {
        assert_eq!(
            login_redirect_url("/login", "/admin/categories?page=2"),
            "/login?next=%2Fadmin%2Fcategories%3Fpage%3D2"
        );
    }
}
