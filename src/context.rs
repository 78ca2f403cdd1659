//! Application Context
//!
//! Configuration and the API client, provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::{login_redirect_url, resolve_api_base, AdminConfig};

#[derive(Clone)]
pub struct AdminContext {
    pub config: AdminConfig,
    api: ApiClient,
}

impl AdminContext {
    pub fn new(config: AdminConfig) -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_default();
        let api = ApiClient::new(&resolve_api_base(&origin, &config.api_base));
        Self { config, api }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Send the browser to the login page, returning here afterwards
    pub fn redirect_to_login(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        let search = location.search().unwrap_or_default();
        let target = login_redirect_url(&self.config.login_route, &format!("{}{}", path, search));
        log::info!("[AUTH] Session expired, redirecting to {}", target);
        if let Err(e) = location.replace(&target) {
            log::error!("[AUTH] Redirect failed: {:?}", e);
        }
    }
}

pub fn use_admin_context() -> AdminContext {
    expect_context::<AdminContext>()
}
