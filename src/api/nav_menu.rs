//! Navigation Menu Endpoints

use async_trait::async_trait;

use super::{encode_component, read_json, ApiClient};
use crate::error::AdminResult;
use crate::menu::SaveTransport;
use crate::models::{ApiResponse, SavePayload};

impl ApiClient {
    /// `POST /nav-menus/{slug}/save-items` with the whole tree
    pub async fn save_menu_items(&self, slug: &str, payload: &SavePayload) -> AdminResult<ApiResponse> {
        let url = self.url(&format!("nav-menus/{}/save-items", encode_component(slug)));
        let resp = self.http.post(url).json(payload).send().await?;
        read_json(resp).await
    }
}

#[async_trait(?Send)]
impl SaveTransport for ApiClient {
    async fn save_items(&self, slug: &str, payload: &SavePayload) -> AdminResult<ApiResponse> {
        self.save_menu_items(slug, payload).await
    }
}
