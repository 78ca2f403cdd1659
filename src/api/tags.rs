//! Product Tag Endpoints

use super::{encode_component, read_json, ApiClient};
use crate::error::AdminResult;
use crate::models::{ApiResponse, TagSuggestions};

impl ApiClient {
    /// `GET /tags/suggestions?term=...`
    pub async fn tag_suggestions(&self, term: &str) -> AdminResult<Vec<String>> {
        let url = self.url(&format!("tags/suggestions?term={}", encode_component(term)));
        let resp = self.http.get(url).send().await?;
        let body: ApiResponse<TagSuggestions> = read_json(resp).await?;
        Ok(body.data.unwrap_or_default().suggestions)
    }
}
