//! Category Endpoints

use reqwest::multipart::Form;

use super::{read_json_envelope, ApiClient};
use crate::error::{AdminError, AdminResult};
use crate::models::{ApiResponse, CategoryCreated};

impl ApiClient {
    /// `POST /categories?add_select=true` (multipart). Returns the new
    /// category together with the refreshed parent select markup.
    pub async fn create_category(&self, name: &str, parent_cat: &str) -> AdminResult<CategoryCreated> {
        let form = Form::new()
            .text("name", name.to_string())
            .text("parent_cat", parent_cat.to_string());

        let resp = self
            .http
            .post(self.url("categories?add_select=true"))
            .header("X-Requested-With", "XMLHttpRequest")
            .multipart(form)
            .send()
            .await?;

        let body: ApiResponse<CategoryCreated> = read_json_envelope(resp).await?;
        match body.data {
            Some(created) if body.status == "success" => Ok(created),
            _ if body.message.is_empty() => Err(AdminError::Validation("Operation failed".to_string())),
            _ => Err(AdminError::Validation(body.message)),
        }
    }
}
