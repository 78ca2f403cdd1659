//! Admin API Client
//!
//! Thin `reqwest` wrappers around the admin REST endpoints, organized by
//! domain.

mod categories;
mod nav_menu;
mod tags;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;

use crate::error::{AdminError, AdminResult};

/// Characters left alone in a path segment or query value
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Percent-encode one URL component
pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    /// Absolute API root, e.g. `https://shop.example/api/admin`
    base: String,
}

impl ApiClient {
    pub fn new(base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base: base.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }
}

/// Map an HTTP status onto the error taxonomy
fn check_status(status: u16) -> AdminResult<()> {
    match status {
        200..=299 => Ok(()),
        401 => Err(AdminError::Unauthorized),
        other => Err(AdminError::Transport(format!("HTTP {}", other))),
    }
}

fn decode_body<T: DeserializeOwned>(body: &str) -> AdminResult<T> {
    serde_json::from_str(body).map_err(|e| AdminError::Transport(format!("invalid JSON response: {}", e)))
}

/// Decode a JSON body, treating any non-2xx status as a failure
async fn read_json<T: DeserializeOwned>(resp: reqwest::Response) -> AdminResult<T> {
    check_status(resp.status().as_u16())?;
    let body = resp.text().await?;
    decode_body(&body)
}

/// Decode a JSON body whatever the status, except 401. Used by endpoints
/// that explain rejections in the JSON envelope.
async fn read_json_envelope<T: DeserializeOwned>(resp: reqwest::Response) -> AdminResult<T> {
    if resp.status().as_u16() == 401 {
        return Err(AdminError::Unauthorized);
    }
    let body = resp.text().await?;
    decode_body(&body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ApiResponse;

    #[test]
    fn test_check_status() {
        assert!(check_status(200).is_ok());
        assert!(check_status(204).is_ok());
        assert_eq!(check_status(401), Err(AdminError::Unauthorized));
        assert_eq!(check_status(500), Err(AdminError::Transport("HTTP 500".to_string())));
        assert!(check_status(302).is_err());
    }

    #[test]
    fn test_decode_body_rejects_html() {
        let result: AdminResult<ApiResponse> = decode_body("<!doctype html><p>Login</p>");
        assert!(matches!(result, Err(AdminError::Transport(_))));
    }

    #[test]
    fn test_url_joins_segments() {
        let client = ApiClient::new("https://shop.example/api/admin/");
        assert_eq!(client.url("/tags/suggestions"), "https://shop.example/api/admin/tags/suggestions");
    }

    #[test]
    fn test_encode_component() {
        assert_eq!(encode_component("main-menu"), "main-menu");
        assert_eq!(encode_component("a b&c"), "a%20b%26c");
    }
}
