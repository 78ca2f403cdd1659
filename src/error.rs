//! Admin UI Errors
//!
//! Error taxonomy shared by the API layer and the components.

use serde::{Deserialize, Serialize};

use crate::menu::TreeError;

/// Common result type for admin operations
pub type AdminResult<T> = Result<T, AdminError>;

/// Admin-level errors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AdminError {
    /// Empty or malformed user input, rejected before any request
    Validation(String),
    /// Session expired (HTTP 401)
    Unauthorized,
    /// Fetch rejection, non-2xx status or undecodable body
    Transport(String),
    /// Missing page anchor, unknown key or malformed page data
    Structural(String),
}

impl AdminError {
    /// Message suitable for a toast
    pub fn user_message(&self) -> String {
        match self {
            AdminError::Validation(msg) => msg.clone(),
            AdminError::Unauthorized => "Your session has expired, please log in again.".to_string(),
            AdminError::Transport(_) | AdminError::Structural(_) => "Network error - please try again".to_string(),
        }
    }
}

impl std::fmt::Display for AdminError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AdminError::Validation(msg) => write!(f, "Invalid input: {}", msg),
            AdminError::Unauthorized => write!(f, "Unauthorized"),
            AdminError::Transport(msg) => write!(f, "Transport error: {}", msg),
            AdminError::Structural(msg) => write!(f, "Structural error: {}", msg),
        }
    }
}

impl std::error::Error for AdminError {}

impl From<reqwest::Error> for AdminError {
    fn from(e: reqwest::Error) -> Self {
        AdminError::Transport(e.to_string())
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(e: serde_json::Error) -> Self {
        AdminError::Transport(e.to_string())
    }
}

impl From<TreeError> for AdminError {
    fn from(e: TreeError) -> Self {
        match e {
            TreeError::InvalidInput(msg) => AdminError::Validation(msg),
            other => AdminError::Structural(other.to_string()),
        }
    }
}
