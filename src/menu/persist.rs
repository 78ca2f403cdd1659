//! Persistence Adapter
//!
//! Ships the whole tree to the save-items endpoint and reports the outcome.
//! The local tree is never touched by a save.

use async_trait::async_trait;

use crate::error::AdminResult;
use crate::models::{ApiResponse, SavePayload};
use crate::notify::Notifier;

pub const SAVE_FAILED_MESSAGE: &str = "Failed to save the navigation menu.";

/// Anything able to deliver a save payload for a menu
#[async_trait(?Send)]
pub trait SaveTransport {
    async fn save_items(&self, slug: &str, payload: &SavePayload) -> AdminResult<ApiResponse>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Server accepted the tree; carries its message
    Saved(String),
    Failed,
}

/// Save `payload` for menu `slug` and emit exactly one notification.
pub async fn save<T, N>(payload: &SavePayload, slug: &str, transport: &T, notifier: &N) -> SaveOutcome
where
    T: SaveTransport + ?Sized,
    N: Notifier + ?Sized,
{
    log::info!("[SAVE] saving {} items to menu {}", payload.items.len(), slug);

    match transport.save_items(slug, payload).await {
        Ok(resp) if resp.is_success() => {
            log::info!("[SAVE] menu {} saved: {}", slug, resp.message);
            notifier.success(&resp.message);
            SaveOutcome::Saved(resp.message)
        }
        Ok(resp) => {
            log::error!("[SAVE] menu {} rejected with status {}: {}", slug, resp.status, resp.message);
            notifier.error(SAVE_FAILED_MESSAGE);
            SaveOutcome::Failed
        }
        Err(e) => {
            log::error!("[SAVE] menu {} failed: {}", slug, e);
            notifier.error(SAVE_FAILED_MESSAGE);
            SaveOutcome::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::error::AdminError;
    use crate::menu::{ItemSource, MenuTree};
    use crate::models::ItemType;
    use crate::notify::testing::RecordingNotifier;
    use crate::notify::AlertCategory;

    /// Replays a canned result and records what was sent
    struct FakeTransport {
        reply: AdminResult<ApiResponse>,
        calls: RefCell<Vec<(String, SavePayload)>>,
    }

    impl FakeTransport {
        fn new(reply: AdminResult<ApiResponse>) -> Self {
            Self { reply, calls: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl SaveTransport for FakeTransport {
        async fn save_items(&self, slug: &str, payload: &SavePayload) -> AdminResult<ApiResponse> {
            self.calls.borrow_mut().push((slug.to_string(), payload.clone()));
            self.reply.clone()
        }
    }

    fn response(status: &str, message: &str) -> ApiResponse {
        ApiResponse { status: status.to_string(), message: message.to_string(), data: None }
    }

    fn sample_tree() -> MenuTree {
        let mut tree = MenuTree::new();
        tree.add(ItemSource::Listed { item_type: ItemType::Page, ref_id: 1, name: "Home".to_string() })
            .unwrap();
        tree.add(ItemSource::Custom { url: "/blog".to_string(), text: "Blog".to_string(), ref_id: 99 })
            .unwrap();
        tree.reparent("custom-99", Some("page-1")).unwrap();
        tree
    }

    #[tokio::test]
    async fn test_save_success_notifies_server_message() {
        let tree = sample_tree();
        let transport = FakeTransport::new(Ok(response("success", "Navigation menu saved successfully")));
        let notifier = RecordingNotifier::default();

        let outcome = save(&tree.to_payload(), "main-menu", &transport, &notifier).await;

        assert_eq!(outcome, SaveOutcome::Saved("Navigation menu saved successfully".to_string()));
        let calls = transport.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, "main-menu");
        assert_eq!(calls[0].1.items.len(), 2);
        assert_eq!(
            *notifier.sent.borrow(),
            vec![("Navigation menu saved successfully".to_string(), AlertCategory::Success)]
        );
    }

    #[tokio::test]
    async fn test_save_transport_failure_is_generic() {
        let tree = sample_tree();
        let before = tree.clone();
        let transport = FakeTransport::new(Err(AdminError::Transport("HTTP 500".to_string())));
        let notifier = RecordingNotifier::default();

        let outcome = save(&tree.to_payload(), "main-menu", &transport, &notifier).await;

        assert_eq!(outcome, SaveOutcome::Failed);
        assert_eq!(tree, before);
        assert_eq!(*notifier.sent.borrow(), vec![(SAVE_FAILED_MESSAGE.to_string(), AlertCategory::Error)]);
    }

    #[tokio::test]
    async fn test_save_non_success_status_fails() {
        let tree = sample_tree();
        let transport = FakeTransport::new(Ok(response("error", "No menu items provided")));
        let notifier = RecordingNotifier::default();

        let outcome = save(&tree.to_payload(), "main-menu", &transport, &notifier).await;

        assert_eq!(outcome, SaveOutcome::Failed);
        assert_eq!(notifier.sent.borrow()[0].1, AlertCategory::Error);
    }

    #[tokio::test]
    async fn test_payload_carries_parent_keys() {
        let tree = sample_tree();
        let transport = FakeTransport::new(Ok(response("success", "ok")));
        let notifier = RecordingNotifier::default();

        save(&tree.to_payload(), "footer", &transport, &notifier).await;

        let calls = transport.calls.borrow();
        let json = serde_json::to_value(&calls[0].1).unwrap();
        let items = json["items"].as_array().unwrap();
        assert_eq!(items[0]["key"], "page-1");
        assert!(items[0]["parent_key"].is_null());
        assert_eq!(items[1]["parent_key"], "page-1");
        assert_eq!(items[1]["url"], "/blog");
        assert_eq!(items[1]["order"], 1);
    }
}
