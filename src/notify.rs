//! Notifications
//!
//! Alert toasts: a one-way output channel used by every panel.

use crate::models::FlashMessage;

/// Alert category, determines styling and icon
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertCategory {
    Success,
    Error,
    Warning,
    Info,
}

impl AlertCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertCategory::Success => "success",
            AlertCategory::Error => "error",
            AlertCategory::Warning => "warning",
            AlertCategory::Info => "info",
        }
    }

    /// Map a server flash category; unknown ones are informational
    pub fn from_flash(category: &str) -> Self {
        match category {
            "success" => AlertCategory::Success,
            "error" | "danger" => AlertCategory::Error,
            "warning" => AlertCategory::Warning,
            _ => AlertCategory::Info,
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AlertCategory::Success => "✓",
            AlertCategory::Error => "✕",
            AlertCategory::Warning => "!",
            AlertCategory::Info => "i",
        }
    }
}

pub const DEFAULT_TIMEOUT_MS: u32 = 5000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertOptions {
    /// Auto-dismiss delay; 0 keeps the toast until closed
    pub timeout_ms: u32,
    /// Append a link to the login page
    pub login_link: bool,
}

impl Default for AlertOptions {
    fn default() -> Self {
        Self {
            timeout_ms: DEFAULT_TIMEOUT_MS,
            login_link: false,
        }
    }
}

/// Fire-and-forget notification sink
pub trait Notifier {
    fn notify(&self, message: &str, category: AlertCategory, options: AlertOptions);

    fn success(&self, message: &str) {
        self.notify(message, AlertCategory::Success, AlertOptions::default());
    }

    fn error(&self, message: &str) {
        self.notify(message, AlertCategory::Error, AlertOptions::default());
    }
}

/// Show server-rendered flash messages through `notifier`, oldest first so
/// the newest ends up on top.
pub fn replay_flashes<N: Notifier + ?Sized>(notifier: &N, flashes: &[FlashMessage], default_timeout_ms: u32) {
    for flash in flashes {
        let options = AlertOptions {
            timeout_ms: flash.timeout_ms.unwrap_or(default_timeout_ms),
            login_link: false,
        };
        notifier.notify(&flash.message, AlertCategory::from_flash(&flash.category), options);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub category: AlertCategory,
    pub options: AlertOptions,
}

/// Visible toasts, newest first
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToastQueue {
    toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastQueue {
    /// Insert a toast at the top and return its id
    pub fn push(&mut self, message: &str, category: AlertCategory, options: AlertOptions) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.insert(
            0,
            Toast {
                id,
                message: message.to_string(),
                category,
                options,
            },
        );
        id
    }

    /// Returns false when the toast was already gone
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.toasts.len();
        self.toasts.retain(|toast| toast.id != id);
        self.toasts.len() != before
    }

    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;

    use super::*;

    /// Records every notification
    #[derive(Default)]
    pub struct RecordingNotifier {
        pub sent: RefCell<Vec<(String, AlertCategory)>>,
        pub timeouts: RefCell<Vec<u32>>,
    }

    impl Notifier for RecordingNotifier {
        fn notify(&self, message: &str, category: AlertCategory, options: AlertOptions) {
            self.sent.borrow_mut().push((message.to_string(), category));
            self.timeouts.borrow_mut().push(options.timeout_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_newest_first() {
        let mut queue = ToastQueue::default();
        let first = queue.push("one", AlertCategory::Info, AlertOptions::default());
        let second = queue.push("two", AlertCategory::Error, AlertOptions::default());
        assert_ne!(first, second);
        let messages: Vec<&str> = queue.toasts().iter().map(|t| t.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "one"]);
    }

    #[test]
    fn test_dismiss() {
        let mut queue = ToastQueue::default();
        let id = queue.push("bye", AlertCategory::Success, AlertOptions::default());
        assert!(queue.dismiss(id));
        assert!(!queue.dismiss(id));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_notifier_helpers() {
        let notifier = testing::RecordingNotifier::default();
        notifier.success("Saved");
        notifier.error("Nope");
        assert_eq!(
            *notifier.sent.borrow(),
            vec![
                ("Saved".to_string(), AlertCategory::Success),
                ("Nope".to_string(), AlertCategory::Error),
            ]
        );
    }

    #[test]
    fn test_replay_flashes() {
        let flashes: Vec<FlashMessage> = serde_json::from_str(
            r#"[
                {"message": "Product saved", "category": "success"},
                {"message": "Image too large", "category": "danger", "timeout_ms": 0},
                {"message": "Welcome back"}
            ]"#,
        )
        .unwrap();
        let notifier = testing::RecordingNotifier::default();
        replay_flashes(&notifier, &flashes, 3000);
        assert_eq!(
            *notifier.sent.borrow(),
            vec![
                ("Product saved".to_string(), AlertCategory::Success),
                ("Image too large".to_string(), AlertCategory::Error),
                ("Welcome back".to_string(), AlertCategory::Info),
            ]
        );
        assert_eq!(*notifier.timeouts.borrow(), vec![3000, 0, 3000]);
    }
}
