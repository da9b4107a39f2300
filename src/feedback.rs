//! Browser Feedback Adapters
//!
//! Implement the controller's notification and confirmation capabilities
//! with the toast store and `window.confirm`.

use gloo_timers::callback::Timeout;
use device_domain::{AdminConfig, ConfirmationPrompt, Notification, NotificationSink};

use crate::store::{store_dismiss_toast, store_push_toast, ToastStore};

/// Shows notifications as toasts that dismiss themselves
#[derive(Clone, Copy)]
pub struct ToastSink {
    store: ToastStore,
    duration_ms: u32,
    max_toasts: usize,
}

impl ToastSink {
    pub fn new(store: ToastStore, config: &AdminConfig) -> Self {
        Self {
            store,
            duration_ms: config.toast_duration_ms,
            max_toasts: config.max_toasts,
        }
    }
}

impl NotificationSink for ToastSink {
    fn notify(&self, notification: Notification) {
        tracing::debug!("toast: {} - {}", notification.title, notification.description);
        let id = store_push_toast(&self.store, notification, self.max_toasts);
        let store = self.store;
        Timeout::new(self.duration_ms, move || store_dismiss_toast(&store, id)).forget();
    }
}

/// Blocking `window.confirm`; declines when no window is available
#[derive(Clone, Copy, Default)]
pub struct BrowserConfirm;

impl ConfirmationPrompt for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|w| w.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}
