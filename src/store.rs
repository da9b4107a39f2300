//! Toast Feed Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use device_domain::Notification;

/// A notification currently on screen
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub notification: Notification,
}

/// Transient notifications with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct ToastState {
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Last id handed out
    pub last_id: u64,
}

/// Type alias for the store
pub type ToastStore = Store<ToastState>;

// ========================
// Store Helper Functions
// ========================

/// Push a toast, dropping the oldest ones beyond `max`. Returns the new toast's id.
pub fn store_push_toast(store: &ToastStore, notification: Notification, max: usize) -> u64 {
    let id = {
        let last_field = store.last_id();
        let mut last = last_field.write();
        *last += 1;
        *last
    };
    let toasts_field = store.toasts();
    let mut toasts = toasts_field.write();
    toasts.push(Toast { id, notification });
    let overflow = toasts.len().saturating_sub(max.max(1));
    toasts.drain(..overflow);
    id
}

/// Remove a toast by ID
pub fn store_dismiss_toast(store: &ToastStore, toast_id: u64) {
    store.toasts().write().retain(|toast| toast.id != toast_id);
}

/// Snapshot of the visible toasts
pub fn store_toasts(store: &ToastStore) -> Vec<Toast> {
    store.toasts().get()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_store() -> ToastStore {
        let owner = Owner::new();
        owner.set();
        // Keep the owner alive for the rest of the test; dropping it disposes the store.
        std::mem::forget(owner);
        Store::new(ToastState::default())
    }

    #[test]
    fn test_push_drops_oldest_beyond_max() {
        let store = setup_store();
        for i in 1..=5 {
            store_push_toast(&store, Notification::success(format!("toast {}", i)), 3);
        }

        let toasts = store_toasts(&store);
        let ids: Vec<_> = toasts.iter().map(|t| t.id).collect();
        assert_eq!(ids, [3, 4, 5]);
        assert_eq!(toasts[0].notification.description, "toast 3");
    }

    #[test]
    fn test_zero_max_still_keeps_latest() {
        let store = setup_store();
        store_push_toast(&store, Notification::success("first"), 0);
        let id = store_push_toast(&store, Notification::error("second"), 0);

        let toasts = store_toasts(&store);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].id, id);
    }

    #[test]
    fn test_dismiss_removes_only_that_toast() {
        let store = setup_store();
        let first = store_push_toast(&store, Notification::success("first"), 3);
        let second = store_push_toast(&store, Notification::success("second"), 3);

        store_dismiss_toast(&store, first);
        let ids: Vec<_> = store_toasts(&store).iter().map(|t| t.id).collect();
        assert_eq!(ids, [second]);
    }
}
