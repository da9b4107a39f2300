//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use device_domain::{AdminConfig, DeleteOutcome, Draft, DraftResetPolicy, ItemId, ItemType, PageController, SubmitOutcome};

use crate::feedback::{BrowserConfirm, ToastSink};
use crate::store::ToastStore;

/// The page controller wired to browser feedback
pub type AdminPage = PageController<ToastSink, BrowserConfirm>;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AdminContext {
    /// Dialog state and item store
    pub page: RwSignal<AdminPage>,
    /// Visible toasts
    pub toasts: ToastStore,
    config: StoredValue<AdminConfig>,
}

impl AdminContext {
    pub fn new(toasts: ToastStore, config: AdminConfig) -> Self {
        let sink = ToastSink::new(toasts, &config);
        Self {
            page: RwSignal::new(PageController::new(sink, BrowserConfirm)),
            toasts,
            config: StoredValue::new(config),
        }
    }

    pub fn open_dialog(&self, item_type: ItemType) {
        self.page.update(|page| page.open_dialog(item_type));
    }

    pub fn cancel_dialog(&self) {
        self.page.update(|page| page.cancel());
    }

    /// Hand a draft to the controller
    pub fn submit(&self, draft: Draft) -> SubmitOutcome {
        self.page
            .try_update(|page| page.submit(&draft))
            .unwrap_or(SubmitOutcome::Failed)
    }

    /// Confirm with the operator, then delete
    pub fn delete(&self, id: ItemId) -> DeleteOutcome {
        self.page
            .try_update(|page| page.request_delete(id))
            .unwrap_or(DeleteOutcome::NotFound)
    }

    pub fn draft_reset(&self) -> DraftResetPolicy {
        self.config.with_value(|config| config.draft_reset)
    }
}

/// Get the admin context
pub fn use_admin_context() -> AdminContext {
    expect_context::<AdminContext>()
}
