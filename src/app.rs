//! Device Admin App
//!
//! The "Add Device" page: type triggers, grouped items, dialog and toasts.

use leptos::prelude::*;
use reactive_stores::Store;
use device_domain::AdminConfig;

use crate::context::AdminContext;
use crate::store::ToastState;
use crate::components::{ActiveDialog, ItemGroups, PageHeader, Toaster, TypeButtons};

#[component]
pub fn App(config: AdminConfig) -> impl IntoView {
    // State
    let toasts = Store::new(ToastState::default());
    let ctx = AdminContext::new(toasts, config);

    // Provide context to all children
    provide_context(ctx);

    let is_empty = move || ctx.page.with(|page| page.store().is_empty());

    view! {
        <div class="page-container">
            <PageHeader />

            <TypeButtons />

            <ItemGroups />

            <Show when=is_empty>
                <div class="empty-state">
                    <p>"Add items by clicking the buttons above"</p>
                </div>
            </Show>

            <ActiveDialog />
            <Toaster />
        </div>
    }
}
