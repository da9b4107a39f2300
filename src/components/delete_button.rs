//! Delete Button Component
//!
//! Per-item delete affordance. Confirmation happens in the page controller.

use leptos::prelude::*;

/// # Arguments
/// * `on_delete` - Callback to request deletion
#[component]
pub fn DeleteButton(#[prop(into)] on_delete: Callback<()>) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ghost-btn small"
            aria-label="Delete"
            on:click=move |ev| {
                ev.stop_propagation();
                on_delete.run(());
            }
        >
            "Delete"
        </button>
    }
}
