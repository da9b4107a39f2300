//! Toaster Component
//!
//! Stack of transient notifications; each can be dismissed early.

use leptos::prelude::*;

use crate::context::use_admin_context;
use crate::store::{store_dismiss_toast, store_toasts};

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_admin_context();
    let toasts = ctx.toasts;

    view! {
        <div class="toaster" aria-live="polite">
            <For
                each=move || store_toasts(&toasts)
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = if toast.notification.is_error() { "toast destructive" } else { "toast" };
                    view! {
                        <div class=class role="status">
                            <div class="toast-text">
                                <div class="toast-title">{toast.notification.title}</div>
                                <div class="toast-description">{toast.notification.description}</div>
                            </div>
                            <button
                                type="button"
                                class="toast-close"
                                aria-label="Dismiss"
                                on:click=move |_| store_dismiss_toast(&toasts, id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
