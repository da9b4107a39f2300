//! Item Dialog Component
//!
//! Modal wrapper around the item form for whichever type is open.

use leptos::ev;
use leptos::prelude::*;
use device_domain::ItemType;

use crate::context::use_admin_context;
use crate::components::ItemForm;

/// Renders the dialog for the open type, or nothing when closed
#[component]
pub fn ActiveDialog() -> impl IntoView {
    let ctx = use_admin_context();

    // Memo so a rejected submit (state unchanged) does not rebuild the form
    let open_type = Memo::new(move |_| ctx.page.with(|page| page.dialog().open_type()));

    move || open_type.get().map(|item_type| view! { <ItemDialog item_type=item_type /> })
}

#[component]
fn ItemDialog(item_type: ItemType) -> impl IntoView {
    let ctx = use_admin_context();

    // Listen on the window so Escape works wherever focus is
    let keydown = window_event_listener(ev::keydown, move |ev| {
        if is_dismiss_key(&ev.key()) {
            ctx.cancel_dialog();
        }
    });
    on_cleanup(move || keydown.remove());

    view! {
        <div class="dialog-overlay" on:click=move |_| ctx.cancel_dialog()>
            <div
                class="dialog-content"
                role="dialog"
                aria-modal="true"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="dialog-header">
                    <h2 class="dialog-title">"Add " {item_type.label()}</h2>
                </div>
                <ItemForm
                    item_type=item_type
                    on_save=move |draft| ctx.submit(draft)
                    on_cancel=move |_| ctx.cancel_dialog()
                    reset=ctx.draft_reset()
                />
            </div>
        </div>
    }
}

fn is_dismiss_key(key: &str) -> bool {
    key == "Escape" || key == "Esc"
}
