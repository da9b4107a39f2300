//! Type Buttons Component
//!
//! One "+ Type" trigger per item type; each opens that type's dialog.

use leptos::prelude::*;
use device_domain::ItemType;

use crate::context::use_admin_context;

#[component]
pub fn TypeButtons() -> impl IntoView {
    let ctx = use_admin_context();

    view! {
        <div class="button-container">
            {ItemType::ALL.iter().map(|&item_type| {
                let is_open = move || ctx.page.with(|page| page.dialog().is_open_for(item_type));
                view! {
                    <button
                        type="button"
                        class=move || if is_open() { "nav-button active" } else { "nav-button" }
                        on:click=move |_| ctx.open_dialog(item_type)
                    >
                        "+ " {item_type.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
