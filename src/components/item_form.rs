//! Item Form Component
//!
//! Collects a draft for one item type and hands it to `on_save`.
//! The form never touches the item store itself.

use leptos::prelude::*;
use device_domain::domain::DESCRIPTION_PLACEHOLDER;
use device_domain::{Draft, DraftResetPolicy, ItemType, SubmitOutcome};

/// Name / value / description inputs with Save and Cancel
///
/// # Arguments
/// * `item_type` - Selects the field labels
/// * `on_save` - Receives the draft; its outcome decides whether the inputs clear
/// * `on_cancel` - Called when the operator backs out
/// * `reset` - When to clear the inputs after a submit
#[component]
pub fn ItemForm(
    item_type: ItemType,
    #[prop(into)] on_save: Callback<Draft, SubmitOutcome>,
    #[prop(into)] on_cancel: Callback<()>,
    #[prop(optional)] reset: DraftResetPolicy,
) -> impl IntoView {
    let labels = item_type.field_labels();

    let (name, set_name) = signal(String::new());
    let (value, set_value) = signal(String::new());
    let (description, set_description) = signal(String::new());

    // Focus the name input when the dialog opens
    let name_input = NodeRef::<leptos::html::Input>::new();
    Effect::new(move |_| {
        if let Some(input) = name_input.get() {
            let _ = input.focus();
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = Draft::new(name.get(), value.get(), description.get());
        let outcome = on_save.run(draft);
        if reset.should_reset(outcome.is_accepted()) {
            set_name.set(String::new());
            set_value.set(String::new());
            set_description.set(String::new());
        }
    };

    view! {
        <form class="item-form" on:submit=submit>
            <div class="form-field">
                <label for="name">{labels.name}</label>
                <input
                    node_ref=name_input
                    id="name"
                    type="text"
                    required=true
                    placeholder=labels.name_placeholder()
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </div>

            <div class="form-field">
                <label for="value">{labels.value}</label>
                <input
                    id="value"
                    type="text"
                    placeholder=labels.value_placeholder()
                    prop:value=move || value.get()
                    on:input=move |ev| set_value.set(event_target_value(&ev))
                />
            </div>

            <div class="form-field">
                <label for="description">{labels.description}</label>
                <textarea
                    id="description"
                    placeholder=DESCRIPTION_PLACEHOLDER
                    prop:value=move || description.get()
                    on:input=move |ev| set_description.set(event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-actions">
                <button type="button" class="outline-btn" on:click=move |_| on_cancel.run(())>
                    "Cancel"
                </button>
                <button type="submit">"Save"</button>
            </div>
        </form>
    }
}
