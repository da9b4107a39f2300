//! Item Groups Component
//!
//! One section per item type that has items, rows in insertion order.

use leptos::prelude::*;
use device_domain::{DeviceItem, ItemType};

use crate::context::use_admin_context;
use crate::components::DeleteButton;

#[component]
pub fn ItemGroups() -> impl IntoView {
    let ctx = use_admin_context();

    // Only changes when a type gains its first item or loses its last one
    let group_types = Memo::new(move |_| ctx.page.with(|page| page.store().group_types()));

    view! {
        <div class="item-groups">
            <For
                each=move || group_types.get()
                key=|item_type| *item_type
                children=move |item_type| view! { <ItemGroup item_type=item_type /> }
            />
        </div>
    }
}

#[component]
fn ItemGroup(item_type: ItemType) -> impl IntoView {
    let ctx = use_admin_context();

    let rows = Memo::new(move |_| {
        ctx.page.with(|page| page.store().list_by_type(item_type).cloned().collect::<Vec<_>>())
    });

    view! {
        <section class="item-group">
            <h2 class="item-group-title">{item_type.plural_label()}</h2>
            <div class="item-group-rows">
                // Items never change after creation, so the id is a complete key
                <For
                    each=move || rows.get()
                    key=|item| item.id
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </div>
        </section>
    }
}

#[component]
fn ItemRow(item: DeviceItem) -> impl IntoView {
    let ctx = use_admin_context();
    let id = item.id;
    let value = item.has_value().then(|| item.value.clone());

    view! {
        <div class="item-row" data-item-id=id.to_string()>
            <div class="item-row-body">
                <div class="item-name">{item.name}</div>
                {value.map(|value| view! { <div class="item-value">{value}</div> })}
                {item.description.map(|description| view! { <div class="item-description">{description}</div> })}
            </div>
            <DeleteButton on_delete=move |_| {
                ctx.delete(id);
            } />
        </div>
    }
}
