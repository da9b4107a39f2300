//! UI Components
//!
//! Reusable Leptos components.

mod page_header;
mod type_buttons;
mod item_form;
mod item_dialog;
mod item_groups;
mod delete_button;
mod toaster;

pub use page_header::PageHeader;
pub use type_buttons::TypeButtons;
pub use item_form::ItemForm;
pub use item_dialog::ActiveDialog;
pub use item_groups::ItemGroups;
pub use delete_button::DeleteButton;
pub use toaster::Toaster;
