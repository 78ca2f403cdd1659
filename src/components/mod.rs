//! UI Components
//!
//! Leptos components for the admin panels.

mod available_items;
mod category_quick_add;
mod collapsible;
mod custom_link_form;
mod drop_zone;
mod loading_button;
mod menu_builder;
mod menu_item_node;
mod tag_autocomplete;
mod toast_host;

pub use available_items::AvailableItems;
pub use category_quick_add::CategoryQuickAdd;
pub use collapsible::Collapsible;
pub use custom_link_form::CustomLinkForm;
pub use drop_zone::DropZone;
pub use loading_button::LoadingButton;
pub use menu_builder::MenuBuilder;
pub use menu_item_node::MenuItemNode;
pub use tag_autocomplete::TagAutocomplete;
pub use toast_host::ToastHost;
