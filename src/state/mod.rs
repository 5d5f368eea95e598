//! Application state management modules.

mod add_form;
mod gallery;
mod inventory;

pub use add_form::AddItemForm;
pub use gallery::{GalleryViewModel, ViewState};
pub use inventory::InventoryStore;
