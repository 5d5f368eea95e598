//! Data models for the inventory manager.

mod category;
mod handle;
mod item;

pub use category::{Category, ParseCategoryError};
pub use handle::ImageHandle;
pub use item::{Item, ItemId};
