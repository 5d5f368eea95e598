//! Inventory Manager
//!
//! Client-side core of a catalog tool: an append-only inventory of items with
//! cover and additional images, a gallery grid, and a detail view with a
//! wrap-around image carousel. Runs natively and in the browser (WASM).

mod app;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
mod message;
pub mod model;
pub mod provider;
mod route;
pub mod state;
pub mod view;

pub use app::InventoryApp;
pub use config::{AppConfig, LogLevel};
pub use error::{AddItemError, ProviderError};
pub use message::Message;
pub use model::{Category, ImageHandle, Item, ItemId};
pub use route::Route;

// WASM entry point
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::*;
