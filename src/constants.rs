//! Global constants for the inventory manager

/// Title shown in the navigation bar and the window/page title
pub const APP_TITLE: &str = "Inventory Manager";

/// Heading of the gallery page
pub const GALLERY_TITLE: &str = "Item Gallery";

/// Message shown by the gallery when the store holds no items
pub const EMPTY_GALLERY_MESSAGE: &str = "No items found. Add some items to get started!";

/// Origin used by the in-memory blob provider when building handle URIs
pub const DEFAULT_BLOB_ORIGIN: &str = "inventory.local";

/// URI scheme of handles produced by blob-style providers
pub const BLOB_SCHEME: &str = "blob:";
