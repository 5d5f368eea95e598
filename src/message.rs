//! Application message types.
//!
//! All UI events and actions are represented as messages in the Elm architecture style.

use crate::model::{Category, ItemId};
use crate::route::Route;

/// Messages that can be sent to update application state.
///
/// `F` is the platform file type carried by the image pickers.
#[derive(Debug, Clone)]
pub enum Message<F> {
    // Navigation bar
    /// Go to another page
    Navigate(Route),

    // Add page
    /// Item name input changed
    NameChanged(String),
    /// Description text area changed
    DescriptionChanged(String),
    /// Item type selected
    CategorySelected(Category),
    /// Cover image picked (or cleared)
    CoverPicked(Option<F>),
    /// Additional images picked, replacing the previous selection
    AdditionalPicked(Vec<F>),
    /// "Add Item" pressed
    SubmitItem,

    // Gallery
    /// Grid card clicked
    OpenItem(ItemId),
    /// Detail view close button
    CloseItem,
    /// Carousel right arrow
    NextImage,
    /// Carousel left arrow
    PrevImage,
    /// Thumbnail clicked
    ShowImage(usize),
}
