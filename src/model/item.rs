//! Inventory item data model.

use std::fmt;

use serde::Serialize;

use super::{Category, ImageHandle};

/// Position of an item in the inventory store.
///
/// The store is append-only, so an id handed out by it refers to the same item
/// for as long as the store lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ItemId(usize);

impl ItemId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    /// Zero-based position in the store.
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One catalog entry. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    description: String,
    category: Category,
    cover_image: ImageHandle,
    additional_images: Vec<ImageHandle>,
}

impl Item {
    /// Build an item from already resolved handles.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        cover_image: ImageHandle,
        additional_images: Vec<ImageHandle>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            category,
            cover_image,
            additional_images,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The mandatory first image, shown on the grid card.
    pub fn cover_image(&self) -> &ImageHandle {
        &self.cover_image
    }

    pub fn additional_images(&self) -> &[ImageHandle] {
        &self.additional_images
    }

    /// Cover followed by the additional images. Never empty.
    pub fn images(&self) -> impl Iterator<Item = &ImageHandle> {
        std::iter::once(&self.cover_image).chain(self.additional_images.iter())
    }

    /// Image at carousel position `index` (0 is the cover).
    pub fn image_at(&self, index: usize) -> Option<&ImageHandle> {
        match index {
            0 => Some(&self.cover_image),
            n => self.additional_images.get(n - 1),
        }
    }

    /// Length of the carousel, always at least 1.
    pub fn image_count(&self) -> usize {
        1 + self.additional_images.len()
    }

    /// Consume the item, yielding every handle it owns.
    pub(crate) fn into_images(self) -> Vec<ImageHandle> {
        let mut images = Vec::with_capacity(self.image_count());
        images.push(self.cover_image);
        images.extend(self.additional_images);
        images
    }
}
