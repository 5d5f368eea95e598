//! Read-only projections of the inventory for rendering.
//!
//! Views are rebuilt from the store and the gallery model on demand; they own
//! their data so they can be serialized and shipped to a renderer as-is.

use serde::Serialize;

use crate::constants::EMPTY_GALLERY_MESSAGE;
use crate::model::{ImageHandle, ItemId};
use crate::route::Route;
use crate::state::{GalleryViewModel, InventoryStore, ViewState};

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    pub active: bool,
}

impl NavLink {
    /// Navigation bar entries, marking `current` as active.
    pub fn bar(current: Route) -> Vec<NavLink> {
        Route::all()
            .iter()
            .map(|&route| NavLink {
                label: route.label(),
                path: route.path(),
                active: route == current,
            })
            .collect()
    }
}

/// One card of the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCard {
    pub id: ItemId,
    pub name: String,
    pub category: &'static str,
    pub cover: ImageHandle,
}

/// The gallery overview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum GridView {
    /// No items yet; show the empty-state indicator
    Empty { message: &'static str },
    /// Cards in insertion order
    Cards { cards: Vec<GridCard> },
}

impl GridView {
    pub fn build(store: &InventoryStore) -> Self {
        if store.is_empty() {
            return GridView::Empty {
                message: EMPTY_GALLERY_MESSAGE,
            };
        }

        let cards = store
            .iter()
            .map(|(id, item)| GridCard {
                id,
                name: item.name().to_string(),
                category: item.category().label(),
                cover: item.cover_image().clone(),
            })
            .collect();
        GridView::Cards { cards }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, GridView::Empty { .. })
    }
}

/// Entry of the thumbnail strip under the carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Thumbnail {
    pub index: usize,
    pub image: ImageHandle,
    /// Highlighted because it is the image on display
    pub active: bool,
}

/// The modal detail view of the open item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub category: &'static str,
    /// Image shown in the carousel
    pub image: ImageHandle,
    pub active_index: usize,
    pub thumbnails: Vec<Thumbnail>,
}

impl DetailView {
    /// Build the detail view, or `None` while the gallery shows the grid.
    pub fn build(store: &InventoryStore, gallery: &GalleryViewModel) -> Option<Self> {
        let ViewState::Detail { item: id, active, .. } = gallery.state() else {
            return None;
        };
        let item = store.get(id)?;
        let image = item.image_at(active)?.clone();

        let thumbnails = item
            .images()
            .enumerate()
            .map(|(index, image)| Thumbnail {
                index,
                image: image.clone(),
                active: index == active,
            })
            .collect();

        Some(Self {
            id,
            name: item.name().to_string(),
            description: item.description().to_string(),
            category: item.category().label(),
            image,
            active_index: active,
            thumbnails,
        })
    }

    /// Position label like "3/15".
    pub fn progress(&self) -> String {
        format!("{}/{}", self.active_index + 1, self.thumbnails.len())
    }
}
