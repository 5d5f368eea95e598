//! Gallery view state: grid overview or a single item in the carousel.

use crate::model::ItemId;
use crate::state::InventoryStore;

/// Which part of the gallery is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewState {
    /// Card grid of all items
    #[default]
    Grid,
    /// Modal detail view of one item
    Detail {
        /// The item being inspected
        item: ItemId,
        /// Active carousel position, always below `image_count`
        active: usize,
        /// Number of images of `item` (cover included)
        image_count: usize,
    },
}

/// Per-visit state of the gallery page.
///
/// A fresh model is built every time the gallery route is entered, so every
/// visit starts on the grid.
#[derive(Debug, Default)]
pub struct GalleryViewModel {
    state: ViewState,
}

impl GalleryViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn is_grid(&self) -> bool {
        matches!(self.state, ViewState::Grid)
    }

    /// The item open in the detail view, if any.
    pub fn selection(&self) -> Option<ItemId> {
        match self.state {
            ViewState::Grid => None,
            ViewState::Detail { item, .. } => Some(item),
        }
    }

    /// Active carousel position. `None` while on the grid.
    pub fn active_index(&self) -> Option<usize> {
        match self.state {
            ViewState::Grid => None,
            ViewState::Detail { active, .. } => Some(active),
        }
    }

    /// Carousel length of the open item. `None` while on the grid.
    pub fn image_count(&self) -> Option<usize> {
        match self.state {
            ViewState::Grid => None,
            ViewState::Detail { image_count, .. } => Some(image_count),
        }
    }

    /// Open `item` at its cover image.
    ///
    /// # Panics
    ///
    /// Panics if `item` is not in `store`.
    pub fn select(&mut self, store: &InventoryStore, item: ItemId) {
        let Some(selected) = store.get(item) else {
            panic!(
                "selected item {} is not in the store ({} items)",
                item,
                store.len()
            );
        };

        self.state = ViewState::Detail {
            item,
            active: 0,
            image_count: selected.image_count(),
        };
        log::debug!("🔍 Opened item {} ({} images)", item, selected.image_count());
    }

    /// Return to the grid.
    pub fn close(&mut self) {
        if let Some(item) = self.selection() {
            log::debug!("Closed item {}", item);
        }
        self.state = ViewState::Grid;
    }

    /// Move to the next image, wrapping around.
    pub fn next(&mut self) {
        self.step(1);
    }

    /// Move to the previous image, wrapping around.
    pub fn prev(&mut self) {
        self.step(-1);
    }

    /// Show the image at `index` directly.
    ///
    /// # Panics
    ///
    /// Panics on the grid or if `index` is past the open item's last image.
    pub fn jump_to(&mut self, index: usize) {
        match &mut self.state {
            ViewState::Grid => panic!("jump_to({}) called while no item is open", index),
            ViewState::Detail {
                active,
                image_count,
                ..
            } => {
                assert!(
                    index < *image_count,
                    "image index {} out of range for {} images",
                    index,
                    image_count
                );
                *active = index;
            }
        }
    }

    fn step(&mut self, delta: isize) {
        match &mut self.state {
            ViewState::Grid => log::debug!("Ignoring carousel step on the grid"),
            ViewState::Detail {
                active,
                image_count,
                ..
            } => {
                *active = wrap_index(*active, delta, *image_count);
            }
        }
    }
}

/// `(index + delta) mod len`, always in `0..len`.
fn wrap_index(index: usize, delta: isize, len: usize) -> usize {
    debug_assert!(len > 0, "carousel cannot be empty");
    let len = len as isize;
    (index as isize + delta).rem_euclid(len) as usize
}
