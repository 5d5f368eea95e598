//! Draft state of the add-item form.

use crate::model::Category;

/// Field values entered so far on the add page.
///
/// Generic over the platform's file type so the same form backs the native
/// shell (`SourceFile`) and the browser (`web_sys::File`).
#[derive(Debug, Clone)]
pub struct AddItemForm<F> {
    pub name: String,
    pub description: String,
    pub category: Category,
    /// Required cover image; `None` until the user picks one
    pub cover: Option<F>,
    /// Extra images in the order they were picked
    pub additional: Vec<F>,
}

impl<F> AddItemForm<F> {
    /// Empty draft with the given preselected category.
    pub fn new(category: Category) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            category,
            cover: None,
            additional: Vec::new(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.category = category;
    }

    /// Replace the cover pick. Passing `None` clears it.
    pub fn set_cover(&mut self, cover: Option<F>) {
        self.cover = cover;
    }

    /// Replace the whole additional-image selection, as a multi-file picker does.
    pub fn set_additional(&mut self, files: Vec<F>) {
        self.additional = files;
    }

    /// Whether the draft can be submitted (only the cover is mandatory).
    pub fn is_ready(&self) -> bool {
        self.cover.is_some()
    }
}

impl<F> Default for AddItemForm<F> {
    fn default() -> Self {
        Self::new(Category::default())
    }
}
