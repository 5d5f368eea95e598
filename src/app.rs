//! Inventory Manager application session.
//!
//! `InventoryApp` owns everything that lives for one session:
//! - the inventory store (append-only)
//! - the image handle provider
//! - the current page: gallery view model or add-item draft
//!
//! Pages are rebuilt on every navigation, so the gallery always opens on the grid
//! and the add form always opens empty.

use web_time::Instant;

use crate::config::AppConfig;
use crate::error::{AddItemError, ProviderError};
use crate::message::Message;
use crate::model::{Category, ImageHandle, Item, ItemId};
use crate::provider::ImageHandleProvider;
use crate::route::Route;
use crate::state::{AddItemForm, GalleryViewModel, InventoryStore};
use crate::view::{DetailView, GridView, NavLink};

/// State of the page currently shown.
#[derive(Debug)]
enum Page<F> {
    Gallery(GalleryViewModel),
    AddItem(AddItemForm<F>),
}

/// One application session.
pub struct InventoryApp<P: ImageHandleProvider> {
    provider: P,
    store: InventoryStore,
    default_category: Category,
    page: Page<P::File>,
    add_error: Option<AddItemError>,
}

impl<P: ImageHandleProvider> InventoryApp<P> {
    /// Start a session on the gallery with an empty store.
    pub fn new(provider: P, config: &AppConfig) -> Self {
        log::info!("Starting {} session", config.app_name);
        Self {
            provider,
            store: InventoryStore::new(),
            default_category: config.preferences.default_category,
            page: Page::Gallery(GalleryViewModel::new()),
            add_error: None,
        }
    }

    /// Route of the page currently shown.
    pub fn route(&self) -> Route {
        match self.page {
            Page::Gallery(_) => Route::Gallery,
            Page::AddItem(_) => Route::AddItem,
        }
    }

    /// Enter `route`, building its page state from scratch.
    pub fn navigate(&mut self, route: Route) {
        log::debug!("🔄 Navigating {} -> {}", self.route(), route);
        self.add_error = None;
        self.page = match route {
            Route::Gallery => Page::Gallery(GalleryViewModel::new()),
            Route::AddItem => Page::AddItem(AddItemForm::new(self.default_category)),
        };
    }

    /// Category new drafts start with.
    pub fn default_category(&self) -> Category {
        self.default_category
    }

    /// Change the category new drafts start with. An open draft keeps its own.
    pub fn set_default_category(&mut self, category: Category) {
        log::debug!("Default category set to {}", category);
        self.default_category = category;
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// All items in insertion order.
    pub fn list_items(&self) -> &[Item] {
        self.store.list()
    }

    /// Gallery state, when the gallery is shown.
    pub fn gallery(&self) -> Option<&GalleryViewModel> {
        match &self.page {
            Page::Gallery(gallery) => Some(gallery),
            Page::AddItem(_) => None,
        }
    }

    /// Add-form draft, when the add page is shown.
    pub fn form(&self) -> Option<&AddItemForm<P::File>> {
        match &self.page {
            Page::AddItem(form) => Some(form),
            Page::Gallery(_) => None,
        }
    }

    /// Why the last form submission failed, if it did.
    pub fn add_error(&self) -> Option<&AddItemError> {
        self.add_error.as_ref()
    }

    /// Resolve every image and append the resulting item.
    ///
    /// Either the item is appended with all its handles, or nothing changes:
    /// handles resolved before a failure are revoked again.
    pub fn add_item(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        cover: Option<&P::File>,
        additional: &[P::File],
    ) -> Result<ItemId, AddItemError> {
        let start = Instant::now();
        let cover = cover.ok_or_else(|| {
            log::warn!("Rejected item without a cover image");
            AddItemError::MissingCover
        })?;

        let cover_handle = self
            .provider
            .resolve(cover)
            .map_err(|source| self.resolve_failed(cover, source, &[]))?;

        let mut extra = Vec::with_capacity(additional.len());
        for file in additional {
            match self.provider.resolve(file) {
                Ok(handle) => extra.push(handle),
                Err(source) => {
                    extra.push(cover_handle);
                    return Err(self.resolve_failed(file, source, &extra));
                }
            }
        }

        let id = self.store.append(Item::new(
            name,
            description,
            category,
            cover_handle,
            extra,
        ));
        log::debug!("Built item {} in {:?}", id, start.elapsed());
        Ok(id)
    }

    fn resolve_failed(
        &mut self,
        file: &P::File,
        source: ProviderError,
        resolved: &[ImageHandle],
    ) -> AddItemError {
        let name = self.provider.file_name(file);
        log::warn!("Failed to resolve '{}': {}", name, source);
        for handle in resolved {
            self.provider.revoke(handle);
        }
        AddItemError::resolve(name, source)
    }

    /// Open the detail view of `item` at its cover, switching to the gallery if needed.
    ///
    /// # Panics
    ///
    /// Panics if `item` is not in the store.
    pub fn open_item(&mut self, item: ItemId) {
        if self.route() != Route::Gallery {
            self.navigate(Route::Gallery);
        }
        if let Page::Gallery(gallery) = &mut self.page {
            gallery.select(&self.store, item);
        }
    }

    /// Close the detail view.
    pub fn close_item(&mut self) {
        self.with_gallery(GalleryViewModel::close);
    }

    pub fn show_next(&mut self) {
        self.with_gallery(GalleryViewModel::next);
    }

    pub fn show_prev(&mut self) {
        self.with_gallery(GalleryViewModel::prev);
    }

    /// Jump to image `index` of the open item.
    ///
    /// # Panics
    ///
    /// Panics if no item is open or `index` is out of range.
    pub fn show_image_at(&mut self, index: usize) {
        match &mut self.page {
            Page::Gallery(gallery) => gallery.jump_to(index),
            Page::AddItem(_) => panic!("show_image_at({}) called while no item is open", index),
        }
    }

    fn with_gallery(&mut self, f: impl FnOnce(&mut GalleryViewModel)) {
        match &mut self.page {
            Page::Gallery(gallery) => f(gallery),
            Page::AddItem(_) => log::debug!("Ignoring gallery action on the add page"),
        }
    }

    /// Navigation bar with the current route marked.
    pub fn nav_view(&self) -> Vec<NavLink> {
        NavLink::bar(self.route())
    }

    /// Grid projection of the store.
    pub fn grid_view(&self) -> GridView {
        GridView::build(&self.store)
    }

    /// Detail projection of the open item, if any.
    pub fn detail_view(&self) -> Option<DetailView> {
        self.gallery()
            .and_then(|gallery| DetailView::build(&self.store, gallery))
    }

    /// Apply a UI message.
    pub fn update(&mut self, message: Message<P::File>) {
        match message {
            Message::Navigate(route) => self.navigate(route),

            Message::NameChanged(name) => self.with_form(|form| form.set_name(name)),
            Message::DescriptionChanged(text) => {
                self.with_form(|form| form.set_description(text))
            }
            Message::CategorySelected(category) => {
                self.with_form(|form| form.set_category(category))
            }
            Message::CoverPicked(file) => self.with_form(|form| form.set_cover(file)),
            Message::AdditionalPicked(files) => self.with_form(|form| form.set_additional(files)),
            Message::SubmitItem => self.submit_form(),

            Message::OpenItem(item) => self.open_item(item),
            Message::CloseItem => self.close_item(),
            Message::NextImage => self.show_next(),
            Message::PrevImage => self.show_prev(),
            Message::ShowImage(index) => self.show_image_at(index),
        }
    }

    fn with_form(&mut self, f: impl FnOnce(&mut AddItemForm<P::File>)) {
        match &mut self.page {
            Page::AddItem(form) => f(form),
            Page::Gallery(_) => log::debug!("Ignoring form input on the gallery"),
        }
    }

    /// Add the drafted item and go to the gallery, or stay on the form with the error.
    fn submit_form(&mut self) {
        if let Page::AddItem(form) = &self.page {
            if !form.is_ready() {
                log::warn!("Submit blocked: no cover image picked");
                self.add_error = Some(AddItemError::MissingCover);
                return;
            }
        }

        let form = match std::mem::replace(&mut self.page, Page::Gallery(GalleryViewModel::new()))
        {
            Page::AddItem(form) => form,
            other => {
                log::debug!("Ignoring submit outside the add page");
                self.page = other;
                return;
            }
        };

        let result = self.add_item(
            form.name.clone(),
            form.description.clone(),
            form.category,
            form.cover.as_ref(),
            &form.additional,
        );

        match result {
            Ok(_) => self.navigate(Route::Gallery),
            Err(e) => {
                self.page = Page::AddItem(form);
                self.add_error = Some(e);
            }
        }
    }

    /// End the session, revoking every handle the store holds.
    ///
    /// Returns the provider so callers can inspect or reuse it.
    pub fn teardown(self) -> P {
        let mut provider = self.provider;
        let items = self.store.teardown();
        let mut revoked = 0;
        for handle in items.into_iter().flat_map(Item::into_images) {
            provider.revoke(&handle);
            revoked += 1;
        }
        log::info!("Session ended, revoked {} image handles", revoked);
        provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::provider::{MemoryBlobProvider, SourceFile};

    fn file(name: &str) -> SourceFile {
        SourceFile::new(name, name.as_bytes().to_vec())
    }

    fn app() -> InventoryApp<MemoryBlobProvider> {
        InventoryApp::new(MemoryBlobProvider::new("test"), &AppConfig::default())
    }

    #[test]
    fn test_starts_on_empty_gallery() {
        let app = app();
        assert_eq!(app.route(), Route::Gallery);
        assert!(app.list_items().is_empty());
        assert!(app.grid_view().is_empty());
        assert!(app.gallery().is_some_and(GalleryViewModel::is_grid));
    }

    #[test]
    fn test_add_item_resolves_images_in_order() {
        let mut app = app();
        let id = app
            .add_item(
                "Boot",
                "Leather boot",
                Category::Shoes,
                Some(&file("f1.png")),
                &[file("f2.png"), file("f3.png")],
            )
            .unwrap();

        assert_eq!(app.list_items().len(), 1);
        let item = app.store().get(id).unwrap();
        assert_eq!(item.name(), "Boot");
        assert_eq!(item.category(), Category::Shoes);

        let names: Vec<String> = item
            .images()
            .map(|h| app.provider().get(h).unwrap().name.clone())
            .collect();
        assert_eq!(names, vec!["f1.png", "f2.png", "f3.png"]);
    }

    #[test]
    fn test_missing_cover_leaves_store_unchanged() {
        let mut app = app();
        let err = app
            .add_item("Cap", "", Category::Accessories, None, &[file("a.png")])
            .unwrap_err();

        assert_eq!(err, AddItemError::MissingCover);
        assert!(app.list_items().is_empty());
        assert_eq!(app.provider().live_handles(), 0);
    }

    #[test]
    fn test_failed_resolution_rolls_back_handles() {
        let mut app = app();
        let empty = SourceFile::new("broken.png", Vec::new());
        let err = app
            .add_item(
                "Racket",
                "",
                Category::Sports,
                Some(&file("cover.png")),
                &[file("ok.png"), empty, file("never.png")],
            )
            .unwrap_err();

        assert_eq!(
            err,
            AddItemError::resolve(
                "broken.png",
                ProviderError::EmptyFile {
                    name: "broken.png".to_string()
                }
            )
        );
        assert!(app.list_items().is_empty());
        assert_eq!(app.provider().live_handles(), 0);
    }

    #[test]
    fn test_failed_cover_resolution() {
        let mut app = app();
        let err = app
            .add_item(
                "Phone",
                "",
                Category::Electronics,
                Some(&SourceFile::new("cover.png", Vec::new())),
                &[],
            )
            .unwrap_err();
        assert!(matches!(err, AddItemError::Resolve { ref file, .. } if file == "cover.png"));
        assert!(app.list_items().is_empty());
    }

    #[test]
    fn test_empty_name_is_accepted() {
        let mut app = app();
        assert!(
            app.add_item("", "", Category::Pant, Some(&file("p.png")), &[])
                .is_ok()
        );
        assert_eq!(app.list_items()[0].name(), "");
    }

    #[test]
    fn test_open_item_starts_at_cover_after_navigation() {
        let mut app = app();
        let id = app
            .add_item(
                "Tee",
                "",
                Category::Shirt,
                Some(&file("a.png")),
                &[file("b.png")],
            )
            .unwrap();

        app.open_item(id);
        app.show_next();
        assert_eq!(app.detail_view().unwrap().active_index, 1);

        app.navigate(Route::AddItem);
        app.navigate(Route::Gallery);
        assert!(app.gallery().unwrap().is_grid());

        app.open_item(id);
        assert_eq!(app.detail_view().unwrap().active_index, 0);
    }

    #[test]
    fn test_open_item_from_add_page_switches_to_gallery() {
        let mut app = app();
        let id = app
            .add_item("Tee", "", Category::Shirt, Some(&file("a.png")), &[])
            .unwrap();
        app.navigate(Route::AddItem);

        app.open_item(id);
        assert_eq!(app.route(), Route::Gallery);
        assert_eq!(app.gallery().unwrap().selection(), Some(id));
    }

    #[test]
    fn test_carousel_actions_ignored_on_add_page() {
        let mut app = app();
        app.navigate(Route::AddItem);
        app.show_next();
        app.show_prev();
        app.close_item();
        assert_eq!(app.route(), Route::AddItem);
    }

    #[test]
    #[should_panic(expected = "no item is open")]
    fn test_show_image_on_add_page_panics() {
        let mut app = app();
        app.navigate(Route::AddItem);
        app.show_image_at(0);
    }

    #[test]
    fn test_form_uses_configured_default_category() {
        let mut config = AppConfig::default();
        config.preferences.default_category = Category::Shoes;
        let mut app = InventoryApp::new(MemoryBlobProvider::default(), &config);

        app.navigate(Route::AddItem);
        assert_eq!(app.form().unwrap().category, Category::Shoes);
    }

    #[test]
    fn test_nav_view_follows_route() {
        let mut app = app();
        let active = |app: &InventoryApp<MemoryBlobProvider>| {
            app.nav_view()
                .into_iter()
                .find(|link| link.active)
                .map(|link| link.label)
        };
        assert_eq!(active(&app), Some("View Items"));

        app.update(Message::Navigate(Route::AddItem));
        assert_eq!(active(&app), Some("Add Items"));
    }

    #[test]
    fn test_default_category_change_applies_to_next_draft() {
        let mut app = app();
        app.navigate(Route::AddItem);
        app.set_default_category(Category::Electronics);
        assert_eq!(app.form().unwrap().category, Category::Shirt);

        app.navigate(Route::AddItem);
        assert_eq!(app.default_category(), Category::Electronics);
        assert_eq!(app.form().unwrap().category, Category::Electronics);
    }

    #[test]
    fn test_submit_without_cover_resolves_nothing() {
        let mut app = app();
        app.navigate(Route::AddItem);
        app.update(Message::NameChanged("Scarf".to_string()));
        app.update(Message::AdditionalPicked(vec![file("side.png")]));

        app.update(Message::SubmitItem);

        assert_eq!(app.route(), Route::AddItem);
        assert_eq!(app.add_error(), Some(&AddItemError::MissingCover));
        assert_eq!(app.form().unwrap().name, "Scarf");
        assert_eq!(app.form().unwrap().additional.len(), 1);
        assert_eq!(app.provider().live_handles(), 0);
        assert!(app.store().is_empty());

        app.update(Message::CoverPicked(Some(file("front.png"))));
        app.update(Message::SubmitItem);
        assert_eq!(app.route(), Route::Gallery);
        assert_eq!(app.store().len(), 1);
    }

    #[test]
    fn test_non_image_file_fails_the_add() {
        let mut app = app();
        let err = app
            .add_item(
                "Manual",
                "",
                Category::Electronics,
                Some(&file("a.png")),
                &[file("manual.txt")],
            )
            .unwrap_err();
        assert_eq!(
            err,
            AddItemError::resolve(
                "manual.txt",
                ProviderError::UnsupportedType {
                    name: "manual.txt".to_string()
                }
            )
        );
        assert_eq!(app.provider().live_handles(), 0);
        assert!(app.store().is_empty());
    }

    #[test]
    fn test_teardown_revokes_all_handles() {
        let mut app = app();
        app.add_item("a", "", Category::Shirt, Some(&file("1.png")), &[file("2.png")])
            .unwrap();
        app.add_item("b", "", Category::Pant, Some(&file("3.png")), &[])
            .unwrap();
        assert_eq!(app.provider().live_handles(), 3);

        let provider = app.teardown();
        assert_eq!(provider.live_handles(), 0);
    }
}
