//! Browser bindings.
//!
//! Exposes the inventory session to JavaScript. Views are returned as JSON strings
//! so the page can render them with whatever templating it uses.

use js_sys::Array;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::File;

use crate::provider::ObjectUrlProvider;
use crate::{AppConfig, Category, InventoryApp, Route};

#[wasm_bindgen(start)]
pub fn start() {
    let config = AppConfig::load_from_local_storage();
    crate::logging::init(config.preferences.log_level);
    log::info!("Inventory Manager WASM starting...");
}

fn js_error(message: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&message.to_string())
}

/// Inventory session handle owned by the page.
#[wasm_bindgen]
pub struct WebInventory {
    app: InventoryApp<ObjectUrlProvider>,
    config: AppConfig,
}

#[wasm_bindgen]
impl WebInventory {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebInventory {
        let config = AppConfig::load_from_local_storage();
        WebInventory {
            app: InventoryApp::new(ObjectUrlProvider::new(), &config),
            config,
        }
    }

    /// Current route path (`/` or `/add`).
    pub fn route(&self) -> String {
        self.app.route().path().to_string()
    }

    /// Navigate to a route path.
    pub fn navigate(&mut self, path: &str) -> Result<(), JsValue> {
        let route =
            Route::from_path(path).ok_or_else(|| js_error(format!("Unknown route: {}", path)))?;
        self.app.navigate(route);
        Ok(())
    }

    /// Add an item and return its index in the gallery.
    #[wasm_bindgen(js_name = addItem)]
    pub fn add_item(
        &mut self,
        name: &str,
        description: &str,
        category: &str,
        cover: Option<File>,
        additional: Array,
    ) -> Result<usize, JsValue> {
        let category: Category = category.parse().map_err(js_error)?;
        let additional = additional
            .iter()
            .map(|value| {
                value
                    .dyn_into::<File>()
                    .map_err(|_| js_error("additional images must be File objects"))
            })
            .collect::<Result<Vec<File>, JsValue>>()?;

        let id = self
            .app
            .add_item(name, description, category, cover.as_ref(), &additional)
            .map_err(js_error)?;
        Ok(id.index())
    }

    /// Number of items in the inventory.
    #[wasm_bindgen(js_name = itemCount)]
    pub fn item_count(&self) -> usize {
        self.app.store().len()
    }

    /// Open the detail view of the item at `index`.
    #[wasm_bindgen(js_name = openItem)]
    pub fn open_item(&mut self, index: usize) -> Result<(), JsValue> {
        let id = self
            .app
            .store()
            .id_at(index)
            .ok_or_else(|| js_error(format!("No item at index {}", index)))?;
        self.app.open_item(id);
        Ok(())
    }

    #[wasm_bindgen(js_name = closeItem)]
    pub fn close_item(&mut self) {
        self.app.close_item();
    }

    #[wasm_bindgen(js_name = showNext)]
    pub fn show_next(&mut self) {
        self.app.show_next();
    }

    #[wasm_bindgen(js_name = showPrev)]
    pub fn show_prev(&mut self) {
        self.app.show_prev();
    }

    /// Jump to a thumbnail of the open item.
    #[wasm_bindgen(js_name = showImageAt)]
    pub fn show_image_at(&mut self, index: usize) -> Result<(), JsValue> {
        let count = self
            .app
            .gallery()
            .and_then(|gallery| gallery.image_count())
            .ok_or_else(|| js_error("No item is open"))?;
        if index >= count {
            return Err(js_error(format!(
                "Image index {} out of range for {} images",
                index, count
            )));
        }
        self.app.show_image_at(index);
        Ok(())
    }

    /// Category new drafts start with.
    #[wasm_bindgen(js_name = defaultCategory)]
    pub fn default_category(&self) -> String {
        self.app.default_category().key().to_string()
    }

    /// Change the default draft category and persist it to localStorage.
    #[wasm_bindgen(js_name = setDefaultCategory)]
    pub fn set_default_category(&mut self, category: &str) -> Result<(), JsValue> {
        let category: Category = category.parse().map_err(js_error)?;
        self.app.set_default_category(category);
        self.config.preferences.default_category = category;
        self.save_preferences()
    }

    /// Write the current preferences to localStorage.
    #[wasm_bindgen(js_name = savePreferences)]
    pub fn save_preferences(&self) -> Result<(), JsValue> {
        self.config.save_to_local_storage().map_err(js_error)
    }

    /// Navigation bar as JSON.
    #[wasm_bindgen(js_name = navView)]
    pub fn nav_view(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.app.nav_view()).map_err(js_error)
    }

    /// Grid view as JSON.
    #[wasm_bindgen(js_name = gridView)]
    pub fn grid_view(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.app.grid_view()).map_err(js_error)
    }

    /// Detail view as JSON, or `undefined` while the grid is shown.
    #[wasm_bindgen(js_name = detailView)]
    pub fn detail_view(&self) -> Result<Option<String>, JsValue> {
        self.app
            .detail_view()
            .map(|view| serde_json::to_string(&view))
            .transpose()
            .map_err(js_error)
    }

    /// End the session and release every object URL.
    pub fn teardown(self) {
        self.app.teardown();
    }
}

impl Default for WebInventory {
    fn default() -> Self {
        Self::new()
    }
}
