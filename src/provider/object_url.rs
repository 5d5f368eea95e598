//! Browser object URL provider (WASM only).

use web_sys::{File, Url};

use super::{ImageHandleProvider, is_image_mime};
use crate::error::ProviderError;
use crate::model::ImageHandle;

/// Resolves picked `File`s through `URL.createObjectURL`.
#[derive(Debug, Default)]
pub struct ObjectUrlProvider;

impl ObjectUrlProvider {
    pub fn new() -> Self {
        Self
    }
}

impl ImageHandleProvider for ObjectUrlProvider {
    type File = File;

    fn file_name(&self, file: &File) -> String {
        file.name()
    }

    fn resolve(&mut self, file: &File) -> Result<ImageHandle, ProviderError> {
        if !is_image_mime(&file.type_()) {
            return Err(ProviderError::UnsupportedType { name: file.name() });
        }
        let url = Url::create_object_url_with_blob(file)
            .map_err(|e| ProviderError::Platform(format!("createObjectURL failed: {:?}", e)))?;
        log::debug!("🖼️ Created object URL for '{}': {}", file.name(), url);
        Ok(ImageHandle::new(url))
    }

    fn revoke(&mut self, handle: &ImageHandle) {
        if let Err(e) = Url::revoke_object_url(handle.as_uri()) {
            log::warn!("Failed to revoke {}: {:?}", handle, e);
        }
    }
}
