//! In-memory blob provider used by the native build and tests.

use std::collections::HashMap;
#[cfg(not(target_arch = "wasm32"))]
use std::path::Path;

use super::ImageHandleProvider;
use crate::constants::{BLOB_SCHEME, DEFAULT_BLOB_ORIGIN};
use crate::error::ProviderError;
use crate::model::ImageHandle;

/// Image extensions with a known MIME type.
const IMAGE_MIME_TYPES: &[(&str, &str)] = &[
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
    ("webp", "image/webp"),
    ("tiff", "image/tiff"),
    ("tif", "image/tiff"),
];

/// Guess the MIME type of a file from its name.
pub fn mime_type_for(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    let (_, ext) = lower.rsplit_once('.')?;
    IMAGE_MIME_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}

/// A raw file selected for upload (filename and bytes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceFile {
    /// Filename of the image
    pub name: String,
    /// Raw file bytes
    pub bytes: Vec<u8>,
    /// MIME type, if known
    pub mime_type: Option<String>,
}

/// Whether a MIME type names an image (`image/*`).
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

impl SourceFile {
    /// Create a file from in-memory bytes, guessing the MIME type from the name.
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let name = name.into();
        let mime_type = mime_type_for(&name).map(String::from);
        Self {
            name,
            bytes,
            mime_type,
        }
    }

    /// Read a file from disk (native only).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_path(path: &Path) -> std::io::Result<Self> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, bytes))
    }
}

/// Keeps file contents in a table and hands out `blob:<origin>/<n>` handles,
/// the way a browser's object URL registry does.
#[derive(Debug)]
pub struct MemoryBlobProvider {
    origin: String,
    next_id: u64,
    blobs: HashMap<ImageHandle, SourceFile>,
}

impl MemoryBlobProvider {
    /// Create a provider issuing handles under `origin`.
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            next_id: 1,
            blobs: HashMap::new(),
        }
    }

    /// Contents behind a live handle.
    pub fn get(&self, handle: &ImageHandle) -> Option<&SourceFile> {
        self.blobs.get(handle)
    }

    /// Number of handles issued and not yet revoked.
    pub fn live_handles(&self) -> usize {
        self.blobs.len()
    }

    /// Whether `handle` is still backed by data.
    pub fn is_live(&self, handle: &ImageHandle) -> bool {
        self.blobs.contains_key(handle)
    }
}

impl Default for MemoryBlobProvider {
    fn default() -> Self {
        Self::new(DEFAULT_BLOB_ORIGIN)
    }
}

impl ImageHandleProvider for MemoryBlobProvider {
    type File = SourceFile;

    fn file_name(&self, file: &SourceFile) -> String {
        file.name.clone()
    }

    fn resolve(&mut self, file: &SourceFile) -> Result<ImageHandle, ProviderError> {
        if !file.mime_type.as_deref().is_some_and(is_image_mime) {
            return Err(ProviderError::UnsupportedType {
                name: file.name.clone(),
            });
        }
        if file.bytes.is_empty() {
            return Err(ProviderError::EmptyFile {
                name: file.name.clone(),
            });
        }

        let handle = ImageHandle::new(format!("{}{}/{}", BLOB_SCHEME, self.origin, self.next_id));
        self.next_id += 1;
        log::debug!(
            "🖼️ Resolved '{}' ({} bytes) -> {}",
            file.name,
            file.bytes.len(),
            handle
        );
        self.blobs.insert(handle.clone(), file.clone());
        Ok(handle)
    }

    fn revoke(&mut self, handle: &ImageHandle) {
        if self.blobs.remove(handle).is_some() {
            log::debug!("🗑️ Revoked {}", handle);
        } else {
            log::warn!("Revoke of unknown handle {}", handle);
        }
    }
}
