//! Image handle providers.
//!
//! A provider turns a raw file picked by the user into an [`ImageHandle`] that a
//! view can display directly. The inventory core only calls `resolve`, stores the
//! result, and hands handles back through `revoke` when they are no longer needed.

mod memory;
#[cfg(target_arch = "wasm32")]
mod object_url;

pub use memory::{MemoryBlobProvider, SourceFile, is_image_mime, mime_type_for};
#[cfg(target_arch = "wasm32")]
pub use object_url::ObjectUrlProvider;

use crate::error::ProviderError;
use crate::model::ImageHandle;

/// Converts files into displayable handles.
pub trait ImageHandleProvider {
    /// The raw file type this provider accepts.
    type File;

    /// Name used when reporting a failure for `file`.
    fn file_name(&self, file: &Self::File) -> String;

    /// Produce a handle for `file`.
    ///
    /// The handle must stay valid until it is passed to [`revoke`](Self::revoke).
    fn resolve(&mut self, file: &Self::File) -> Result<ImageHandle, ProviderError>;

    /// Release a handle issued by this provider.
    fn revoke(&mut self, _handle: &ImageHandle) {}
}
