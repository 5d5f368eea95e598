//! Error types for the inventory core.

use thiserror::Error;

/// Errors an [`ImageHandleProvider`](crate::provider::ImageHandleProvider) can report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProviderError {
    /// The file holds no data to display
    #[error("File '{name}' is empty")]
    EmptyFile {
        /// Name of the offending file
        name: String,
    },

    /// The file is not an image the gallery can display
    #[error("File '{name}' is not an image")]
    UnsupportedType {
        /// Name of the offending file
        name: String,
    },

    /// The platform refused to create a display handle
    #[error("Platform error: {0}")]
    Platform(String),
}

/// Errors that abort an add-item operation. The store is left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AddItemError {
    /// No cover image was supplied
    #[error("A cover image is required")]
    MissingCover,

    /// One of the item's files could not be turned into a handle
    #[error("Failed to resolve image '{file}': {source}")]
    Resolve {
        /// Name of the file that failed
        file: String,
        /// Underlying provider failure
        #[source]
        source: ProviderError,
    },
}

impl AddItemError {
    /// Create a resolve error for the named file.
    pub fn resolve(file: impl Into<String>, source: ProviderError) -> Self {
        Self::Resolve {
            file: file.into(),
            source,
        }
    }
}
