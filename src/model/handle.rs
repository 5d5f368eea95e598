//! Opaque display handles for item images.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A directly displayable reference to an image, such as a `blob:` object URL.
///
/// Produced by an [`ImageHandleProvider`](crate::provider::ImageHandleProvider);
/// the inventory core only stores and compares handles, it never looks inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageHandle(String);

impl ImageHandle {
    /// Wrap a provider-issued URI.
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// The URI to hand to an image element.
    pub fn as_uri(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
