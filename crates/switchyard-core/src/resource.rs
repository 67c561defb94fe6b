//! Image resources and the resolver the host provides for them.

use crate::geometry::Size;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of an image resource in the host's resource store.
///
/// `0` is reserved and means "no resource".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceId(u32);

impl ResourceId {
    /// The "no resource" identifier.
    pub const NONE: Self = Self(0);

    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw identifier.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this is the reserved "no resource" identifier.
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == 0
    }

    /// `None` for the reserved identifier, `Some(self)` otherwise.
    #[must_use]
    pub const fn get(self) -> Option<Self> {
        if self.is_none() {
            None
        } else {
            Some(self)
        }
    }
}

impl From<u32> for ResourceId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_none() {
            write!(f, "res:none")
        } else {
            write!(f, "res:{}", self.0)
        }
    }
}

/// A renderable image handed back by the resolver.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    /// Resource this image was loaded from
    pub source: ResourceId,
    /// Intrinsic size
    pub size: Size,
}

impl Image {
    /// Create an image record.
    #[must_use]
    pub const fn new(source: ResourceId, size: Size) -> Self {
        Self { source, size }
    }
}

/// Loads images from the host's resource store.
pub trait ResourceResolver {
    /// Resolve an identifier to an image.
    ///
    /// Returns `None` for [`ResourceId::NONE`] and for identifiers the store
    /// does not know.
    fn resolve(&self, id: ResourceId) -> Option<Image>;
}

impl<R: ResourceResolver + ?Sized> ResourceResolver for &R {
    fn resolve(&self, id: ResourceId) -> Option<Image> {
        (**self).resolve(id)
    }
}

/// Map-backed resolver.
#[derive(Debug, Clone, Default)]
pub struct ResourceTable {
    images: HashMap<ResourceId, Image>,
}

impl ResourceTable {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an image under `id`. Registering [`ResourceId::NONE`] is ignored.
    #[must_use]
    pub fn with_image(mut self, id: ResourceId, size: Size) -> Self {
        self.insert(id, size);
        self
    }

    /// Register an image under `id`. Registering [`ResourceId::NONE`] is ignored.
    pub fn insert(&mut self, id: ResourceId, size: Size) {
        if !id.is_none() {
            self.images.insert(id, Image::new(id, size));
        }
    }

    /// Number of registered images.
    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

impl ResourceResolver for ResourceTable {
    fn resolve(&self, id: ResourceId) -> Option<Image> {
        id.get().and_then(|id| self.images.get(&id).cloned())
    }
}
