//! Local image previews.
//!
//! Selecting an image allocates a preview reference (an object URL in a
//! browser, a temp file or texture elsewhere). The reference is owned by a
//! [`PreviewHandle`] and released exactly once, when the handle drops.

use super::draft::ImageAttachment;
use std::sync::Arc;

/// Opaque reference to an allocated preview resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PreviewRef(String);

impl PreviewRef {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PreviewRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Allocates and releases preview resources for selected images.
pub trait PreviewAllocator: Send + Sync {
    fn create(&self, image: &ImageAttachment) -> PreviewRef;

    fn release(&self, preview: &PreviewRef);
}

/// Allocator producing `blob:` style references that need no cleanup.
#[derive(Debug, Clone, Default)]
pub struct DefaultPreviewAllocator;

impl PreviewAllocator for DefaultPreviewAllocator {
    fn create(&self, image: &ImageAttachment) -> PreviewRef {
        let reference = PreviewRef::new(format!("blob:surplus/{}", uuid::Uuid::new_v4()));
        tracing::debug!(
            "[Preview] Created {} for {} ({} bytes)",
            reference,
            image.file_name,
            image.bytes.len()
        );
        reference
    }

    fn release(&self, preview: &PreviewRef) {
        tracing::debug!("[Preview] Released {}", preview);
    }
}

/// Owning guard over an allocated preview. Releases it on drop.
pub struct PreviewHandle {
    reference: PreviewRef,
    allocator: Arc<dyn PreviewAllocator>,
}

impl PreviewHandle {
    pub fn allocate(allocator: Arc<dyn PreviewAllocator>, image: &ImageAttachment) -> Self {
        let reference = allocator.create(image);
        Self {
            reference,
            allocator,
        }
    }

    pub fn reference(&self) -> &PreviewRef {
        &self.reference
    }
}

impl std::fmt::Debug for PreviewHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PreviewHandle").field(&self.reference).finish()
    }
}

impl Drop for PreviewHandle {
    fn drop(&mut self) {
        self.allocator.release(&self.reference);
    }
}
