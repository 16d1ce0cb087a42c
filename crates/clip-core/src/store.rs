use crate::error::StoreError;
use crate::mapping::{MappingId, UrlMapping};
use crate::shortcode::ShortCode;
use async_trait::async_trait;

/// Persistence contract for URL mappings.
///
/// Implementations own id assignment and enforce both uniqueness
/// constraints. Racing duplicate writes are resolved by the store rejecting
/// the loser with [`StoreError::Conflict`], never by callers locking.
#[async_trait]
pub trait MappingStore: Send + Sync + 'static {
    /// Looks up a mapping by its origin and stored path.
    async fn find_by_origin_and_path(
        &self,
        origin: &str,
        path: &str,
    ) -> Result<Option<UrlMapping>, StoreError>;

    /// Looks up a mapping by its origin and short code.
    async fn find_by_origin_and_code(
        &self,
        origin: &str,
        code: &ShortCode,
    ) -> Result<Option<UrlMapping>, StoreError>;

    /// Creates a mapping with a fresh id from the store-owned sequence and
    /// no code. Fails with [`StoreError::Conflict`] if `(origin, path)` is
    /// already mapped.
    async fn create(&self, origin: &str, path: &str) -> Result<UrlMapping, StoreError>;

    /// Attaches a code to an existing mapping. Codes are immutable:
    /// re-attaching the same code is a no-op, while attaching over a
    /// different code, or a code already held by another mapping under the
    /// same origin, fails with [`StoreError::Conflict`]. A missing id is
    /// [`StoreError::InvalidData`].
    async fn set_code(&self, id: MappingId, code: &ShortCode) -> Result<(), StoreError>;
}
