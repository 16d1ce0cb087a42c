use async_trait::async_trait;
use clip_core::{MappingId, MappingStore, ShortCode, StoreError, UrlMapping};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use std::sync::atomic::{AtomicU64, Ordering};

/// In-memory implementation of the [`MappingStore`] contract using DashMap.
///
/// Rows live in a map keyed by id; the two uniqueness constraints are
/// secondary maps keyed by `(origin, path)` and `(origin, code)`. A writer
/// claims the constraint entry before publishing, so of two racing
/// duplicate writes exactly one sees the vacant entry and the other gets
/// [`StoreError::Conflict`].
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: DashMap<MappingId, UrlMapping>,
    by_path: DashMap<(String, String), MappingId>,
    by_code: DashMap<(String, String), MappingId>,
    sequence: AtomicU64,
}

impl MemoryStore {
    /// Creates an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self::default()
    }

    fn next_id(&self) -> MappingId {
        self.sequence.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl MappingStore for MemoryStore {
    async fn find_by_origin_and_path(
        &self,
        origin: &str,
        path: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let key = (origin.to_owned(), path.to_owned());
        let Some(id) = self.by_path.get(&key).map(|entry| *entry) else {
            return Ok(None);
        };
        Ok(self.rows.get(&id).map(|row| row.clone()))
    }

    async fn find_by_origin_and_code(
        &self,
        origin: &str,
        code: &ShortCode,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let key = (origin.to_owned(), code.as_str().to_owned());
        let Some(id) = self.by_code.get(&key).map(|entry| *entry) else {
            return Ok(None);
        };
        Ok(self.rows.get(&id).map(|row| row.clone()))
    }

    async fn create(&self, origin: &str, path: &str) -> Result<UrlMapping, StoreError> {
        match self.by_path.entry((origin.to_owned(), path.to_owned())) {
            Entry::Occupied(_) => Err(StoreError::Conflict(format!(
                "mapping for origin '{origin}' and path '{path}' already exists"
            ))),
            Entry::Vacant(vacant) => {
                let mapping = UrlMapping {
                    id: self.next_id(),
                    origin: origin.to_owned(),
                    path: path.to_owned(),
                    code: None,
                };
                // Publish the row before the constraint entry points at it.
                self.rows.insert(mapping.id, mapping.clone());
                vacant.insert(mapping.id);
                Ok(mapping)
            }
        }
    }

    async fn set_code(&self, id: MappingId, code: &ShortCode) -> Result<(), StoreError> {
        let Some(mut row) = self.rows.get_mut(&id) else {
            return Err(StoreError::InvalidData(format!("no mapping with id {id}")));
        };

        if let Some(existing) = &row.code {
            return if existing == code {
                Ok(())
            } else {
                Err(StoreError::Conflict(format!(
                    "mapping {id} already carries a different code"
                )))
            };
        }

        match self
            .by_code
            .entry((row.origin.clone(), code.as_str().to_owned()))
        {
            Entry::Occupied(occupied) if *occupied.get() != id => {
                Err(StoreError::Conflict(format!(
                    "code '{code}' is already taken under origin '{}'",
                    row.origin
                )))
            }
            Entry::Occupied(_) => {
                row.code = Some(code.clone());
                Ok(())
            }
            Entry::Vacant(vacant) => {
                vacant.insert(id);
                row.code = Some(code.clone());
                Ok(())
            }
        }
    }
}
