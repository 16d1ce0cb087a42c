use async_trait::async_trait;
use clip_core::{MappingId, MappingStore, ShortCode, StoreError, UrlMapping};
use sqlx::mysql::MySqlRow;
use sqlx::{MySqlPool, Row};

/// MySQL implementation of the [`MappingStore`] contract.
///
/// Ids come from the table's `AUTO_INCREMENT` sequence and are returned by
/// the insert itself, so `create` is a single statement. The two composite
/// unique keys back the uniqueness constraints; a violated key surfaces as
/// [`StoreError::Conflict`].
#[derive(Debug, Clone)]
pub struct MySqlStore {
    pool: MySqlPool,
}

impl MySqlStore {
    /// Creates a store from an existing MySQL connection pool.
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Creates a store by opening a new MySQL connection pool.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = MySqlPool::connect(database_url)
            .await
            .map_err(map_sqlx_error)?;
        Ok(Self::new(pool))
    }

    /// Returns a reference to the underlying pool.
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Disambiguates a zero-row code update: the mapping may be missing, or
    /// its code may already be set (the guarded `UPDATE` skips those rows).
    async fn verify_code(&self, id: MappingId, code: &ShortCode) -> Result<(), StoreError> {
        let row = sqlx::query(
            r#"
            SELECT code
            FROM url_mappings
            WHERE id = ?
            LIMIT 1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let Some(row) = row else {
            return Err(StoreError::InvalidData(format!("no mapping with id {id}")));
        };

        let current: Option<String> = row.try_get("code").map_err(map_sqlx_error)?;
        if current.as_deref() == Some(code.as_str()) {
            Ok(())
        } else {
            Err(StoreError::Conflict(format!(
                "mapping {id} already carries a different code"
            )))
        }
    }
}

fn mapping_from_row(row: &MySqlRow) -> Result<UrlMapping, StoreError> {
    let id: u64 = row.try_get("id").map_err(map_sqlx_error)?;
    let origin: String = row.try_get("origin").map_err(map_sqlx_error)?;
    let path: String = row.try_get("path").map_err(map_sqlx_error)?;
    let code: Option<String> = row.try_get("code").map_err(map_sqlx_error)?;

    Ok(UrlMapping {
        id,
        origin,
        path,
        code: code.map(ShortCode::new),
    })
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(sqlx::error::DatabaseError::is_unique_violation)
}

fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    let message = err.to_string();

    match err {
        sqlx::Error::PoolTimedOut => StoreError::Timeout(message),
        sqlx::Error::PoolClosed
        | sqlx::Error::WorkerCrashed
        | sqlx::Error::Io(_)
        | sqlx::Error::Tls(_) => StoreError::Unavailable(message),
        sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::TypeNotFound { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::RowNotFound => StoreError::InvalidData(message),
        _ => StoreError::Query(message),
    }
}

#[async_trait]
impl MappingStore for MySqlStore {
    async fn find_by_origin_and_path(
        &self,
        origin: &str,
        path: &str,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, origin, path, code
            FROM url_mappings
            WHERE origin = ? AND path = ?
            LIMIT 1
            "#,
        )
        .bind(origin)
        .bind(path)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(mapping_from_row).transpose()
    }

    async fn find_by_origin_and_code(
        &self,
        origin: &str,
        code: &ShortCode,
    ) -> Result<Option<UrlMapping>, StoreError> {
        let row = sqlx::query(
            r#"
            SELECT id, origin, path, code
            FROM url_mappings
            WHERE origin = ? AND code = ?
            LIMIT 1
            "#,
        )
        .bind(origin)
        .bind(code.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        row.as_ref().map(mapping_from_row).transpose()
    }

    async fn create(&self, origin: &str, path: &str) -> Result<UrlMapping, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO url_mappings (origin, path, code)
            VALUES (?, ?, NULL)
            "#,
        )
        .bind(origin)
        .bind(path)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) => Ok(UrlMapping {
                id: done.last_insert_id(),
                origin: origin.to_owned(),
                path: path.to_owned(),
                code: None,
            }),
            Err(err) if is_unique_violation(&err) => Err(StoreError::Conflict(format!(
                "mapping for origin '{origin}' and path '{path}' already exists"
            ))),
            Err(err) => Err(map_sqlx_error(err)),
        }
    }

    async fn set_code(&self, id: MappingId, code: &ShortCode) -> Result<(), StoreError> {
        // The `code IS NULL` guard keeps codes immutable; a zero-row update
        // is disambiguated by a follow-up read.
        let result = sqlx::query(
            r#"
            UPDATE url_mappings
            SET code = ?
            WHERE id = ?
              AND code IS NULL
            "#,
        )
        .bind(code.as_str())
        .bind(id)
        .execute(&self.pool)
        .await;

        match result {
            Ok(done) if done.rows_affected() > 0 => Ok(()),
            Ok(_) => self.verify_code(id, code).await,
            Err(err) if is_unique_violation(&err) => Err(StoreError::Conflict(format!(
                "code '{code}' is already taken under this origin"
            ))),
            Err(err) => Err(map_sqlx_error(err)),
        }
    }
}
