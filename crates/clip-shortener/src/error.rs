use clip_core::{ParseError, StoreError};
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ShortenerError {
    /// The input is not a well-formed absolute URL. Keeps the parser's
    /// message, which echoes the offending input.
    #[error(transparent)]
    InvalidFormat(#[from] ParseError),
    /// A well-formed shortened URL with no mapping behind it.
    #[error("no original URL found for this shortened URL: {0}")]
    NotFound(String),
    /// The store failed. A conflict here means a racing duplicate write
    /// lost; retrying the operation takes the read path instead.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
