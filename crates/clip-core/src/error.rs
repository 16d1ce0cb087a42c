use thiserror::Error;

/// Errors raised while splitting raw URL strings.
///
/// Every variant describes client input that is not acceptable to the
/// service; the message carries the offending input verbatim.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    /// The string is not a structurally valid absolute URL.
    #[error("invalid URL format: {0}")]
    InvalidUrl(String),
    /// The string parses as a URL but carries no extractable short code.
    #[error("invalid shortened URL format: {0}")]
    InvalidShortUrl(String),
    /// A URL component exceeds the stored length limits.
    #[error("URL component too long: {0}")]
    TooLong(String),
}

#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write. Of two racing duplicate
    /// writes, the loser sees this.
    #[error("mapping already exists: {0}")]
    Conflict(String),
    #[error("store backend unavailable: {0}")]
    Unavailable(String),
    #[error("store operation timed out: {0}")]
    Timeout(String),
    #[error("store query failed: {0}")]
    Query(String),
    #[error("stored data is invalid: {0}")]
    InvalidData(String),
}
