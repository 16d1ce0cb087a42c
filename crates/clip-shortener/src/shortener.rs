use crate::error::ShortenerError;
use async_trait::async_trait;

/// URL shortening and resolution operations.
#[async_trait]
pub trait Shortener: Send + Sync + 'static {
    /// Returns the shortened URL for the given original URL, creating the
    /// mapping on first sight. Shortening the same URL again returns the
    /// same shortened URL without creating anything.
    async fn create_shortened_url(&self, original_url: &str) -> Result<String, ShortenerError>;

    /// Resolves a shortened URL back to the original URL it stands for.
    async fn get_original_url(&self, shortened_url: &str) -> Result<String, ShortenerError>;
}
