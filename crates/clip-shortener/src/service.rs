use crate::error::ShortenerError;
use crate::shortener::Shortener;
use async_trait::async_trait;
use clip_core::{
    split_short_url, split_url, MappingStore, ParseError, ShortCode, SplitUrl, UrlMapping,
    MAX_ORIGIN_LEN, MAX_PATH_LEN,
};
use std::sync::Arc;
use tracing::{debug, info, trace};

/// A concrete implementation of the [`Shortener`] trait.
///
/// This service wraps a [`MappingStore`] and combines the rules of the
/// system: structural URL validation, idempotent lookup-before-create, code
/// derivation from the store-assigned id, and URL composition.
#[derive(Debug, Clone)]
pub struct ShortenerService<S> {
    store: Arc<S>,
}

impl<S: MappingStore> ShortenerService<S> {
    /// Creates a new `ShortenerService` over the given store.
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Validates that no component exceeds the stored length limits.
    fn check_lengths(url: &str, split: &SplitUrl) -> Result<(), ShortenerError> {
        if split.origin.len() > MAX_ORIGIN_LEN || split.rest.len() > MAX_PATH_LEN {
            return Err(ParseError::TooLong(url.to_owned()).into());
        }
        Ok(())
    }

    /// Derives the code for a mapping from its id and persists it.
    ///
    /// The code is a pure function of the id, so two processes finishing
    /// the same row can only ever write the same value.
    async fn attach_code(&self, mapping: &UrlMapping) -> Result<ShortCode, ShortenerError> {
        let code = ShortCode::from_id(mapping.id);
        self.store.set_code(mapping.id, &code).await?;
        Ok(code)
    }
}

#[async_trait]
impl<S: MappingStore> Shortener for ShortenerService<S> {
    async fn create_shortened_url(&self, original_url: &str) -> Result<String, ShortenerError> {
        let split = split_url(original_url)?;
        Self::check_lengths(original_url, &split)?;
        let SplitUrl { origin, rest } = split;

        if let Some(existing) = self.store.find_by_origin_and_path(&origin, &rest).await? {
            trace!(id = existing.id, origin = %origin, "reusing existing mapping");
            return match existing.shortened_url() {
                Some(short) => Ok(short),
                // An earlier crash between create and set_code left this
                // row codeless; finish the assignment now.
                None => {
                    let code = self.attach_code(&existing).await?;
                    Ok(code.to_url(&origin))
                }
            };
        }

        let mapping = self.store.create(&origin, &rest).await?;
        let code = self.attach_code(&mapping).await?;
        info!(id = mapping.id, code = %code, origin = %origin, "created mapping");

        Ok(code.to_url(&origin))
    }

    async fn get_original_url(&self, shortened_url: &str) -> Result<String, ShortenerError> {
        let (origin, code) = split_short_url(shortened_url)?;

        match self.store.find_by_origin_and_code(&origin, &code).await? {
            Some(mapping) => {
                debug!(id = mapping.id, code = %code, "resolved short code");
                Ok(mapping.original_url())
            }
            None => Err(ShortenerError::NotFound(shortened_url.to_owned())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clip_storage::MemoryStore;

    fn test_service() -> ShortenerService<MemoryStore> {
        ShortenerService::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn first_mapping_gets_code_one() {
        let service = test_service();

        let short = service
            .create_shortened_url("https://example.com/a/b?q=1#frag")
            .await
            .unwrap();

        assert_eq!(short, "https://example.com/1");
    }

    #[tokio::test]
    async fn shorten_is_idempotent() {
        let service = test_service();
        let url = "https://example.com/a/b?q=1";

        let first = service.create_shortened_url(url).await.unwrap();
        let second = service.create_shortened_url(url).await.unwrap();
        assert_eq!(first, second);

        // The repeat did not burn an id; the next new URL takes id 2.
        let other = service
            .create_shortened_url("https://example.com/other")
            .await
            .unwrap();
        assert_eq!(other, "https://example.com/2");
    }

    #[tokio::test]
    async fn shorten_then_resolve_round_trips() {
        let service = test_service();
        let urls = [
            "https://example.com/a/b?q=1#frag",
            "https://example.com/plain",
            "https://example.com",
            "https://example.com?q=only",
            "http://user@example.com:8080/x",
        ];

        for url in urls {
            let short = service.create_shortened_url(url).await.unwrap();
            let original = service.get_original_url(&short).await.unwrap();
            assert_eq!(original, url, "via {short}");
        }
    }

    #[tokio::test]
    async fn codes_are_scoped_by_origin() {
        let service = test_service();

        let a = service
            .create_shortened_url("https://a.com/page")
            .await
            .unwrap();
        let b = service
            .create_shortened_url("https://b.com/page")
            .await
            .unwrap();

        assert_eq!(a, "https://a.com/1");
        assert_eq!(b, "https://b.com/2");
        assert_eq!(
            service.get_original_url(&a).await.unwrap(),
            "https://a.com/page"
        );
        assert_eq!(
            service.get_original_url(&b).await.unwrap(),
            "https://b.com/page"
        );
    }

    #[tokio::test]
    async fn distinct_paths_get_distinct_codes() {
        let service = test_service();

        for (i, path) in ["/a", "/b", "/c"].iter().enumerate() {
            let short = service
                .create_shortened_url(&format!("https://example.com{path}"))
                .await
                .unwrap();
            assert_eq!(short, format!("https://example.com/{}", i + 1));
        }
    }

    #[tokio::test]
    async fn paths_are_case_sensitive() {
        let service = test_service();

        let lower = service
            .create_shortened_url("https://example.com/page")
            .await
            .unwrap();
        let upper = service
            .create_shortened_url("https://example.com/PAGE")
            .await
            .unwrap();

        assert_ne!(lower, upper);
    }

    #[tokio::test]
    async fn shorten_rejects_malformed_urls() {
        let service = test_service();

        let bad = [
            "",
            "not-a-url",
            "http://",
            "https://exa mple.com/a",
            "https://exa<mple.com/x",
            "https://example.com/a\\b",
        ];
        for url in bad {
            let err = service.create_shortened_url(url).await.unwrap_err();
            assert!(
                matches!(
                    err,
                    ShortenerError::InvalidFormat(ParseError::InvalidUrl(_))
                ),
                "accepted: {url:?}"
            );
        }
    }

    #[tokio::test]
    async fn shorten_rejects_overlong_components() {
        let service = test_service();

        let long_path = format!("https://example.com/{}", "a".repeat(2048));
        let err = service.create_shortened_url(&long_path).await.unwrap_err();
        assert!(matches!(
            err,
            ShortenerError::InvalidFormat(ParseError::TooLong(_))
        ));

        let long_origin = format!("https://{}.com/x", "a".repeat(250));
        let err = service.create_shortened_url(&long_origin).await.unwrap_err();
        assert!(matches!(
            err,
            ShortenerError::InvalidFormat(ParseError::TooLong(_))
        ));
    }

    #[tokio::test]
    async fn resolve_requires_a_code_path() {
        let service = test_service();

        let err = service
            .get_original_url("https://example.com")
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ShortenerError::InvalidFormat(ParseError::InvalidShortUrl(_))
        ));
    }

    #[tokio::test]
    async fn resolve_unknown_code_is_not_found() {
        let service = test_service();

        let err = service
            .get_original_url("https://example.com/zzz")
            .await
            .unwrap_err();

        assert!(matches!(err, ShortenerError::NotFound(_)));
        assert_eq!(
            err.to_string(),
            "no original URL found for this shortened URL: https://example.com/zzz"
        );
    }

    #[tokio::test]
    async fn resolve_is_origin_scoped() {
        let service = test_service();

        service
            .create_shortened_url("https://a.com/page")
            .await
            .unwrap();

        // Code 1 exists under a.com, not b.com.
        let err = service
            .get_original_url("https://b.com/1")
            .await
            .unwrap_err();
        assert!(matches!(err, ShortenerError::NotFound(_)));
    }

    #[tokio::test]
    async fn codeless_row_is_finished_on_next_shorten() {
        let store = MemoryStore::new();
        // A mapping whose code assignment never completed.
        store.create("https://example.com", "/a").await.unwrap();
        let service = ShortenerService::new(store);

        let short = service
            .create_shortened_url("https://example.com/a")
            .await
            .unwrap();

        assert_eq!(short, "https://example.com/1");
        assert_eq!(
            service.get_original_url(&short).await.unwrap(),
            "https://example.com/a"
        );
    }
}
