use crate::shortcode::ShortCode;
use serde::{Deserialize, Serialize};

/// Identifier assigned to a mapping by the store sequence.
pub type MappingId = u64;

/// Maximum byte length of an origin (scheme plus authority).
pub const MAX_ORIGIN_LEN: usize = 253;
/// Maximum byte length of a stored path (path plus query plus fragment).
pub const MAX_PATH_LEN: usize = 2048;
/// Maximum byte length of a short code.
pub const MAX_CODE_LEN: usize = 10;

/// A stored association between an origin-scoped path and its short code.
///
/// The original URL is `origin + path` and the shortened URL is
/// `origin + "/" + code`. Both `(origin, path)` and `(origin, code)` are
/// unique across all mappings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UrlMapping {
    /// Store-assigned identifier, unique and monotonically increasing.
    pub id: MappingId,
    /// Scheme plus authority, e.g. `"https://example.com"`. Never empty.
    pub origin: String,
    /// Path with optional query and fragment, byte-exact as submitted.
    /// Empty when the original URL ends at its authority.
    pub path: String,
    /// Base62 code derived from `id`. `None` only for a row whose code
    /// assignment has not completed yet.
    pub code: Option<ShortCode>,
}

impl UrlMapping {
    /// Reassembles the original URL this mapping shortens.
    pub fn original_url(&self) -> String {
        format!("{}{}", self.origin, self.path)
    }

    /// Composes the shortened URL, if a code has been assigned.
    pub fn shortened_url(&self) -> Option<String> {
        self.code.as_ref().map(|code| code.to_url(&self.origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(path: &str, code: Option<ShortCode>) -> UrlMapping {
        UrlMapping {
            id: 1,
            origin: "https://example.com".to_owned(),
            path: path.to_owned(),
            code,
        }
    }

    #[test]
    fn original_url_is_origin_plus_path() {
        let m = mapping("/a/b?q=1#frag", Some(ShortCode::from_id(1)));
        assert_eq!(m.original_url(), "https://example.com/a/b?q=1#frag");
    }

    #[test]
    fn original_url_with_empty_path_is_the_origin() {
        let m = mapping("", None);
        assert_eq!(m.original_url(), "https://example.com");
    }

    #[test]
    fn shortened_url_requires_a_code() {
        assert_eq!(
            mapping("/a", Some(ShortCode::from_id(1))).shortened_url(),
            Some("https://example.com/1".to_owned())
        );
        assert_eq!(mapping("/a", None).shortened_url(), None);
    }
}
