//! Structural splitting of absolute URLs into origin and remainder.
//!
//! The split is byte-exact: for every accepted input,
//! `origin + rest == input`. Nothing is normalized, percent-decoded, or
//! re-encoded, so a stored mapping reproduces the submitted URL verbatim.

use crate::error::ParseError;
use crate::shortcode::ShortCode;

/// An absolute URL split at the end of its authority.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitUrl {
    /// Scheme, `"://"`, and authority.
    pub origin: String,
    /// Path with optional `?query` and `#fragment`, exactly as given.
    /// Empty when the URL ends at its authority.
    pub rest: String,
}

/// Splits an absolute URL into origin and rest for shortening.
pub fn split_url(raw: &str) -> Result<SplitUrl, ParseError> {
    let parts = parse(raw)?;
    Ok(SplitUrl {
        origin: parts.origin(),
        rest: parts.rest(),
    })
}

/// Extracts the origin and short code from a shortened URL.
///
/// The code is the path with its leading `/` removed; any query or fragment
/// is ignored. Fails unless the path holds at least one character after the
/// slash.
pub fn split_short_url(raw: &str) -> Result<(String, ShortCode), ParseError> {
    let parts = parse(raw)?;
    if parts.path.len() < 2 {
        return Err(ParseError::InvalidShortUrl(raw.to_owned()));
    }
    Ok((parts.origin(), ShortCode::new(&parts.path[1..])))
}

/// Component view over a raw URL. Slices borrow from the input.
struct UriParts<'a> {
    scheme: &'a str,
    authority: &'a str,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

impl UriParts<'_> {
    fn origin(&self) -> String {
        format!("{}://{}", self.scheme, self.authority)
    }

    fn rest(&self) -> String {
        let mut rest = String::from(self.path);
        if let Some(query) = self.query {
            rest.push('?');
            rest.push_str(query);
        }
        if let Some(fragment) = self.fragment {
            rest.push('#');
            rest.push_str(fragment);
        }
        rest
    }
}

fn parse(raw: &str) -> Result<UriParts<'_>, ParseError> {
    let invalid = || ParseError::InvalidUrl(raw.to_owned());

    // Byte-exact storage only works for ASCII input. Whitespace and control
    // characters are never valid in a URL, nor are the printable bytes
    // RFC 3986 excludes from every component.
    if raw.is_empty() || !raw.bytes().all(is_url_byte) {
        return Err(invalid());
    }

    let (scheme, after_scheme) = raw.split_once("://").ok_or_else(invalid)?;
    if !is_valid_scheme(scheme) {
        return Err(invalid());
    }

    // The authority runs to the first path, query, or fragment delimiter.
    let authority_end = after_scheme
        .find(['/', '?', '#'])
        .unwrap_or(after_scheme.len());
    let authority = &after_scheme[..authority_end];
    if authority.is_empty() {
        return Err(invalid());
    }

    // The first `#` terminates both path and query; the first `?` before it
    // starts the query. Everything keeps its original bytes.
    let after_authority = &after_scheme[authority_end..];
    let (before_fragment, fragment) = match after_authority.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment)),
        None => (after_authority, None),
    };
    let (path, query) = match before_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (before_fragment, None),
    };

    Ok(UriParts {
        scheme,
        authority,
        path,
        query,
        fragment,
    })
}

/// Printable ASCII minus the bytes RFC 3986 leaves no role for. Brackets
/// stay in for IPv6 authorities.
fn is_url_byte(b: u8) -> bool {
    b.is_ascii_graphic()
        && !matches!(
            b,
            b'"' | b'<' | b'>' | b'\\' | b'^' | b'`' | b'{' | b'|' | b'}'
        )
}

/// Scheme grammar: one letter, then letters, digits, `+`, `-`, or `.`.
fn is_valid_scheme(scheme: &str) -> bool {
    let mut bytes = scheme.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };
    first.is_ascii_alphabetic()
        && bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.'))
}
