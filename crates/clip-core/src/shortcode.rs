use crate::base62;
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::fmt::Display;

/// A short code identifying a mapping within its origin.
///
/// Codes minted by the service come from [`ShortCode::from_id`] and are the
/// base62 encoding of the mapping id. Codes read off the wire are wrapped
/// as-is; an unknown or malformed code simply misses its lookup.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ShortCode(SmolStr);

impl ShortCode {
    /// Mints the code for a mapping id by base62-encoding it.
    pub fn from_id(id: u64) -> Self {
        Self(SmolStr::new(base62::encode(id)))
    }

    /// Wraps a code extracted from a shortened URL.
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(SmolStr::new(code))
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Composes the shortened URL for this code under the given origin.
    pub fn to_url(&self, origin: &str) -> String {
        format!("{}/{}", origin.trim_end_matches('/'), self.0)
    }
}

impl std::fmt::Debug for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ShortCode").field(&self.0).finish()
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ShortCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ShortCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = SmolStr::deserialize(deserializer)?;
        Ok(Self(s))
    }
}
