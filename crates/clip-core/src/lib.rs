//! Core types and traits for the clip URL shortener.
//!
//! This crate provides the base62 encoder, the URL splitting rules, the
//! stored mapping entity, and the store contract shared by the shortener
//! service and the storage backends.

pub mod base62;
pub mod error;
pub mod mapping;
pub mod shortcode;
pub mod store;
pub mod url;

pub use error::{ParseError, StoreError};
pub use mapping::{MappingId, UrlMapping, MAX_CODE_LEN, MAX_ORIGIN_LEN, MAX_PATH_LEN};
pub use shortcode::ShortCode;
pub use store::MappingStore;
pub use url::{split_short_url, split_url, SplitUrl};
