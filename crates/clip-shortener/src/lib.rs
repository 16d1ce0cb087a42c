//! URL shortener service implementation.
//!
//! This crate provides the [`Shortener`] trait and its store-backed
//! implementation. Core types are re-exported from `clip_core`.

pub mod error;
pub mod service;
pub mod shortener;

pub use error::ShortenerError;
pub use service::ShortenerService;
pub use shortener::Shortener;
