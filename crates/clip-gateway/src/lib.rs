//! HTTP gateway for the clip URL shortener.
//!
//! Exposes the two shortener operations over plain-text bodies: the request
//! and response payloads are the URLs themselves. Errors come back as a JSON
//! object with a single `error` message.

pub mod app;
pub mod error;
pub mod handlers;
pub mod model;
pub mod state;

pub use app::App;
pub use error::ApiError;
pub use state::AppState;
