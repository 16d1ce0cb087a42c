use serde::{Deserialize, Serialize};

/// Query parameters for the resolve operation.
#[derive(Debug, Deserialize)]
pub struct ResolveParams {
    /// The full shortened URL to resolve.
    pub shortened_url: String,
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}
