use crate::error::Result;
use crate::model::ResolveParams;
use crate::state::AppState;
use axum::extract::{Query, State};

/// `POST /api/urls`
///
/// The body is the raw URL to shorten; the response body is the shortened
/// URL. Repeating a request returns the same shortened URL.
pub async fn create_url_handler(State(state): State<AppState>, body: String) -> Result<String> {
    let shortened = state.shortener().create_shortened_url(&body).await?;
    Ok(shortened)
}

/// `GET /api/urls?shortened_url=...`
///
/// Resolves a previously created shortened URL back to its original URL.
pub async fn resolve_url_handler(
    State(state): State<AppState>,
    Query(params): Query<ResolveParams>,
) -> Result<String> {
    let original = state
        .shortener()
        .get_original_url(&params.shortened_url)
        .await?;
    Ok(original)
}
