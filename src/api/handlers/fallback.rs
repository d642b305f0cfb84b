use crate::api::error::ApiError;
use axum::http::{Method, Uri};
use tracing::debug;

/// Catch-all for unknown paths and for known paths hit with the wrong method.
pub async fn not_found(method: Method, uri: Uri) -> ApiError {
    debug!(%method, %uri, "no route matched");
    ApiError::EndpointNotFound
}
