use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use switchyard_core::CallerIdentity;

use crate::error::ApiError;

/// Caller identity attached to the request by [`crate::middleware::authenticate`].
///
/// Extraction never falls back to a default identity: when the extension is
/// missing the request is rejected before any backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caller(pub CallerIdentity);

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.extensions.get::<CallerIdentity>() {
            Some(identity) => Ok(Self(*identity)),
            None => {
                tracing::warn!(path = %parts.uri.path(), "caller identity missing from request");
                Err(ApiError::AuthorizationAbsent)
            }
        }
    }
}
