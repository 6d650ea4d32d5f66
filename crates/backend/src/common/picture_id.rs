use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};

use super::ApiError;

/// `{id}` path segment: a non-negative integer of any width that fits `i128`.
///
/// Anything else is treated as an unmatched route and answered with a bare 404.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PictureId(pub i128);

impl<S> FromRequestParts<S> for PictureId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound)?;

        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ApiError::NotFound);
        }
        raw.parse().map(PictureId).map_err(|_| ApiError::NotFound)
    }
}
