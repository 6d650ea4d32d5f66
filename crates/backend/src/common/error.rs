use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("not found")]
    NotFound,
    #[error("{0}")]
    PictureNotFound(&'static str),
    #[error("picture with id {} already present", display_id(.id))]
    AlreadyPresent { id: Value, status: StatusCode },
    #[error("collection is empty")]
    EmptyCollection,
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::PictureNotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": msg }))).into_response()
            }
            ApiError::AlreadyPresent { status, .. } => {
                let body = json!({ "Message": self.to_string() });
                (status, Json(body)).into_response()
            }
            ApiError::EmptyCollection => internal_server_error(),
            ApiError::Internal(err) => {
                tracing::error!(error = ?err, "internal error");
                internal_server_error()
            }
        }
    }
}

fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal server error" })),
    )
        .into_response()
}

// Strings print bare, everything else as JSON.
fn display_id(id: &Value) -> String {
    match id {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
