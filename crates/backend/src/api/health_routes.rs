use axum::{Json, Router, extract::State, routing};
use serde_json::{Value, json};

use crate::common::{ApiError, ApiResult, AppState};

pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", routing::get(health))
        .route("/count", routing::get(count))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "OK" }))
}

async fn count(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let length = state.repo.count().await;
    if length == 0 && state.legacy_status_codes {
        return Err(ApiError::EmptyCollection);
    }
    Ok(Json(json!({ "length": length })))
}
