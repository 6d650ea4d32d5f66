use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing,
};
use serde_json::{Map, Value};

use crate::{
    common::{ApiError, ApiResult, AppState, PictureId},
    db::Picture,
};

pub fn picture_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/picture",
            routing::get(list_pictures).post(create_picture),
        )
        .route(
            "/picture/{id}",
            routing::get(get_picture)
                .put(update_picture)
                .delete(delete_picture),
        )
}

async fn list_pictures(State(state): State<AppState>) -> Json<Vec<Picture>> {
    Json(state.repo.list().await)
}

async fn get_picture(
    State(state): State<AppState>,
    PictureId(id): PictureId,
) -> ApiResult<Json<Picture>> {
    state
        .repo
        .get(id)
        .await
        .map(Json)
        .ok_or(ApiError::PictureNotFound("Picture not found"))
}

async fn create_picture(
    State(state): State<AppState>,
    Json(picture): Json<Picture>,
) -> ApiResult<impl IntoResponse> {
    if !state.repo.insert_if_absent(picture.clone()).await {
        let id = picture.id().cloned().unwrap_or(Value::Null);
        tracing::debug!(%id, "rejecting duplicate picture");
        let status = if state.legacy_status_codes {
            StatusCode::FOUND
        } else {
            StatusCode::CONFLICT
        };
        return Err(ApiError::AlreadyPresent { id, status });
    }

    Ok((StatusCode::CREATED, Json(picture)))
}

async fn update_picture(
    State(state): State<AppState>,
    PictureId(id): PictureId,
    Json(patch): Json<Map<String, Value>>,
) -> ApiResult<Json<Picture>> {
    state
        .repo
        .update(id, patch)
        .await
        .map(Json)
        .ok_or(ApiError::NotFound)
}

async fn delete_picture(
    State(state): State<AppState>,
    PictureId(id): PictureId,
) -> ApiResult<StatusCode> {
    if state.repo.remove(id).await.is_none() {
        return Err(ApiError::PictureNotFound("picture not found"));
    }
    tracing::debug!(%id, "picture removed");

    Ok(StatusCode::NO_CONTENT)
}
