mod health_routes;
mod picture_routes;

use axum::Router;

use crate::common::AppState;

pub use health_routes::health_routes;
pub use picture_routes::picture_routes;

/// All API routes, state attached. Middleware is layered on by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(picture_routes())
        .with_state(state)
}
