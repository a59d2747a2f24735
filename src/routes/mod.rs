use axum::{
    http::StatusCode,
    middleware::from_fn,
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{make_span_with_request_id, request_id_middleware};
use crate::state::AppState;

pub mod films;
pub mod magnets;
pub mod recommendations;
pub mod results;
pub mod search;
pub mod seeds;
pub mod wheel;

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(TraceLayer::new_for_http().make_span_with(make_span_with_request_id))
        .layer(from_fn(request_id_middleware))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/search", get(search::search))
        .route("/films/:film_id", get(films::details))
        .route("/recommendations", get(recommendations::current))
        .route(
            "/recommendations/user/:username",
            get(recommendations::for_user),
        )
        .route("/recommendations/seed", post(recommendations::from_seeds))
        .route("/results", get(results::page))
        .route("/results/random", get(results::random))
        .route("/magnets", get(magnets::find))
        .route(
            "/seeds",
            get(seeds::list).post(seeds::add).put(seeds::replace),
        )
        .route("/seeds/:film_id", delete(seeds::remove))
        .route("/wheel", post(wheel::create))
        .route("/wheel/:id", get(wheel::get_session).delete(wheel::close))
        .route("/wheel/:id/spin", post(wheel::spin))
        .route("/wheel/:id/layout", get(wheel::layout))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
