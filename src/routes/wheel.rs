use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    services::results,
    services::wheel::{self as wheel_sessions, WheelSessionView},
    state::AppState,
    wheel::WheelLayout,
};

#[derive(Debug, Deserialize, Default)]
pub struct CreateWheelRequest {
    /// Films to put on the wheel; falls back to the recommendation store
    /// when omitted
    #[serde(default)]
    pub film_ids: Vec<String>,
}

/// Handler for opening a wheel session
pub async fn create(
    State(state): State<AppState>,
    body: Option<Json<CreateWheelRequest>>,
) -> AppResult<(StatusCode, Json<WheelSessionView>)> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let film_ids = if request.film_ids.is_empty() {
        state.inner.read().await.recommendations.film_ids().to_vec()
    } else {
        request.film_ids
    };

    let movies =
        results::assemble_movies(state.provider.clone(), state.cache.clone(), film_ids).await;
    let view = wheel_sessions::create_session(&state, movies).await;

    Ok((StatusCode::CREATED, Json(view)))
}

/// Handler for reading a session's state
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<WheelSessionView>> {
    let inner = state.inner.read().await;
    inner
        .wheels
        .get(&id)
        .map(|session| Json(session.view()))
        .ok_or_else(|| AppError::NotFound(format!("No wheel session {}", id)))
}

/// Handler for starting a spin
pub async fn spin(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<WheelSessionView>> {
    wheel_sessions::spin(&state, id).await.map(Json)
}

/// Handler for a session's rendering geometry
pub async fn layout(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<WheelLayout>> {
    let inner = state.inner.read().await;
    inner
        .wheels
        .get(&id)
        .map(|session| Json(session.layout()))
        .ok_or_else(|| AppError::NotFound(format!("No wheel session {}", id)))
}

/// Handler for closing a session
///
/// This is the teardown path: a spin still in flight finds its session gone
/// and never reveals.
pub async fn close(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    let mut inner = state.inner.write().await;
    if inner.wheels.remove(&id).is_none() {
        return Err(AppError::NotFound(format!("No wheel session {}", id)));
    }
    Ok(StatusCode::NO_CONTENT)
}
