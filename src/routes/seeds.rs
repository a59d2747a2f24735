use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    db::CacheKey,
    error::{AppError, AppResult},
    models::SeedMovie,
    state::{AppState, AppStateInner},
    stores::SNAPSHOT_TTL,
};

/// Handler for listing seed films
pub async fn list(State(state): State<AppState>) -> Json<Vec<SeedMovie>> {
    let inner = state.inner.read().await;
    Json(inner.seeds.seeds().to_vec())
}

/// Handler for adding one seed film
///
/// Adding a film that is already seeded is not an error; the list simply
/// comes back unchanged.
pub async fn add(
    State(state): State<AppState>,
    Json(movie): Json<SeedMovie>,
) -> (StatusCode, Json<Vec<SeedMovie>>) {
    let mut inner = state.inner.write().await;
    let added = inner.seeds.add(movie);
    persist_seeds(&state, &inner);

    let status = if added {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    (status, Json(inner.seeds.seeds().to_vec()))
}

/// Handler for replacing the whole seed list
pub async fn replace(
    State(state): State<AppState>,
    Json(seeds): Json<Vec<SeedMovie>>,
) -> Json<Vec<SeedMovie>> {
    let mut inner = state.inner.write().await;
    inner.seeds.set_seeds(seeds);
    persist_seeds(&state, &inner);

    Json(inner.seeds.seeds().to_vec())
}

/// Handler for removing one seed film
pub async fn remove(
    State(state): State<AppState>,
    Path(film_id): Path<String>,
) -> AppResult<StatusCode> {
    let mut inner = state.inner.write().await;
    if !inner.seeds.remove(&film_id) {
        return Err(AppError::NotFound(format!(
            "No seed film with id {}",
            film_id
        )));
    }
    persist_seeds(&state, &inner);

    Ok(StatusCode::NO_CONTENT)
}

/// Persists a seed-store snapshot through the background writer
fn persist_seeds(state: &AppState, inner: &AppStateInner) {
    if let Some(cache) = &state.cache {
        cache.set_in_background(&CacheKey::SeedsSnapshot, &inner.seeds.snapshot(), SNAPSHOT_TTL);
    }
}
