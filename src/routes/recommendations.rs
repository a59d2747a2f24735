use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;

use crate::{
    db::CacheKey,
    error::{AppError, AppResult},
    services::providers::DEFAULT_RESULT_COUNT,
    state::AppState,
    stores::SNAPSHOT_TTL,
};

#[derive(Debug, Deserialize, Default)]
pub struct SeedRecommendationRequest {
    /// Explicit seed ids; falls back to the seed store when omitted
    #[serde(default)]
    pub seed_film_ids: Vec<String>,
}

/// Handler for the current recommendation list
pub async fn current(State(state): State<AppState>) -> Json<Vec<String>> {
    let inner = state.inner.read().await;
    Json(inner.recommendations.film_ids().to_vec())
}

/// Handler for recommendations by username
pub async fn for_user(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> AppResult<Json<Vec<String>>> {
    if username.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Username cannot be empty".to_string(),
        ));
    }

    let film_ids = state
        .provider
        .recommend_for_user(&username, DEFAULT_RESULT_COUNT)
        .await?;

    store_recommendations(&state, film_ids.clone()).await;
    Ok(Json(film_ids))
}

/// Handler for recommendations by seed list
pub async fn from_seeds(
    State(state): State<AppState>,
    body: Option<Json<SeedRecommendationRequest>>,
) -> AppResult<Json<Vec<String>>> {
    let request = body.map(|Json(r)| r).unwrap_or_default();

    let seed_ids = if request.seed_film_ids.is_empty() {
        state.inner.read().await.seeds.film_ids()
    } else {
        request.seed_film_ids
    };

    if seed_ids.is_empty() {
        return Err(AppError::InvalidInput(
            "No seed films selected".to_string(),
        ));
    }

    let film_ids = state
        .provider
        .recommend_from_seeds(&seed_ids, DEFAULT_RESULT_COUNT)
        .await?;

    store_recommendations(&state, film_ids.clone()).await;
    Ok(Json(film_ids))
}

/// Replaces the recommendation store and persists a snapshot
async fn store_recommendations(state: &AppState, film_ids: Vec<String>) {
    let mut inner = state.inner.write().await;
    inner.recommendations.set_recommendations(film_ids);

    if let Some(cache) = &state.cache {
        cache.set_in_background(
            &CacheKey::RecommendationsSnapshot,
            &inner.recommendations.snapshot(),
            SNAPSHOT_TTL,
        );
    }
}
