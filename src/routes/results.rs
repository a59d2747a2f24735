use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    services::results::{self, RandomPick, ResultsPage},
    state::AppState,
};

#[derive(Debug, Deserialize)]
pub struct PageQuery {
    #[serde(default)]
    page: usize,
}

/// Handler for one page of assembled results
pub async fn page(
    State(state): State<AppState>,
    Query(params): Query<PageQuery>,
) -> AppResult<Json<ResultsPage>> {
    let film_ids = state.inner.read().await.recommendations.film_ids().to_vec();
    let movies = results::assemble_movies(state.provider.clone(), state.cache.clone(), film_ids).await;

    Ok(Json(results::page_of(movies, params.page)))
}

/// Handler for a random pick over the assembled results
pub async fn random(State(state): State<AppState>) -> AppResult<Json<RandomPick>> {
    let film_ids = state.inner.read().await.recommendations.film_ids().to_vec();
    let movies = results::assemble_movies(state.provider.clone(), state.cache.clone(), film_ids).await;

    let mut rng = rand::rng();
    results::random_pick(&movies, &mut rng)
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No recommendations to pick from".to_string()))
}
