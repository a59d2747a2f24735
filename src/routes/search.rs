use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{error::AppResult, models::MovieSearchResult, state::AppState};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    query: String,
}

/// Handler for free-text film search
///
/// Rows the backend returns without a film id cannot seed recommendations or
/// open a details view, so they are dropped here.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchQuery>,
) -> AppResult<Json<Vec<MovieSearchResult>>> {
    let results = state.provider.search_films(&params.query).await?;

    let results: Vec<MovieSearchResult> = results
        .into_iter()
        .filter(|r| !r.film_id.trim().is_empty())
        .collect();

    Ok(Json(results))
}
