use axum::{
    extract::{Path, State},
    Json,
};

use crate::{error::AppResult, models::MovieDetails, services::results, state::AppState};

/// Handler for film detail lookup
pub async fn details(
    State(state): State<AppState>,
    Path(film_id): Path<String>,
) -> AppResult<Json<MovieDetails>> {
    let details =
        results::film_details_cached(&state.provider, state.cache.as_ref(), &film_id).await?;
    Ok(Json(details))
}
