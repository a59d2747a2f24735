use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::{error::AppResult, models::MagnetLink, services::magnets, state::AppState};

#[derive(Debug, Deserialize)]
pub struct MagnetQuery {
    film: String,
}

/// Handler for magnet-link lookup by film display name
pub async fn find(
    State(state): State<AppState>,
    Query(params): Query<MagnetQuery>,
) -> AppResult<Json<Vec<MagnetLink>>> {
    let magnets = magnets::find_magnets(&state.provider, state.cache.as_ref(), &params.film).await?;
    Ok(Json(magnets))
}
