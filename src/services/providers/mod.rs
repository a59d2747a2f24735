/// Recommendation backend abstraction
///
/// Everything this service knows about films comes from one external REST
/// backend: search, details, recommendations, and magnet lookups. The trait
/// keeps that surface mockable in tests and leaves room for a second backend
/// without touching the routes.
use crate::{
    error::AppResult,
    models::{MagnetLink, MovieDetails, MovieSearchResult},
};

pub mod rec_engine;

pub use rec_engine::RecEngineProvider;

/// Recommendation batches requested per call unless the caller says
/// otherwise
pub const DEFAULT_RESULT_COUNT: u32 = 1;

/// Trait for recommendation backends
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait RecommendationProvider: Send + Sync {
    /// Free-text film search
    ///
    /// Returns raw rows; callers are responsible for dropping rows without a
    /// usable film id.
    async fn search_films(&self, query: &str) -> AppResult<Vec<MovieSearchResult>>;

    /// Film detail lookup by film id
    ///
    /// Accepts raw ids as the frontend holds them (with or without the
    /// `/film/` route prefix); implementations clean the id before use.
    async fn film_details(&self, film_id: &str) -> AppResult<MovieDetails>;

    /// Recommendation ids for a username
    async fn recommend_for_user(&self, username: &str, k: u32) -> AppResult<Vec<String>>;

    /// Recommendation ids for a list of seed film ids
    async fn recommend_from_seeds(
        &self,
        seed_film_ids: &[String],
        k: u32,
    ) -> AppResult<Vec<String>>;

    /// Magnet links for a film display name
    async fn find_magnets(&self, film_name: &str) -> AppResult<Vec<MagnetLink>>;
}
