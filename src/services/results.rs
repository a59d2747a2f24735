use std::sync::Arc;

use rand::Rng;
use serde::Serialize;

use crate::{
    cached,
    db::{Cache, CacheKey},
    error::AppResult,
    models::{MovieDetails, RecommendedMovie},
    services::providers::{rec_engine::clean_film_id, RecommendationProvider},
};

/// Films shown per results page
pub const ITEMS_PER_PAGE: usize = 5;

const DETAILS_CACHE_TTL: u64 = 3600; // 1 hour

/// One page of assembled results
#[derive(Debug, Serialize)]
pub struct ResultsPage {
    pub movies: Vec<RecommendedMovie>,
    pub page: usize,
    pub total_pages: usize,
    pub total: usize,
}

/// A random pick plus the page the frontend must show to reveal it
#[derive(Debug, Serialize)]
pub struct RandomPick {
    pub index: usize,
    pub page: usize,
    pub movie: RecommendedMovie,
}

/// Fetches details for one film through the shared cache
pub async fn film_details_cached(
    provider: &Arc<dyn RecommendationProvider>,
    cache: Option<&Cache>,
    film_id: &str,
) -> AppResult<MovieDetails> {
    let key = CacheKey::FilmDetails(clean_film_id(film_id).to_string());
    cached!(cache, key, DETAILS_CACHE_TTL, async move {
        provider.film_details(film_id).await
    })
}

/// Assembles the results list in recommendation order
///
/// Detail lookups run in parallel. A film whose lookup fails degrades to a
/// placeholder entry; the page itself never fails on a bad film.
pub async fn assemble_movies(
    provider: Arc<dyn RecommendationProvider>,
    cache: Option<Cache>,
    film_ids: Vec<String>,
) -> Vec<RecommendedMovie> {
    tracing::info!(film_count = film_ids.len(), "Assembling results");

    let mut tasks = Vec::new();

    for film_id in film_ids {
        let provider = provider.clone();
        let cache = cache.clone();
        let task = tokio::spawn(async move {
            match film_details_cached(&provider, cache.as_ref(), &film_id).await {
                Ok(details) => RecommendedMovie::from_details(film_id, details),
                Err(e) => {
                    tracing::warn!(
                        film_id = %film_id,
                        error = %e,
                        "Detail fetch failed, serving placeholder"
                    );
                    RecommendedMovie::placeholder(film_id)
                }
            }
        });
        tasks.push(task);
    }

    let mut movies = Vec::new();
    for task in tasks {
        match task.await {
            Ok(movie) => movies.push(movie),
            Err(e) => tracing::error!(error = %e, "Detail task join error"),
        }
    }

    movies
}

/// Slices one page out of the assembled list
///
/// A page past the end comes back empty rather than erroring; the pagination
/// controls clamp on their side too.
pub fn page_of(movies: Vec<RecommendedMovie>, page: usize) -> ResultsPage {
    let total = movies.len();
    let total_pages = total.div_ceil(ITEMS_PER_PAGE);
    let movies: Vec<RecommendedMovie> = movies
        .into_iter()
        .skip(page.saturating_mul(ITEMS_PER_PAGE))
        .take(ITEMS_PER_PAGE)
        .collect();

    ResultsPage {
        movies,
        page,
        total_pages,
        total,
    }
}

/// Picks a random film and the page that shows it
pub fn random_pick<R: Rng + ?Sized>(
    movies: &[RecommendedMovie],
    rng: &mut R,
) -> Option<RandomPick> {
    if movies.is_empty() {
        return None;
    }

    let index = rng.random_range(0..movies.len());
    Some(RandomPick {
        index,
        page: index / ITEMS_PER_PAGE,
        movie: movies[index].clone(),
    })
}
