//! Process-wide stores for seeds and recommendations.
//!
//! Both survive page navigation: they start empty on first boot, or hydrated
//! from the last Redis snapshot, and every mutation persists a fresh snapshot
//! through the background cache writer. Persistence is best-effort; an
//! unreachable Redis means empty stores, never a startup failure.

pub mod recommendations;
pub mod seeds;

pub use recommendations::{RecommendationStore, RecommendationsSnapshot};
pub use seeds::{SeedStore, SeedsSnapshot};

use crate::db::CacheKey;
use crate::state::AppState;

/// How long store snapshots live in Redis (30 days)
pub const SNAPSHOT_TTL: u64 = 2_592_000;

/// Loads both stores from their last snapshots, when Redis has any
pub async fn hydrate(state: &AppState) {
    let Some(cache) = state.cache.as_ref() else {
        return;
    };

    match cache
        .get_from_cache::<SeedsSnapshot>(&CacheKey::SeedsSnapshot)
        .await
    {
        Ok(Some(snapshot)) => {
            tracing::info!(seeds = snapshot.seeds.len(), "Seed store hydrated");
            state.inner.write().await.seeds = SeedStore::from_snapshot(snapshot);
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, "Seed snapshot load failed, starting empty");
        }
    }

    match cache
        .get_from_cache::<RecommendationsSnapshot>(&CacheKey::RecommendationsSnapshot)
        .await
    {
        Ok(Some(snapshot)) => {
            tracing::info!(
                film_ids = snapshot.film_ids.len(),
                "Recommendation store hydrated"
            );
            state.inner.write().await.recommendations = RecommendationStore::from_snapshot(snapshot);
        }
        Ok(None) => {}
        Err(e) => {
            tracing::warn!(error = %e, "Recommendation snapshot load failed, starting empty");
        }
    }
}
