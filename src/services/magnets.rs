use std::sync::Arc;

use crate::{
    cached,
    db::{Cache, CacheKey},
    error::{AppError, AppResult},
    models::MagnetLink,
    services::providers::RecommendationProvider,
};

const MAGNET_CACHE_TTL: u64 = 86400; // 1 day

/// Looks up magnet links for a film by display name
///
/// Results are cached by name so reopening a film's details does not hit the
/// backend again.
pub async fn find_magnets(
    provider: &Arc<dyn RecommendationProvider>,
    cache: Option<&Cache>,
    film_name: &str,
) -> AppResult<Vec<MagnetLink>> {
    if film_name.trim().is_empty() {
        return Err(AppError::InvalidInput(
            "Film name cannot be empty".to_string(),
        ));
    }

    cached!(
        cache,
        CacheKey::MagnetSearch(film_name.to_string()),
        MAGNET_CACHE_TTL,
        async move { provider.find_magnets(film_name).await }
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::providers::MockRecommendationProvider;

    #[tokio::test]
    async fn test_blank_film_name_is_rejected_before_the_backend() {
        let provider: Arc<dyn RecommendationProvider> =
            Arc::new(MockRecommendationProvider::new());

        let result = find_magnets(&provider, None, "   ").await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_cacheless_lookup_calls_the_backend() {
        let mut mock = MockRecommendationProvider::new();
        mock.expect_find_magnets().times(1).returning(|_| {
            Ok(vec![MagnetLink {
                id: "https://tracker.example/torrent/1".to_string(),
                tracker: "YTS".to_string(),
                title: "Heat (1995) 1080p".to_string(),
                seeders: 300,
                magnet_uri: "magnet:?xt=urn:btih:heat".to_string(),
            }])
        });

        let provider: Arc<dyn RecommendationProvider> = Arc::new(mock);
        let magnets = find_magnets(&provider, None, "Heat").await.unwrap();
        assert_eq!(magnets.len(), 1);
        assert_eq!(magnets[0].tracker, "YTS");
    }
}
