use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted form of the recommendation store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationsSnapshot {
    pub film_ids: Vec<String>,
    pub saved_at: DateTime<Utc>,
}

/// Film ids returned by the most recent recommendation request
///
/// The results page and the wheel both read from here, so one fetch feeds
/// every view until the next request replaces it.
#[derive(Debug, Default)]
pub struct RecommendationStore {
    film_ids: Vec<String>,
}

impl RecommendationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: RecommendationsSnapshot) -> Self {
        Self {
            film_ids: snapshot.film_ids,
        }
    }

    pub fn film_ids(&self) -> &[String] {
        &self.film_ids
    }

    pub fn is_empty(&self) -> bool {
        self.film_ids.is_empty()
    }

    /// Replaces the stored list
    pub fn set_recommendations(&mut self, film_ids: Vec<String>) {
        self.film_ids = film_ids;
    }

    pub fn snapshot(&self) -> RecommendationsSnapshot {
        RecommendationsSnapshot {
            film_ids: self.film_ids.clone(),
            saved_at: Utc::now(),
        }
    }
}
