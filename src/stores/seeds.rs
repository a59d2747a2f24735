use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::SeedMovie;

/// Persisted form of the seed store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedsSnapshot {
    pub seeds: Vec<SeedMovie>,
    pub saved_at: DateTime<Utc>,
}

/// Films the user picked as recommendation seeds
///
/// Survives page navigation: starts empty, or hydrated from the last
/// snapshot. All mutation goes through the methods here.
#[derive(Debug, Default)]
pub struct SeedStore {
    seeds: Vec<SeedMovie>,
}

impl SeedStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_snapshot(snapshot: SeedsSnapshot) -> Self {
        Self {
            seeds: snapshot.seeds,
        }
    }

    pub fn seeds(&self) -> &[SeedMovie] {
        &self.seeds
    }

    pub fn film_ids(&self) -> Vec<String> {
        self.seeds.iter().map(|m| m.id.clone()).collect()
    }

    /// Replaces the whole list
    pub fn set_seeds(&mut self, seeds: Vec<SeedMovie>) {
        self.seeds = seeds;
    }

    /// Adds one film unless its id is already present; true when added
    pub fn add(&mut self, movie: SeedMovie) -> bool {
        if self.seeds.iter().any(|m| m.id == movie.id) {
            return false;
        }
        self.seeds.push(movie);
        true
    }

    /// Removes a film by id; true when something was removed
    pub fn remove(&mut self, film_id: &str) -> bool {
        let before = self.seeds.len();
        self.seeds.retain(|m| m.id != film_id);
        self.seeds.len() < before
    }

    pub fn snapshot(&self) -> SeedsSnapshot {
        SeedsSnapshot {
            seeds: self.seeds.clone(),
            saved_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed(id: &str) -> SeedMovie {
        SeedMovie {
            id: id.to_string(),
            poster: format!("https://posters.example/{}.jpg", id),
            title: id.to_string(),
        }
    }

    #[test]
    fn test_add_deduplicates_by_id() {
        let mut store = SeedStore::new();
        assert!(store.add(seed("heat")));
        assert!(store.add(seed("alien")));
        assert!(!store.add(seed("heat")));
        assert_eq!(store.seeds().len(), 2);
    }

    #[test]
    fn test_remove_by_id() {
        let mut store = SeedStore::new();
        store.add(seed("heat"));
        store.add(seed("alien"));

        assert!(store.remove("heat"));
        assert!(!store.remove("heat"));
        assert_eq!(store.film_ids(), vec!["alien".to_string()]);
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut store = SeedStore::new();
        store.add(seed("heat"));

        let json = serde_json::to_string(&store.snapshot()).unwrap();
        let restored: SeedsSnapshot = serde_json::from_str(&json).unwrap();
        let store = SeedStore::from_snapshot(restored);
        assert_eq!(store.seeds().len(), 1);
        assert_eq!(store.seeds()[0].id, "heat");
    }
}
