/// REST client for the recommendation backend
///
/// Endpoint map:
/// - `GET  /search?query={q}` — free-text film search
/// - `GET  /film/{film_id}` — film details
/// - `GET  /recommend/personalize/{username}?k={k}` — ids by username
/// - `POST /recommend/seed` with `{k, seed_film_ids}` — ids by seed list
/// - `GET  /magnet?query={name}` — magnet links by film name
///
/// Every non-2xx response surfaces as a generic backend failure; the
/// recommendation logic itself lives entirely on the other side of this
/// client.
use reqwest::Client as HttpClient;
use serde::Serialize;

use super::RecommendationProvider;
use crate::{
    error::{AppError, AppResult},
    models::{MagnetLink, MovieDetails, MovieSearchResult},
};

#[derive(Clone)]
pub struct RecEngineProvider {
    http_client: HttpClient,
    base_url: String,
}

/// Strips the `/film/` route prefix and any trailing path segments from a
/// raw film id
///
/// The frontend holds ids in the backend's route form (`/film/{slug}/...`);
/// the detail endpoint wants the bare slug.
pub fn clean_film_id(raw: &str) -> &str {
    let id = raw.strip_prefix("/film/").unwrap_or(raw);
    id.split('/').next().unwrap_or(id)
}

impl RecEngineProvider {
    pub fn new(base_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Maps a non-2xx response to a backend error, capturing the body
    async fn check_status(response: reqwest::Response) -> AppResult<reqwest::Response> {
        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Backend(format!(
                "Recommendation backend returned status {}: {}",
                status, body
            )));
        }
        Ok(response)
    }
}

#[async_trait::async_trait]
impl RecommendationProvider for RecEngineProvider {
    async fn search_films(&self, query: &str) -> AppResult<Vec<MovieSearchResult>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let url = format!("{}/search", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("query", query)])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let results: Vec<MovieSearchResult> = response.json().await?;

        tracing::info!(
            query = %query,
            results = results.len(),
            "Film search completed"
        );

        Ok(results)
    }

    async fn film_details(&self, film_id: &str) -> AppResult<MovieDetails> {
        let url = format!("{}/film/{}", self.base_url, clean_film_id(film_id));
        let response = self.http_client.get(&url).send().await?;
        let response = Self::check_status(response).await?;

        let details: MovieDetails = response.json().await?;
        Ok(details)
    }

    async fn recommend_for_user(&self, username: &str, k: u32) -> AppResult<Vec<String>> {
        let url = format!("{}/recommend/personalize/{}", self.base_url, username);
        let response = self
            .http_client
            .get(&url)
            .query(&[("k", k.to_string())])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let film_ids: Vec<String> = response.json().await?;

        tracing::info!(
            username = %username,
            results = film_ids.len(),
            "User recommendations fetched"
        );

        Ok(film_ids)
    }

    async fn recommend_from_seeds(
        &self,
        seed_film_ids: &[String],
        k: u32,
    ) -> AppResult<Vec<String>> {
        #[derive(Serialize)]
        struct SeedRequest<'a> {
            k: u32,
            seed_film_ids: &'a [String],
        }

        let url = format!("{}/recommend/seed", self.base_url);
        let response = self
            .http_client
            .post(&url)
            .json(&SeedRequest { k, seed_film_ids })
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let film_ids: Vec<String> = response.json().await?;

        tracing::info!(
            seeds = seed_film_ids.len(),
            results = film_ids.len(),
            "Seed recommendations fetched"
        );

        Ok(film_ids)
    }

    async fn find_magnets(&self, film_name: &str) -> AppResult<Vec<MagnetLink>> {
        let url = format!("{}/magnet", self.base_url);
        let response = self
            .http_client
            .get(&url)
            .query(&[("query", film_name)])
            .send()
            .await?;
        let response = Self::check_status(response).await?;

        let magnets: Vec<MagnetLink> = response.json().await?;

        tracing::info!(
            film = %film_name,
            results = magnets.len(),
            "Magnet lookup completed"
        );

        Ok(magnets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_film_id_strips_route_prefix() {
        assert_eq!(clean_film_id("/film/inception/"), "inception");
        assert_eq!(clean_film_id("/film/inception"), "inception");
    }

    #[test]
    fn test_clean_film_id_drops_trailing_segments() {
        assert_eq!(clean_film_id("/film/inception/crew/"), "inception");
        assert_eq!(clean_film_id("inception/crew"), "inception");
    }

    #[test]
    fn test_clean_film_id_passes_bare_ids_through() {
        assert_eq!(clean_film_id("inception"), "inception");
        assert_eq!(clean_film_id(""), "");
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let provider = RecEngineProvider::new("http://localhost:5000/".to_string());
        assert_eq!(provider.base_url, "http://localhost:5000");
    }

    #[test]
    fn test_search_results_deserialize_from_backend_shape() {
        let json = r#"[
            {"film_id": "/film/inception/", "poster": "p.jpg", "title": "Inception"},
            {"film_id": "", "poster": "", "title": "Unmatched row"}
        ]"#;

        let results: Vec<MovieSearchResult> = serde_json::from_str(json).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].film_id, "/film/inception/");
        assert!(results[1].film_id.is_empty());
    }

    #[test]
    fn test_seed_request_serialization() {
        #[derive(Serialize)]
        struct SeedRequest<'a> {
            k: u32,
            seed_film_ids: &'a [String],
        }

        let seeds = vec!["heat".to_string(), "alien".to_string()];
        let json = serde_json::to_string(&SeedRequest {
            k: 1,
            seed_film_ids: &seeds,
        })
        .unwrap();
        assert_eq!(json, r#"{"k":1,"seed_film_ids":["heat","alien"]}"#);
    }
}
