use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::json;

use cinespin_api::error::{AppError, AppResult};
use cinespin_api::models::{MagnetLink, MovieDetails, MovieSearchResult, PLACEHOLDER_POSTER};
use cinespin_api::routes::create_router;
use cinespin_api::services::providers::RecommendationProvider;
use cinespin_api::state::AppState;

/// Ids the stub backend recommends for any username: seven films, two pages
/// at five per page, one of them with broken details
const USER_RECS: [&str; 7] = [
    "heat",
    "alien",
    "broken",
    "blade-runner",
    "se7en",
    "ronin",
    "drive",
];

/// Canned backend: enough behavior to drive every route without a network
struct StubProvider;

#[async_trait::async_trait]
impl RecommendationProvider for StubProvider {
    async fn search_films(&self, query: &str) -> AppResult<Vec<MovieSearchResult>> {
        if query == "boom" {
            return Err(AppError::Backend("search exploded".to_string()));
        }

        Ok(vec![
            MovieSearchResult {
                film_id: "/film/heat/".to_string(),
                poster: "https://posters.example/heat.jpg".to_string(),
                title: "Heat".to_string(),
            },
            MovieSearchResult {
                film_id: String::new(),
                poster: String::new(),
                title: "Unmatched row".to_string(),
            },
        ])
    }

    async fn film_details(&self, film_id: &str) -> AppResult<MovieDetails> {
        if film_id.contains("broken") {
            return Err(AppError::Backend("no details for this film".to_string()));
        }

        Ok(MovieDetails {
            id: film_id.to_string(),
            name: format!("Film {}", film_id),
            year: "1995".to_string(),
            poster: format!("https://posters.example/{}.jpg", film_id),
            ..Default::default()
        })
    }

    async fn recommend_for_user(&self, _username: &str, _k: u32) -> AppResult<Vec<String>> {
        Ok(USER_RECS.iter().map(|s| s.to_string()).collect())
    }

    async fn recommend_from_seeds(
        &self,
        seed_film_ids: &[String],
        _k: u32,
    ) -> AppResult<Vec<String>> {
        Ok(seed_film_ids
            .iter()
            .map(|id| format!("{}-like", id))
            .collect())
    }

    async fn find_magnets(&self, film_name: &str) -> AppResult<Vec<MagnetLink>> {
        Ok(vec![MagnetLink {
            id: format!("https://tracker.example/{}", film_name),
            tracker: "YTS".to_string(),
            title: format!("{} 1080p", film_name),
            seeders: 250,
            magnet_uri: "magnet:?xt=urn:btih:stub".to_string(),
        }])
    }
}

fn create_test_server() -> TestServer {
    let state = AppState::new(Arc::new(StubProvider), None);
    TestServer::new(create_router(state)).unwrap()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_search_drops_rows_without_a_film_id() {
    let server = create_test_server();

    let response = server.get("/api/v1/search").add_query_param("query", "heat").await;
    response.assert_status_ok();

    let results: Vec<serde_json::Value> = response.json();
    assert_eq!(results.len(), 1);
    assert_eq!(results[0]["film_id"], "/film/heat/");
}

#[tokio::test]
async fn test_search_backend_failure_maps_to_bad_gateway() {
    let server = create_test_server();

    let response = server.get("/api/v1/search").add_query_param("query", "boom").await;
    response.assert_status(StatusCode::BAD_GATEWAY);
}

#[tokio::test]
async fn test_film_details_lookup() {
    let server = create_test_server();

    let response = server.get("/api/v1/films/heat").await;
    response.assert_status_ok();

    let details: serde_json::Value = response.json();
    assert_eq!(details["name"], "Film heat");
    assert_eq!(details["year"], "1995");
}

#[tokio::test]
async fn test_seeds_crud_flow() {
    let server = create_test_server();

    // Add two films, the first one twice
    let response = server
        .post("/api/v1/seeds")
        .json(&json!({
            "id": "heat",
            "poster": "https://posters.example/heat.jpg",
            "title": "Heat"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let response = server
        .post("/api/v1/seeds")
        .json(&json!({
            "id": "heat",
            "poster": "https://posters.example/heat.jpg",
            "title": "Heat"
        }))
        .await;
    // The duplicate is absorbed, not an error
    response.assert_status_ok();

    let response = server
        .post("/api/v1/seeds")
        .json(&json!({
            "id": "alien",
            "poster": "https://posters.example/alien.jpg",
            "title": "Alien"
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let seeds: Vec<serde_json::Value> = server.get("/api/v1/seeds").await.json();
    assert_eq!(seeds.len(), 2);

    // Remove one
    let response = server.delete("/api/v1/seeds/heat").await;
    response.assert_status(StatusCode::NO_CONTENT);
    let response = server.delete("/api/v1/seeds/heat").await;
    response.assert_status(StatusCode::NOT_FOUND);

    let seeds: Vec<serde_json::Value> = server.get("/api/v1/seeds").await.json();
    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds[0]["id"], "alien");

    // Replace the whole list
    let response = server
        .put("/api/v1/seeds")
        .json(&json!([{
            "id": "ronin",
            "poster": "https://posters.example/ronin.jpg",
            "title": "Ronin"
        }]))
        .await;
    response.assert_status_ok();

    let seeds: Vec<serde_json::Value> = server.get("/api/v1/seeds").await.json();
    assert_eq!(seeds.len(), 1);
    assert_eq!(seeds[0]["id"], "ronin");
}

#[tokio::test]
async fn test_user_recommendations_replace_the_store() {
    let server = create_test_server();

    let response = server.get("/api/v1/recommendations/user/alice").await;
    response.assert_status_ok();
    let film_ids: Vec<String> = response.json();
    assert_eq!(film_ids.len(), USER_RECS.len());

    let stored: Vec<String> = server.get("/api/v1/recommendations").await.json();
    assert_eq!(stored, film_ids);
}

#[tokio::test]
async fn test_seed_recommendations_use_the_request_body() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/recommendations/seed")
        .json(&json!({ "seed_film_ids": ["heat", "alien"] }))
        .await;
    response.assert_status_ok();

    let film_ids: Vec<String> = response.json();
    assert_eq!(film_ids, vec!["heat-like", "alien-like"]);
}

#[tokio::test]
async fn test_seed_recommendations_fall_back_to_the_seed_store() {
    let server = create_test_server();

    // Nothing seeded yet
    let response = server.post("/api/v1/recommendations/seed").await;
    response.assert_status(StatusCode::BAD_REQUEST);

    server
        .post("/api/v1/seeds")
        .json(&json!({
            "id": "heat",
            "poster": "https://posters.example/heat.jpg",
            "title": "Heat"
        }))
        .await;

    let response = server.post("/api/v1/recommendations/seed").await;
    response.assert_status_ok();
    let film_ids: Vec<String> = response.json();
    assert_eq!(film_ids, vec!["heat-like"]);
}

#[tokio::test]
async fn test_results_paging_with_placeholder_fallback() {
    let server = create_test_server();
    server.get("/api/v1/recommendations/user/alice").await;

    let first: serde_json::Value = server.get("/api/v1/results").await.json();
    assert_eq!(first["page"], 0);
    assert_eq!(first["total"], 7);
    assert_eq!(first["total_pages"], 2);

    let movies = first["movies"].as_array().unwrap();
    assert_eq!(movies.len(), 5);
    assert_eq!(movies[0]["name"], "Film heat");

    // The film with broken details keeps its slot as a placeholder
    assert_eq!(movies[2]["id"], "broken");
    assert!(movies[2]["name"].is_null());
    assert_eq!(movies[2]["poster"], PLACEHOLDER_POSTER);

    let second: serde_json::Value = server
        .get("/api/v1/results")
        .add_query_param("page", 1)
        .await
        .json();
    assert_eq!(second["movies"].as_array().unwrap().len(), 2);
    assert_eq!(second["movies"][0]["id"], "ronin");
}

#[tokio::test]
async fn test_random_pick_reports_its_page() {
    let server = create_test_server();

    // No recommendations yet
    let response = server.get("/api/v1/results/random").await;
    response.assert_status(StatusCode::NOT_FOUND);

    server.get("/api/v1/recommendations/user/alice").await;

    let pick: serde_json::Value = server.get("/api/v1/results/random").await.json();
    let index = pick["index"].as_u64().unwrap() as usize;
    assert!(index < USER_RECS.len());
    assert_eq!(pick["page"].as_u64().unwrap() as usize, index / 5);
    assert_eq!(pick["movie"]["id"], USER_RECS[index]);
}

#[tokio::test]
async fn test_magnet_lookup() {
    let server = create_test_server();

    let response = server
        .get("/api/v1/magnets")
        .add_query_param("film", "Heat")
        .await;
    response.assert_status_ok();

    let magnets: Vec<serde_json::Value> = response.json();
    assert_eq!(magnets.len(), 1);
    assert_eq!(magnets[0]["tracker"], "YTS");

    let response = server
        .get("/api/v1/magnets")
        .add_query_param("film", "   ")
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test(start_paused = true)]
async fn test_wheel_spin_reveals_the_winner_after_the_animation() {
    let server = create_test_server();

    let response = server
        .post("/api/v1/wheel")
        .json(&json!({ "film_ids": ["heat", "alien", "se7en", "drive"] }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let session: serde_json::Value = response.json();
    let id = session["id"].as_str().unwrap().to_string();
    assert_eq!(session["items"].as_array().unwrap().len(), 4);
    assert_eq!(session["current_rotation_degrees"], 0.0);

    let response = server.post(&format!("/api/v1/wheel/{}/spin", id)).await;
    response.assert_status_ok();
    let spinning: serde_json::Value = response.json();
    assert_eq!(spinning["is_spinning"], true);
    let rotation = spinning["current_rotation_degrees"].as_f64().unwrap();
    assert!(rotation >= 5.0 * 360.0);

    // A second spin while the first runs changes nothing
    let second: serde_json::Value = server
        .post(&format!("/api/v1/wheel/{}/spin", id))
        .await
        .json();
    assert_eq!(second["current_rotation_degrees"].as_f64().unwrap(), rotation);

    // Just before the animation window closes the winner stays hidden
    tokio::time::sleep(Duration::from_millis(3990)).await;
    let view: serde_json::Value = server.get(&format!("/api/v1/wheel/{}", id)).await.json();
    assert_eq!(view["is_spinning"], true);
    assert!(view["last_winner"].is_null());

    tokio::time::sleep(Duration::from_millis(20)).await;
    let view: serde_json::Value = server.get(&format!("/api/v1/wheel/{}", id)).await.json();
    assert_eq!(view["is_spinning"], false);
    let winner = view["last_winner"].as_str().unwrap().to_string();
    assert!(winner.starts_with("Film "));
    assert_eq!(view["winner_movie"]["name"].as_str().unwrap(), winner);
    assert_eq!(view["details_open"], false);

    // The details view opens a beat after the reveal
    tokio::time::sleep(Duration::from_millis(810)).await;
    let view: serde_json::Value = server.get(&format!("/api/v1/wheel/{}", id)).await.json();
    assert_eq!(view["details_open"], true);
    assert_eq!(view["last_winner"], winner.as_str());
}

#[tokio::test]
async fn test_wheel_defaults_to_the_recommendation_store() {
    let server = create_test_server();
    server.get("/api/v1/recommendations/user/alice").await;

    let response = server.post("/api/v1/wheel").await;
    response.assert_status(StatusCode::CREATED);

    let session: serde_json::Value = response.json();
    // Six of the seven recommended films resolve to named movies; the broken
    // one has no label to put on a segment
    assert_eq!(session["items"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn test_wheel_layout_matches_the_session_items() {
    let server = create_test_server();

    let session: serde_json::Value = server
        .post("/api/v1/wheel")
        .json(&json!({ "film_ids": ["heat", "alien", "se7en", "drive"] }))
        .await
        .json();
    let id = session["id"].as_str().unwrap();

    let layout: serde_json::Value = server
        .get(&format!("/api/v1/wheel/{}/layout", id))
        .await
        .json();
    let slices = layout["slices"].as_array().unwrap();
    assert_eq!(slices.len(), 4);
    assert_eq!(slices[0]["label"], "Film heat");
    assert!(slices[0]["path"].as_str().unwrap().starts_with("M "));
}

#[tokio::test]
async fn test_wheel_close_tears_the_session_down() {
    let server = create_test_server();

    let session: serde_json::Value = server
        .post("/api/v1/wheel")
        .json(&json!({ "film_ids": ["heat"] }))
        .await
        .json();
    let id = session["id"].as_str().unwrap().to_string();

    let response = server.delete(&format!("/api/v1/wheel/{}", id)).await;
    response.assert_status(StatusCode::NO_CONTENT);

    let response = server.get(&format!("/api/v1/wheel/{}", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);

    let response = server.post(&format!("/api/v1/wheel/{}/spin", id)).await;
    response.assert_status(StatusCode::NOT_FOUND);
}
