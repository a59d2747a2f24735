use serde::{Deserialize, Serialize};

/// Poster path served when a film's details cannot be fetched
pub const PLACEHOLDER_POSTER: &str = "/placeholder.svg";

/// A film the user picked as input for seed-based recommendations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedMovie {
    pub id: String,
    pub poster: String,
    pub title: String,
}

/// One row of the backend's free-text search response
///
/// The backend occasionally returns rows with an empty `film_id`; those are
/// unusable downstream and get filtered out before the response leaves this
/// service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieSearchResult {
    #[serde(default)]
    pub film_id: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub title: String,
}

/// Full film record returned by the backend's detail endpoint
///
/// The backend serves every field as a string and omits the ones it does not
/// know, so everything is defaulted here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MovieDetails {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub director: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub genres: String,
    #[serde(default)]
    pub casts: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub themes: String,
    #[serde(default)]
    pub poster: String,
    #[serde(default)]
    pub rating: String,
}

/// A recommended film as served to the results page
///
/// Only `id` and `poster` are guaranteed: when the detail lookup for a film
/// fails, the entry degrades to a placeholder instead of failing the whole
/// page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendedMovie {
    pub id: String,
    pub poster: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub director: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synopsis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genres: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub casts: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
}

/// Treats the backend's empty strings as absent
fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl RecommendedMovie {
    /// Builds a full entry from a detail lookup
    pub fn from_details(film_id: impl Into<String>, details: MovieDetails) -> Self {
        let poster = if details.poster.trim().is_empty() {
            PLACEHOLDER_POSTER.to_string()
        } else {
            details.poster
        };

        Self {
            id: film_id.into(),
            poster,
            name: non_empty(details.name),
            year: non_empty(details.year),
            director: non_empty(details.director),
            synopsis: non_empty(details.synopsis),
            genres: non_empty(details.genres),
            casts: non_empty(details.casts),
            tagline: non_empty(details.tagline),
            duration: non_empty(details.duration),
            rating: non_empty(details.rating),
        }
    }

    /// Bare entry used when the detail lookup failed
    pub fn placeholder(film_id: impl Into<String>) -> Self {
        Self {
            id: film_id.into(),
            poster: PLACEHOLDER_POSTER.to_string(),
            name: None,
            year: None,
            director: None,
            synopsis: None,
            genres: None,
            casts: None,
            tagline: None,
            duration: None,
            rating: None,
        }
    }

    /// Display name used for wheel labels and magnet lookups
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_details_deserialization() {
        let json = r#"{
            "id": "inception",
            "name": "Inception",
            "year": "2010",
            "director": "Christopher Nolan",
            "duration": "148",
            "genres": "Action, Sci-Fi",
            "casts": "Leonardo DiCaprio, Joseph Gordon-Levitt",
            "synopsis": "A thief who steals corporate secrets",
            "tagline": "Your mind is the scene of the crime",
            "themes": "Dreams",
            "poster": "https://posters.example/inception.jpg",
            "rating": "4.2"
        }"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.name, "Inception");
        assert_eq!(details.year, "2010");
        assert_eq!(details.rating, "4.2");
    }

    #[test]
    fn test_movie_details_missing_fields_default() {
        let json = r#"{"name": "Obscure Film"}"#;

        let details: MovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.name, "Obscure Film");
        assert_eq!(details.year, "");
        assert_eq!(details.poster, "");
    }

    #[test]
    fn test_search_result_deserialization() {
        let json = r#"{
            "film_id": "/film/inception/",
            "poster": "https://posters.example/inception.jpg",
            "title": "Inception"
        }"#;

        let result: MovieSearchResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.film_id, "/film/inception/");
        assert_eq!(result.title, "Inception");
    }

    #[test]
    fn test_from_details_maps_empty_strings_to_none() {
        let details = MovieDetails {
            name: "Inception".to_string(),
            year: "2010".to_string(),
            ..Default::default()
        };

        let movie = RecommendedMovie::from_details("inception", details);
        assert_eq!(movie.name.as_deref(), Some("Inception"));
        assert_eq!(movie.year.as_deref(), Some("2010"));
        assert_eq!(movie.director, None);
        assert_eq!(movie.poster, PLACEHOLDER_POSTER);
    }

    #[test]
    fn test_placeholder_has_no_name() {
        let movie = RecommendedMovie::placeholder("mystery-film");
        assert_eq!(movie.id, "mystery-film");
        assert_eq!(movie.poster, PLACEHOLDER_POSTER);
        assert_eq!(movie.display_name(), None);
    }
}
