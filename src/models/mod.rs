pub mod magnet;
pub mod movie;

pub use magnet::MagnetLink;
pub use movie::{
    MovieDetails, MovieSearchResult, RecommendedMovie, SeedMovie, PLACEHOLDER_POSTER,
};
