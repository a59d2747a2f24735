use serde::{Deserialize, Serialize};

/// A magnet link the backend found for a film
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MagnetLink {
    pub id: String,
    pub tracker: String,
    pub title: String,
    #[serde(default)]
    pub seeders: u32,
    pub magnet_uri: String,
}
