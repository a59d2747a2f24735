use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;
use uuid::Uuid;

use crate::db::Cache;
use crate::services::providers::RecommendationProvider;
use crate::services::wheel::WheelSession;
use crate::stores::{RecommendationStore, SeedStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Client for the recommendation backend
    pub provider: Arc<dyn RecommendationProvider>,
    /// Lookup cache and snapshot persistence; absent in test configurations
    pub cache: Option<Cache>,
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
pub struct AppStateInner {
    pub seeds: SeedStore,
    pub recommendations: RecommendationStore,
    /// Open wheel sessions, one per wheel UI; never persisted
    pub wheels: HashMap<Uuid, WheelSession>,
}

impl AppState {
    /// Creates application state with empty stores
    pub fn new(provider: Arc<dyn RecommendationProvider>, cache: Option<Cache>) -> Self {
        Self {
            provider,
            cache,
            inner: Arc::new(RwLock::new(AppStateInner {
                seeds: SeedStore::new(),
                recommendations: RecommendationStore::new(),
                wheels: HashMap::new(),
            })),
        }
    }
}
