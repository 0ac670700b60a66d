//! Application state - shared across all handlers.

use std::sync::Arc;

use vita_core::error::RepoError;
use vita_core::ports::{
    ClinicalRepository, ConnectionRepository, CourseRepository, ForumRepository,
    ProfessionalRepository, UserRepository,
};
use vita_infra::InMemoryStore;

use crate::config::AppConfig;

/// Shared application state.
///
/// Every port is backed by the same store, so a like recorded through
/// `connections` is immediately visible to `users` and the nearby feed.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub connections: Arc<dyn ConnectionRepository>,
    pub forum: Arc<dyn ForumRepository>,
    pub courses: Arc<dyn CourseRepository>,
    pub professionals: Arc<dyn ProfessionalRepository>,
    pub clinical: Arc<dyn ClinicalRepository>,
    pub nearby_default_distance_km: f64,
}

impl AppState {
    /// Build the application state, loading the demo data set when enabled.
    pub async fn new(config: &AppConfig) -> Result<Self, RepoError> {
        let store = Self::open_store(config.seed_data).await?;
        tracing::info!("Application state initialized");
        Ok(Self::from_store(Arc::new(store), config))
    }

    pub fn from_store(store: Arc<InMemoryStore>, config: &AppConfig) -> Self {
        Self {
            users: store.clone(),
            connections: store.clone(),
            forum: store.clone(),
            courses: store.clone(),
            professionals: store.clone(),
            clinical: store,
            nearby_default_distance_km: config.nearby_default_distance_km,
        }
    }

    #[cfg(feature = "seed")]
    async fn open_store(seed_data: bool) -> Result<InMemoryStore, RepoError> {
        if seed_data {
            InMemoryStore::seeded().await
        } else {
            tracing::info!("SEED_DATA disabled - starting with an empty store");
            Ok(InMemoryStore::new())
        }
    }

    #[cfg(not(feature = "seed"))]
    async fn open_store(seed_data: bool) -> Result<InMemoryStore, RepoError> {
        if seed_data {
            tracing::warn!("Built without the seed feature - starting with an empty store");
        }
        Ok(InMemoryStore::new())
    }
}
