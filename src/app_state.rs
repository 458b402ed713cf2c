//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::config::{ServiceConfig, StoreBackend};
use crate::persistence::{InMemoryStore, JsonFileStore, NotificationStore};
use crate::service::{IdStrategy, NotificationService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Notification service for all business logic.
    pub notification_service: Arc<NotificationService>,
}

impl AppState {
    /// Builds state around an already constructed store.
    #[must_use]
    pub fn new(store: Arc<dyn NotificationStore>, id_strategy: IdStrategy) -> Self {
        Self {
            notification_service: Arc::new(NotificationService::new(store, id_strategy)),
        }
    }

    /// Builds state with the store selected by `config`.
    #[must_use]
    pub fn from_config(config: &ServiceConfig) -> Self {
        let store: Arc<dyn NotificationStore> = match config.store_backend {
            StoreBackend::File => Arc::new(JsonFileStore::new(config.store_path.clone())),
            StoreBackend::Memory => Arc::new(InMemoryStore::new()),
        };
        Self::new(store, config.id_strategy)
    }
}
