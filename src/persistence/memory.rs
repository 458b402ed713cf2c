//! In-memory notification store.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::NotificationStore;
use crate::domain::Notification;
use crate::error::ServiceError;

/// Store keeping the collection in process memory. Contents are lost on
/// restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    notifications: RwLock<Vec<Notification>>,
}

impl InMemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `notifications`.
    #[must_use]
    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        Self {
            notifications: RwLock::new(notifications),
        }
    }
}

#[async_trait]
impl NotificationStore for InMemoryStore {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn load(&self) -> Result<Vec<Notification>, ServiceError> {
        Ok(self.notifications.read().await.clone())
    }

    async fn save(&self, notifications: &[Notification]) -> Result<(), ServiceError> {
        *self.notifications.write().await = notifications.to_vec();
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::{NotificationId, NotificationStatus};

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = InMemoryStore::new();
        let Ok(loaded) = store.load().await else {
            panic!("load should succeed");
        };
        assert!(loaded.is_empty());
    }

    #[tokio::test]
    async fn save_replaces_whole_collection() {
        let first = Notification {
            id: NotificationId::new(1),
            current_price: 1.0,
            daily_change_percent: 0.0,
            trading_volume: 10.0,
            status: NotificationStatus::pending(),
        };
        let mut second = first.clone();
        second.id = NotificationId::new(2);

        let store = InMemoryStore::with_notifications(vec![first]);
        assert!(store.save(std::slice::from_ref(&second)).await.is_ok());

        let Ok(loaded) = store.load().await else {
            panic!("load should succeed");
        };
        assert_eq!(loaded, vec![second]);
    }
}
