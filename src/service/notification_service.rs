//! Notification service: load → locate → mutate → save over the store.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::{Notification, NotificationDraft, NotificationId};
use crate::error::ServiceError;
use crate::persistence::NotificationStore;

/// Rule used to pick the id of a newly created notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdStrategy {
    /// `max(id) + 1`. Ids stay unique across deletions.
    #[default]
    MaxPlusOne,
    /// `len + 1`. Can hand out an id that is still in use after a delete.
    Count,
}

impl IdStrategy {
    /// Returns the id the next created notification receives.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::IdExhausted`] when the computed id would not
    /// fit in a `u64`.
    pub fn next_id(self, notifications: &[Notification]) -> Result<NotificationId, ServiceError> {
        let last = match self {
            Self::MaxPlusOne => notifications
                .iter()
                .map(|n| n.id)
                .max()
                .unwrap_or_default(),
            Self::Count => NotificationId::new(
                u64::try_from(notifications.len()).map_err(|_| ServiceError::IdExhausted(u64::MAX))?,
            ),
        };
        last.checked_next().ok_or(ServiceError::IdExhausted(last.get()))
    }
}

impl FromStr for IdStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "max_plus_one" | "max" => Ok(Self::MaxPlusOne),
            "count" => Ok(Self::Count),
            other => Err(format!("unknown id strategy: {other}")),
        }
    }
}

impl fmt::Display for IdStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MaxPlusOne => f.write_str("max_plus_one"),
            Self::Count => f.write_str("count"),
        }
    }
}

/// Orchestration layer for all notification operations.
///
/// Every mutation follows the same pattern: take the write guard → load the
/// whole collection → locate the target by linear scan → mutate → save the
/// whole collection. Reads take the shared side of the guard, so requests
/// served by one process never interleave a read-modify-write.
#[derive(Debug)]
pub struct NotificationService {
    store: Arc<dyn NotificationStore>,
    id_strategy: IdStrategy,
    guard: RwLock<()>,
}

impl NotificationService {
    /// Creates a new `NotificationService` over `store`.
    #[must_use]
    pub fn new(store: Arc<dyn NotificationStore>, id_strategy: IdStrategy) -> Self {
        Self {
            store,
            id_strategy,
            guard: RwLock::new(()),
        }
    }

    /// Returns the id strategy in use.
    #[must_use]
    pub const fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    /// Creates a pending notification from `draft` and persists it.
    ///
    /// Any status carried by the draft is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::IdExhausted`] if no further id can be assigned,
    /// or a store error if loading or saving fails.
    pub async fn create(&self, draft: &NotificationDraft) -> Result<Notification, ServiceError> {
        let _guard = self.guard.write().await;
        let mut notifications = self.store.load().await?;

        let id = self.id_strategy.next_id(&notifications)?;
        let notification = Notification::pending(id, draft);
        notifications.push(notification.clone());
        self.store.save(&notifications).await?;

        tracing::info!(%id, "notification created");
        Ok(notification)
    }

    /// Name of the backing store.
    #[must_use]
    pub fn store_backend(&self) -> &'static str {
        self.store.backend()
    }

    /// Location of the backing store, if it has one.
    #[must_use]
    pub fn store_location(&self) -> Option<String> {
        self.store.location()
    }

    /// Loads the collection once and returns how many records it holds.
    ///
    /// # Errors
    ///
    /// Returns the store error if the collection cannot be loaded.
    pub async fn check_store(&self) -> Result<usize, ServiceError> {
        let _guard = self.guard.read().await;
        Ok(self.store.load().await?.len())
    }

    /// Returns every stored notification in stored order.
    ///
    /// # Errors
    ///
    /// Returns a [`ServiceError`] if the store cannot be loaded.
    pub async fn list(&self) -> Result<Vec<Notification>, ServiceError> {
        let _guard = self.guard.read().await;
        self.store.load().await
    }

    /// Replaces the caller-controlled fields of the notification whose id
    /// renders as `raw_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no notification matches, or a
    /// store error if loading or saving fails.
    pub async fn update(
        &self,
        raw_id: &str,
        draft: &NotificationDraft,
    ) -> Result<Notification, ServiceError> {
        self.modify(raw_id, |n| n.replace_with(draft)).await
    }

    /// Marks the notification whose id renders as `raw_id` as sent.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no notification matches, or a
    /// store error if loading or saving fails.
    pub async fn send(&self, raw_id: &str) -> Result<Notification, ServiceError> {
        self.modify(raw_id, Notification::mark_sent).await
    }

    /// Removes the notification whose id renders as `raw_id`, keeping the
    /// relative order of the others.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::NotFound`] if no notification matches, or a
    /// store error if loading or saving fails.
    pub async fn delete(&self, raw_id: &str) -> Result<Notification, ServiceError> {
        let _guard = self.guard.write().await;
        let mut notifications = self.store.load().await?;

        let index = position(&notifications, raw_id)?;
        let removed = notifications.remove(index);
        self.store.save(&notifications).await?;

        tracing::info!(id = %removed.id, "notification deleted");
        Ok(removed)
    }

    async fn modify<F>(&self, raw_id: &str, apply: F) -> Result<Notification, ServiceError>
    where
        F: FnOnce(&mut Notification),
    {
        let _guard = self.guard.write().await;
        let mut notifications = self.store.load().await?;

        let target = notifications
            .iter_mut()
            .find(|n| n.id.matches(raw_id))
            .ok_or_else(|| ServiceError::NotFound(raw_id.to_string()))?;
        apply(target);
        let updated = target.clone();
        self.store.save(&notifications).await?;

        tracing::info!(id = %updated.id, status = %updated.status, "notification updated");
        Ok(updated)
    }
}

/// Linear scan for the first notification whose id renders as `raw_id`.
fn position(notifications: &[Notification], raw_id: &str) -> Result<usize, ServiceError> {
    notifications
        .iter()
        .position(|n| n.id.matches(raw_id))
        .ok_or_else(|| ServiceError::NotFound(raw_id.to_string()))
}
