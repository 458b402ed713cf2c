//! Persistence layer: whole-collection storage of notifications.
//!
//! Provides the [`NotificationStore`] trait. Every operation reads or writes
//! the complete collection; there is no partial access and no append. The
//! file-backed implementation keeps the collection as a pretty-printed JSON
//! array, the in-memory one is used by tests and ephemeral deployments.

pub mod json_file;
pub mod memory;

use async_trait::async_trait;

use crate::domain::Notification;
use crate::error::ServiceError;

pub use json_file::JsonFileStore;
pub use memory::InMemoryStore;

/// Storage boundary for the full notification collection.
#[async_trait]
pub trait NotificationStore: Send + Sync + std::fmt::Debug {
    /// Short backend name reported by the health endpoint.
    fn backend(&self) -> &'static str;

    /// Where the collection lives, if it lives outside the process.
    fn location(&self) -> Option<String> {
        None
    }

    /// Loads every persisted notification in stored order.
    ///
    /// A store that has never been written returns an empty collection.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Decode`] if the persisted content is malformed
    /// and [`ServiceError::Io`] if it cannot be read.
    async fn load(&self) -> Result<Vec<Notification>, ServiceError>;

    /// Replaces the persisted collection with `notifications`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Io`] if the collection cannot be written. The
    /// previously stored collection is left intact in that case.
    async fn save(&self, notifications: &[Notification]) -> Result<(), ServiceError>;
}
