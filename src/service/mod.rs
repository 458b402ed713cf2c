//! Service layer: business logic orchestration.
//!
//! [`NotificationService`] runs every operation as a whole-collection
//! read-modify-write against the injected
//! [`crate::persistence::NotificationStore`].

pub mod notification_service;

pub use notification_service::{IdStrategy, NotificationService};
