//! Domain layer: the notification record, its status and identifier.

pub mod notification;
pub mod notification_id;

pub use notification::{Notification, NotificationDraft, NotificationStatus};
pub use notification_id::NotificationId;
