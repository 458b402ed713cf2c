//! The notification record and its lifecycle status.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::NotificationId;

/// Lifecycle flag of a notification.
///
/// Stored as a free-form string: records start as
/// [`NotificationStatus::PENDING`] and the send operation moves any value to
/// [`NotificationStatus::SENT`]. Other values written by clients or older
/// files are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct NotificationStatus(String);

impl NotificationStatus {
    /// Wire value of a notification that has not been sent.
    pub const PENDING: &'static str = "Pending";
    /// Wire value of a notification marked as sent.
    pub const SENT: &'static str = "Sent";

    /// Returns the `Pending` status.
    #[must_use]
    pub fn pending() -> Self {
        Self(Self::PENDING.to_string())
    }

    /// Returns the `Sent` status.
    #[must_use]
    pub fn sent() -> Self {
        Self(Self::SENT.to_string())
    }

    /// Returns the raw status string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the `Sent` status.
    #[must_use]
    pub fn is_sent(&self) -> bool {
        self.0 == Self::SENT
    }
}

impl Default for NotificationStatus {
    fn default() -> Self {
        Self::pending()
    }
}

impl From<&str> for NotificationStatus {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for NotificationStatus {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for NotificationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller-supplied notification fields, as bound from a request body.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationDraft {
    /// Current price of the instrument.
    pub current_price: f64,
    /// Daily change in percent.
    pub daily_change_percent: f64,
    /// Traded volume.
    pub trading_volume: f64,
    /// Requested status, if any. Ignored on creation.
    pub status: Option<NotificationStatus>,
}

/// A stored price notification.
///
/// Field order is the persisted and wire order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Notification {
    /// Identifier assigned on creation.
    pub id: NotificationId,
    /// Current price of the instrument.
    pub current_price: f64,
    /// Daily change in percent.
    pub daily_change_percent: f64,
    /// Traded volume.
    pub trading_volume: f64,
    /// Lifecycle status.
    pub status: NotificationStatus,
}

impl Notification {
    /// Builds a new pending notification from caller-supplied fields.
    #[must_use]
    pub fn pending(id: NotificationId, draft: &NotificationDraft) -> Self {
        Self {
            id,
            current_price: draft.current_price,
            daily_change_percent: draft.daily_change_percent,
            trading_volume: draft.trading_volume,
            status: NotificationStatus::pending(),
        }
    }

    /// Replaces every caller-controlled field with those of `draft`.
    ///
    /// The id never changes. A draft without a status resets it to
    /// `Pending`.
    pub fn replace_with(&mut self, draft: &NotificationDraft) {
        self.current_price = draft.current_price;
        self.daily_change_percent = draft.daily_change_percent;
        self.trading_volume = draft.trading_volume;
        self.status = draft.status.clone().unwrap_or_default();
    }

    /// Marks the notification as sent. All other fields are left untouched.
    pub fn mark_sent(&mut self) {
        self.status = NotificationStatus::sent();
    }
}
