//! Numeric notification identifier.
//!
//! [`NotificationId`] wraps the 1-based `u64` assigned by the service when a
//! notification is created. Path parameters are matched against its decimal
//! string form, so `"01"` never resolves to id `1`.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of a stored notification.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
    ToSchema,
)]
#[serde(transparent)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a `NotificationId` from its raw value.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    /// Returns the identifier following this one, or `None` once the id
    /// space is exhausted.
    #[must_use]
    pub const fn checked_next(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(next) => Some(Self(next)),
            None => None,
        }
    }

    /// Returns `true` if `raw` is exactly the decimal rendering of this id.
    #[must_use]
    pub fn matches(self, raw: &str) -> bool {
        self.0.to_string() == raw
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NotificationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<NotificationId> for u64 {
    fn from(id: NotificationId) -> Self {
        id.0
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn matches_exact_decimal_only() {
        let id = NotificationId::new(1);
        assert!(id.matches("1"));
        assert!(!id.matches("01"));
        assert!(!id.matches("+1"));
        assert!(!id.matches(" 1"));
        assert!(!id.matches("abc"));
    }

    #[test]
    fn checked_next_stops_at_max() {
        assert_eq!(
            NotificationId::new(4).checked_next(),
            Some(NotificationId::new(5))
        );
        assert_eq!(NotificationId::new(u64::MAX).checked_next(), None);
    }

    #[test]
    fn serializes_as_plain_number() {
        let json = serde_json::to_string(&NotificationId::new(42)).unwrap_or_default();
        assert_eq!(json, "42");
    }

    #[test]
    fn rejects_negative_numbers() {
        let parsed = serde_json::from_str::<NotificationId>("-1");
        assert!(parsed.is_err());
    }
}
