//! Notification request DTOs.

use serde::Deserialize;
use utoipa::ToSchema;

use crate::domain::{NotificationDraft, NotificationId, NotificationStatus};
use crate::error::ServiceError;

/// Request body for `POST /notifications` and `PUT /notifications/{id}`.
///
/// Absent or `null` numeric fields become `0`. Present fields must carry the
/// declared JSON type.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct NotificationRequest {
    /// Accepted for compatibility and ignored; ids come from the server or
    /// the request path.
    pub id: Option<NotificationId>,
    /// Current price of the instrument.
    pub current_price: Option<f64>,
    /// Daily change in percent.
    pub daily_change_percent: Option<f64>,
    /// Traded volume.
    pub trading_volume: Option<f64>,
    /// Ignored on create. On update it replaces the stored status, which
    /// falls back to `Pending` when absent.
    pub status: Option<NotificationStatus>,
}

impl NotificationRequest {
    /// Binds a request from a raw body, whatever its `Content-Type`.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError::Bind`] if the body is not a JSON object of
    /// the expected shape.
    pub fn from_slice(body: &[u8]) -> Result<Self, ServiceError> {
        serde_json::from_slice(body).map_err(|e| ServiceError::Bind(e.to_string()))
    }
}

impl From<NotificationRequest> for NotificationDraft {
    fn from(req: NotificationRequest) -> Self {
        Self {
            current_price: req.current_price.unwrap_or_default(),
            daily_change_percent: req.daily_change_percent.unwrap_or_default(),
            trading_volume: req.trading_volume.unwrap_or_default(),
            status: req.status,
        }
    }
}
