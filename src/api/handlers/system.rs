//! System endpoints: health check backed by a store read.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Outcome of reading the notification store.
#[derive(Debug, Serialize, ToSchema)]
pub struct StoreStatus {
    /// Store backend, `file` or `memory`.
    pub backend: String,
    /// Backing file path, for file stores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Whether the collection could be loaded.
    pub readable: bool,
    /// Number of stored notifications when readable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub records: Option<usize>,
    /// Load failure message when not readable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// `healthy` when the store is readable, `degraded` otherwise.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// Time of the check, RFC 3339.
    pub timestamp: String,
    /// Store details.
    pub store: StoreStatus,
}

/// `GET /health` — Service and store health.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Loads the notification store once and reports its backend, location and record count.",
    responses(
        (status = 200, description = "Store is readable", body = HealthResponse),
        (status = 503, description = "Store cannot be loaded", body = HealthResponse),
    )
)]
pub async fn health_handler(State(state): State<AppState>) -> impl IntoResponse {
    let service = &state.notification_service;
    let checked = service.check_store().await;
    let readable = checked.is_ok();
    let (records, error) = match checked {
        Ok(count) => (Some(count), None),
        Err(e) => {
            tracing::warn!(error = %e, "health check could not load store");
            (None, Some(e.to_string()))
        }
    };
    let (code, status) = if readable {
        (StatusCode::OK, "healthy")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            timestamp: Utc::now().to_rfc3339(),
            store: StoreStatus {
                backend: service.store_backend().to_string(),
                path: service.store_location(),
                readable,
                records,
                error,
            },
        }),
    )
}

/// System routes mounted at the root level.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use super::*;
    use crate::persistence::{InMemoryStore, NotificationStore};
    use crate::service::IdStrategy;

    #[tokio::test]
    async fn memory_store_reports_backend_without_path() {
        let store: Arc<dyn NotificationStore> = Arc::new(InMemoryStore::new());
        let router = routes().with_state(AppState::new(store, IdStrategy::default()));
        let Ok(request) = Request::builder().uri("/health").body(Body::empty()) else {
            panic!("request");
        };
        let Ok(response) = router.oneshot(request).await else {
            panic!("router failed");
        };
        assert_eq!(response.status(), StatusCode::OK);
        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(body) = serde_json::from_slice::<Value>(&bytes) else {
            panic!("body is not json");
        };
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["store"]["backend"], "memory");
        assert_eq!(body["store"]["readable"], true);
        assert_eq!(body["store"]["records"], 0);
        assert!(body["store"].get("path").is_none());
    }
}
