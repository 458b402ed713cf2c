//! Notification CRUD handlers: create, list, update, delete, send.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{post, put};
use axum::{Json, Router};

use crate::api::dto::NotificationRequest;
use crate::app_state::AppState;
use crate::domain::{Notification, NotificationDraft};
use crate::error::{ErrorResponse, ServiceError};

/// `POST /notifications` — Create a notification.
///
/// # Errors
///
/// Returns [`ServiceError`] on a malformed body or a store failure.
#[utoipa::path(
    post,
    path = "/notifications",
    tag = "Notifications",
    summary = "Create a notification",
    description = "Stores a new notification. The server assigns the id and sets the status to `Pending`; any id or status in the body is ignored.",
    request_body = NotificationRequest,
    responses(
        (status = 201, description = "Notification created", body = Notification),
        (status = 400, description = "Malformed body or store failure", body = ErrorResponse),
    )
)]
pub async fn create_notification(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, ServiceError> {
    let req = NotificationRequest::from_slice(&body)?;
    let created = state
        .notification_service
        .create(&NotificationDraft::from(req))
        .await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `GET /notifications` — List every notification.
///
/// # Errors
///
/// Returns [`ServiceError`] if the store cannot be read.
#[utoipa::path(
    get,
    path = "/notifications",
    tag = "Notifications",
    summary = "List notifications",
    description = "Returns all stored notifications in stored order, or an empty array.",
    responses(
        (status = 200, description = "All notifications", body = Vec<Notification>),
        (status = 400, description = "Store failure", body = ErrorResponse),
    )
)]
pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, ServiceError> {
    let notifications = state.notification_service.list().await?;
    Ok(Json(notifications))
}

/// `PUT /notifications/{id}` — Replace a notification's fields.
///
/// # Errors
///
/// Returns [`ServiceError::NotFound`] if no notification has the id, or a
/// bind/store error.
#[utoipa::path(
    put,
    path = "/notifications/{id}",
    tag = "Notifications",
    summary = "Update a notification",
    description = "Replaces price, change and volume with the body values. The status is set to the body value, or `Pending` when the body has none. The id is taken from the path.",
    params(
        ("id" = u64, Path, description = "Notification id"),
    ),
    request_body = NotificationRequest,
    responses(
        (status = 200, description = "Notification updated"),
        (status = 400, description = "Malformed body or store failure", body = ErrorResponse),
        (status = 404, description = "Notification not found", body = ErrorResponse),
    )
)]
pub async fn update_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<impl IntoResponse, ServiceError> {
    let req = NotificationRequest::from_slice(&body)?;
    state
        .notification_service
        .update(&id, &NotificationDraft::from(req))
        .await?;
    Ok(StatusCode::OK)
}

/// `DELETE /notifications/{id}` — Remove a notification.
///
/// # Errors
///
/// Returns [`ServiceError::NotFound`] if no notification has the id, or a
/// store error.
#[utoipa::path(
    delete,
    path = "/notifications/{id}",
    tag = "Notifications",
    summary = "Delete a notification",
    description = "Removes the notification and rewrites the store without it.",
    params(
        ("id" = u64, Path, description = "Notification id"),
    ),
    responses(
        (status = 204, description = "Notification deleted"),
        (status = 400, description = "Store failure", body = ErrorResponse),
        (status = 404, description = "Notification not found", body = ErrorResponse),
    )
)]
pub async fn delete_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    state.notification_service.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /notifications/send/{id}` — Mark a notification as sent.
///
/// Only the status flag changes; nothing is delivered anywhere.
///
/// # Errors
///
/// Returns [`ServiceError::NotFound`] if no notification has the id, or a
/// store error.
#[utoipa::path(
    post,
    path = "/notifications/send/{id}",
    tag = "Notifications",
    summary = "Mark a notification as sent",
    description = "Sets the status to `Sent` and leaves every other field untouched.",
    params(
        ("id" = u64, Path, description = "Notification id"),
    ),
    responses(
        (status = 200, description = "Notification marked as sent"),
        (status = 400, description = "Store failure", body = ErrorResponse),
        (status = 404, description = "Notification not found", body = ErrorResponse),
    )
)]
pub async fn send_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ServiceError> {
    state.notification_service.send(&id).await?;
    Ok(StatusCode::OK)
}

/// Notification routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/notifications",
            post(create_notification).get(list_notifications),
        )
        .route(
            "/notifications/{id}",
            put(update_notification).delete(delete_notification),
        )
        .route("/notifications/send/{id}", post(send_notification))
}
