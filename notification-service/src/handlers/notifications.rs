use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};

use crate::models::{NotificationRequest, NotificationResponse};
use crate::startup::AppState;
use service_core::error::AppError;

/// `POST /api/notifications/send`
///
/// 200 when the provider accepted the message, 500 when it did not, 400 for
/// an unreadable body or a missing `type`/`email`.
#[tracing::instrument(skip(state, payload))]
pub async fn send_notification(
    State(state): State<AppState>,
    payload: Result<Json<NotificationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<NotificationResponse>), AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "Rejected notification body");
        AppError::BadRequest(anyhow::anyhow!("Invalid JSON"))
    })?;

    let response = state.dispatcher.handle(&request).await?;

    let status = if response.success {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };

    Ok((status, Json(response)))
}
