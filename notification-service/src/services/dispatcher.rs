use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

use crate::models::{NotificationRequest, NotificationResponse};
use crate::services::metrics::{record_notification, record_provider_call};
use crate::services::providers::{EmailMessage, EmailProvider};
use crate::services::renderer::render;
use service_core::error::AppError;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("Invalid notification request: {0}")]
    Validation(#[from] ValidationErrors),
}

impl From<DispatchError> for AppError {
    fn from(err: DispatchError) -> Self {
        match err {
            DispatchError::Validation(errors) => AppError::ValidationError(errors),
        }
    }
}

/// Turns one notification request into one delivery attempt.
#[derive(Clone)]
pub struct NotificationDispatcher {
    provider: Arc<dyn EmailProvider>,
}

impl NotificationDispatcher {
    pub fn new(provider: Arc<dyn EmailProvider>) -> Self {
        Self { provider }
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.name()
    }

    /// Validates, renders and sends a notification.
    ///
    /// Validation failures return `Err` before an id is assigned or the
    /// provider is touched. Once validation passes the outcome is always an
    /// `Ok` response carrying a fresh id; a provider error only flips
    /// `success` to false and is logged, never returned.
    #[tracing::instrument(skip(self, request), fields(kind = %request.kind))]
    pub async fn handle(
        &self,
        request: &NotificationRequest,
    ) -> Result<NotificationResponse, DispatchError> {
        request.validate()?;

        let notification_id = Uuid::new_v4().to_string();
        let kind = request.kind();
        let rendered = render(kind, &request.subject, request.data.as_ref());

        let email = EmailMessage {
            to: request.email.clone(),
            subject: rendered.subject,
            body: rendered.body,
        };

        match self.provider.send(&email).await {
            Ok(()) => {
                record_provider_call(self.provider.name(), "success");
                record_notification(kind.as_str(), "sent");
                tracing::info!(
                    notification_id = %notification_id,
                    to = %request.email,
                    "Notification sent"
                );
                Ok(NotificationResponse::sent(notification_id))
            }
            Err(e) => {
                record_provider_call(self.provider.name(), "error");
                record_notification(kind.as_str(), "failed");
                tracing::error!(
                    notification_id = %notification_id,
                    to = %request.email,
                    error = %e,
                    "Failed to send notification"
                );
                Ok(NotificationResponse::failed(notification_id))
            }
        }
    }
}
