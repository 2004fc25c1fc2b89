use axum::{extract::State, http::Method, Json};
use chrono::Utc;

use crate::models::{HealthResponse, ServiceInfo};
use crate::startup::AppState;
use service_core::error::AppError;

pub const SERVICE_NAME: &str = "notification-service";

/// `smtp_configured` is the only external signal telling real delivery apart
/// from simulation.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: SERVICE_NAME.to_string(),
        timestamp: Utc::now(),
        smtp_configured: state.config.smtp.is_configured(),
    })
}

/// Static service descriptor. Also answers paths no other route matches.
pub async fn service_info(method: Method) -> Result<Json<ServiceInfo>, AppError> {
    if method != Method::GET && method != Method::HEAD {
        return Err(AppError::MethodNotAllowed);
    }

    Ok(Json(ServiceInfo {
        service: SERVICE_NAME.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        status: "running".to_string(),
        endpoints: vec![
            "GET /api/notifications/health".to_string(),
            "POST /api/notifications/send".to_string(),
        ],
    }))
}

pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
