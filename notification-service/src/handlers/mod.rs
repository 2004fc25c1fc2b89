//! HTTP handlers for notification-service.

pub mod health;
pub mod metrics;
pub mod notifications;

pub use health::{health_check, method_not_allowed, service_info};
pub use metrics::metrics;
pub use notifications::send_notification;
