//! Notification counters, exported through the service-core Prometheus
//! recorder.

use metrics::counter;

/// Record one dispatch outcome (`sent` or `failed`) for a notification type.
pub fn record_notification(kind: &str, status: &str) {
    counter!(
        "notifications_total",
        "kind" => kind.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record a call made to an email provider.
pub fn record_provider_call(provider: &str, status: &str) {
    counter!(
        "notification_provider_calls_total",
        "provider" => provider.to_string(),
        "status" => status.to_string()
    )
    .increment(1);
}
