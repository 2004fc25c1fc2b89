use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

pub const SENT_MESSAGE: &str = "Notificación enviada exitosamente";
pub const FAILED_MESSAGE: &str = "Error al enviar notificación";

/// Event types with a dedicated template. Anything else falls through to
/// `Other` and gets the generic body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Welcome,
    EmployeeCreated,
    EmployeeUpdated,
    Other,
}

impl NotificationKind {
    pub fn parse(kind: &str) -> Self {
        match kind {
            "welcome" => NotificationKind::Welcome,
            "employee_created" => NotificationKind::EmployeeCreated,
            "employee_updated" => NotificationKind::EmployeeUpdated,
            _ => NotificationKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Welcome => "welcome",
            NotificationKind::EmployeeCreated => "employee_created",
            NotificationKind::EmployeeUpdated => "employee_updated",
            NotificationKind::Other => "other",
        }
    }
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Missing and `null` string fields both read as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NotificationRequest {
    #[serde(rename = "type", default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "type is required"))]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,
    /// Free-form payload probed by the templates.
    #[serde(default)]
    pub data: Option<serde_json::Value>,
}

impl NotificationRequest {
    pub fn kind(&self) -> NotificationKind {
        NotificationKind::parse(&self.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
}

impl NotificationResponse {
    pub fn sent(id: String) -> Self {
        Self {
            success: true,
            message: SENT_MESSAGE.to_string(),
            id: Some(id),
        }
    }

    pub fn failed(id: String) -> Self {
        Self {
            success: false,
            message: FAILED_MESSAGE.to_string(),
            id: Some(id),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: DateTime<Utc>,
    pub smtp_configured: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
    pub status: String,
    pub endpoints: Vec<String>,
}
