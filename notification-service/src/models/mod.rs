pub mod notification;

pub use notification::{
    HealthResponse, NotificationKind, NotificationRequest, NotificationResponse, ServiceInfo,
    FAILED_MESSAGE, SENT_MESSAGE,
};
