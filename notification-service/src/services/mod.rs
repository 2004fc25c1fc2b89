pub mod dispatcher;
pub mod metrics;
pub mod providers;
pub mod renderer;

pub use dispatcher::{DispatchError, NotificationDispatcher};
pub use metrics::{record_notification, record_provider_call};
pub use providers::{
    provider_from_config, EmailMessage, EmailProvider, MockEmailProvider, ProviderError,
    SimulatedEmailProvider, SmtpProvider,
};
pub use renderer::{render, RenderedMessage};
