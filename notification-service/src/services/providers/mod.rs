pub mod email;

use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

use crate::config::SmtpConfig;

pub use email::{MockEmailProvider, SimulatedEmailProvider, SmtpProvider};

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid recipient: {0}")]
    InvalidRecipient(String),

    #[error("Failed to build message: {0}")]
    BuildFailed(String),

    #[error("Send error: {0}")]
    SendFailed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub body: String,
}

#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, email: &EmailMessage) -> Result<(), ProviderError>;
    fn name(&self) -> &'static str;
}

/// Picks real SMTP delivery when credentials are configured and the log-only
/// simulator otherwise.
pub fn provider_from_config(config: &SmtpConfig) -> Result<Arc<dyn EmailProvider>, ProviderError> {
    if config.is_configured() {
        let provider = SmtpProvider::new(config.clone())?;
        tracing::info!(host = %config.host, port = config.port, "SMTP email provider initialized");
        Ok(Arc::new(provider))
    } else {
        tracing::info!("SMTP credentials not configured, simulating email delivery");
        Ok(Arc::new(SimulatedEmailProvider))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(user: &str, password: &str) -> SmtpConfig {
        SmtpConfig {
            host: "smtp.test.local".to_string(),
            port: 587,
            user: user.to_string(),
            password: password.to_string(),
            from_email: "noreply@formulario.com".to_string(),
            from_name: "Sistema de Empleados".to_string(),
        }
    }

    #[test]
    fn missing_credentials_select_simulation() {
        let provider = provider_from_config(&config("", "")).unwrap();
        assert_eq!(provider.name(), "simulated");

        let provider = provider_from_config(&config("user", "")).unwrap();
        assert_eq!(provider.name(), "simulated");
    }

    #[tokio::test]
    async fn credentials_select_smtp() {
        let provider = provider_from_config(&config("user", "secret")).unwrap();
        assert_eq!(provider.name(), "smtp");
    }
}
