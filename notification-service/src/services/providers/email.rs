use super::{EmailMessage, EmailProvider, ProviderError};
use crate::config::SmtpConfig;
use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use std::sync::Mutex;

pub struct SmtpProvider {
    from: Mailbox,
    transport: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpProvider {
    pub fn new(config: SmtpConfig) -> Result<Self, ProviderError> {
        let from: Mailbox = config
            .sender()
            .parse()
            .map_err(|e| ProviderError::Configuration(format!("Invalid from address: {}", e)))?;

        let creds = Credentials::new(config.user.clone(), config.password.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| {
                ProviderError::Configuration(format!("Failed to create SMTP relay: {}", e))
            })?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self { from, transport })
    }

    fn build_message(&self, email: &EmailMessage) -> Result<Message, ProviderError> {
        let to: Mailbox = email
            .to
            .parse()
            .map_err(|e| ProviderError::InvalidRecipient(format!("{}: {}", email.to, e)))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(email.subject.as_str())
            .header(ContentType::TEXT_PLAIN)
            .body(email.body.clone())
            .map_err(|e| ProviderError::BuildFailed(e.to_string()))
    }
}

#[async_trait]
impl EmailProvider for SmtpProvider {
    async fn send(&self, email: &EmailMessage) -> Result<(), ProviderError> {
        let message = self.build_message(email)?;

        self.transport
            .send(message)
            .await
            .map_err(|e| ProviderError::SendFailed(format!("Failed to send email: {}", e)))?;

        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "Email sent successfully"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "smtp"
    }
}

/// Stand-in used when no SMTP credentials are configured. Every send is
/// logged and reported as delivered.
pub struct SimulatedEmailProvider;

#[async_trait]
impl EmailProvider for SimulatedEmailProvider {
    async fn send(&self, email: &EmailMessage) -> Result<(), ProviderError> {
        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "[SIMULATED] Email delivery skipped, no SMTP credentials"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}

/// Mock email provider for testing
pub struct MockEmailProvider {
    succeed: bool,
    sent: Mutex<Vec<EmailMessage>>,
}

impl MockEmailProvider {
    pub fn new(succeed: bool) -> Self {
        Self {
            succeed,
            sent: Mutex::new(Vec::new()),
        }
    }

    /// Every message handed to `send`, including ones that were rejected.
    pub fn sent(&self) -> Vec<EmailMessage> {
        self.sent
            .lock()
            .map(|sent| sent.clone())
            .unwrap_or_default()
    }

    pub fn send_count(&self) -> usize {
        self.sent().len()
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(&self, email: &EmailMessage) -> Result<(), ProviderError> {
        if let Ok(mut sent) = self.sent.lock() {
            sent.push(email.clone());
        }

        if !self.succeed {
            return Err(ProviderError::SendFailed(
                "Mock email provider rejected the message".to_string(),
            ));
        }

        tracing::info!(
            to = %email.to,
            subject = %email.subject,
            "[MOCK] Email would be sent"
        );

        Ok(())
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
