use notification_service::config::{NotificationConfig, SmtpConfig};
use notification_service::services::{EmailProvider, MockEmailProvider};
use notification_service::startup::Application;
use service_core::config::Config as CoreConfig;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub provider: Option<Arc<MockEmailProvider>>,
}

pub fn test_config(user: &str, password: &str) -> NotificationConfig {
    NotificationConfig {
        // Use random port for testing (port 0)
        common: CoreConfig { port: 0 },
        smtp: SmtpConfig {
            host: "smtp.test.local".to_string(),
            port: 587,
            user: user.to_string(),
            password: password.to_string(),
            from_email: "test@example.com".to_string(),
            from_name: "Test Service".to_string(),
        },
    }
}

impl TestApp {
    /// No SMTP credentials: delivery is simulated.
    pub async fn spawn() -> Self {
        let app = Application::build(test_config("", ""))
            .await
            .expect("Failed to build test application");

        Self::start(app, None).await
    }

    /// Credentials configured, delivery goes to a mock that succeeds or fails.
    pub async fn spawn_with_mock(succeed: bool) -> Self {
        let provider = Arc::new(MockEmailProvider::new(succeed));
        let app = Application::build_with_provider(
            test_config("test", "test"),
            provider.clone() as Arc<dyn EmailProvider>,
        )
        .await
        .expect("Failed to build test application");

        Self::start(app, Some(provider)).await
    }

    async fn start(app: Application, provider: Option<Arc<MockEmailProvider>>) -> Self {
        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/notifications/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp { address, provider }
    }

    pub async fn send(&self, body: serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(format!("{}/api/notifications/send", self.address))
            .json(&body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub fn sent_count(&self) -> usize {
        self.provider
            .as_ref()
            .map(|provider| provider.send_count())
            .unwrap_or(0)
    }
}
