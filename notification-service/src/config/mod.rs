use serde::Deserialize;
use service_core::config as core_config;
use service_core::config::env_or;
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub smtp: SmtpConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub from_email: String,
    pub from_name: String,
}

impl SmtpConfig {
    /// Both credentials are required for real delivery; otherwise emails are
    /// only simulated.
    pub fn is_configured(&self) -> bool {
        !self.user.is_empty() && !self.password.is_empty()
    }

    /// `"Name <address>"` form used for the `From` header.
    pub fn sender(&self) -> String {
        format!("{} <{}>", self.from_name, self.from_email)
    }

    pub fn from_env() -> Self {
        let password = match env_or("SMTP_PASS", "") {
            pass if pass.is_empty() => env_or("SMTP_PASSWORD", ""),
            pass => pass,
        };

        SmtpConfig {
            host: env_or("SMTP_HOST", "smtp.gmail.com"),
            port: env_or("SMTP_PORT", "587").parse().unwrap_or(587),
            user: env_or("SMTP_USER", ""),
            password,
            from_email: env_or("FROM_EMAIL", "noreply@formulario.com"),
            from_name: env_or("FROM_NAME", "Sistema de Empleados"),
        }
    }
}

impl NotificationConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;
        let smtp = SmtpConfig::from_env();

        if !smtp.is_configured() {
            tracing::warn!(
                "SMTP_USER and SMTP_PASS are not set; notifications will only be simulated"
            );
        }

        Ok(NotificationConfig { common, smtp })
    }
}
