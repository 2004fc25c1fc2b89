use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_port() -> u16 {
    8080
}

impl Config {
    /// Loads the listen settings from `configuration.*` (optional) and the
    /// process environment, after reading a `.env` file if one exists.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(
                config::Environment::default()
                    .try_parsing(true)
                    .ignore_empty(true),
            )
            .build()?;

        Ok(config.try_deserialize()?)
    }
}

/// Reads `key` from the environment, treating an empty value as unset.
pub fn env_or(key: &str, default: &str) -> String {
    match std::env::var(key) {
        Ok(val) if !val.is_empty() => val,
        _ => default.to_string(),
    }
}
