use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::client::Credentials;
use crate::error::{Error, Result};

const DEFAULT_API_KEY_HEADER: &str = "x-api-key";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub base_url: String,

    // API key auth (preferred when both are set)
    pub api_key: Option<Secret<String>>,
    pub api_key_header: String,

    // Bearer auth
    pub bearer_token: Option<Secret<String>>,

    // Applied by the reqwest transport; no timeout when unset
    pub timeout_secs: Option<u64>,
}

impl Config {
    pub fn from_env() -> std::result::Result<Self, config::ConfigError> {
        // Load .env file if it exists (for local development)
        let _ = dotenvy::dotenv();

        let config = config::Config::builder()
            .add_source(config::Environment::default().separator("__"))
            .build()?;

        Self::from_source(&config)
    }

    fn from_source(config: &config::Config) -> std::result::Result<Self, config::ConfigError> {
        Ok(Self {
            base_url: config.get("liquidity_base_url")?,

            api_key: config
                .get::<String>("liquidity_api_key")
                .ok()
                .map(Secret::new),
            api_key_header: config
                .get("liquidity_api_key_header")
                .unwrap_or_else(|_| DEFAULT_API_KEY_HEADER.to_string()),

            bearer_token: config
                .get::<String>("liquidity_bearer_token")
                .ok()
                .map(Secret::new),

            timeout_secs: config.get("liquidity_timeout_secs").ok(),
        })
    }

    /// Picks the credential to send, API key first.
    pub fn credentials(&self) -> Result<Credentials> {
        if let Some(key) = &self.api_key {
            return Credentials::api_key_with_header(
                &self.api_key_header,
                key.expose_secret().as_str(),
            );
        }

        if let Some(token) = &self.bearer_token {
            return Ok(Credentials::Bearer(token.clone()));
        }

        Err(Error::Config(config::ConfigError::Message(
            "either liquidity_api_key or liquidity_bearer_token must be set".to_string(),
        )))
    }
}
