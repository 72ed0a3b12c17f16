//! Decoder configuration
//!
//! Loads configuration from environment variables, after reading a `.env`
//! file if one is present.

use modlog_decode::ReferencePolicy;
use std::env;

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Settings for one decode run
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DecodeConfig {
    pub env: Environment,
    /// What to do with target users missing from the user table
    pub reference_policy: ReferencePolicy,
    /// Overrides the environment's log format when set
    pub log_json: Option<bool>,
}

impl DecodeConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable is set to a value it cannot take
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&'static str) -> Option<String>,
    {
        let env = match lookup("MODLOG_ENV") {
            Some(raw) => Environment::from_name(&raw)
                .ok_or(ConfigError::InvalidValue("MODLOG_ENV", raw))?,
            None => Environment::default(),
        };

        let reference_policy = match lookup("MODLOG_REFERENCE_POLICY") {
            Some(raw) => ReferencePolicy::from_name(&raw)
                .ok_or(ConfigError::InvalidValue("MODLOG_REFERENCE_POLICY", raw))?,
            None => ReferencePolicy::default(),
        };

        let log_json = lookup("MODLOG_LOG_JSON")
            .map(|raw| parse_bool(&raw).ok_or(ConfigError::InvalidValue("MODLOG_LOG_JSON", raw)))
            .transpose()?;

        Ok(Self {
            env,
            reference_policy,
            log_json,
        })
    }
}

fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
