//! Process configuration read from the environment.

use chrono::Duration;
use lexiflow_core::GlobalSettings;

use crate::services::sessions::DEFAULT_SESSION_TTL_MINUTES;

/// Server configuration.
///
/// Env vars (all optional, `.env` is honored):
/// - HOST: bind address (default `0.0.0.0`)
/// - PORT: bind port (default `3000`)
/// - RUST_LOG: tracing filter (default `info`)
/// - LEXIFLOW_MAX_TYPO_DISTANCE / LEXIFLOW_MIN_TYPO_LENGTH / LEXIFLOW_POINTS_PER_ANSWER:
///   initial global grading settings
/// - LEXIFLOW_SESSION_TTL_MINUTES: idle minutes before a session is dropped (default `60`)
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub log_filter: String,
    pub grading: GlobalSettings,
    pub session_ttl: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            log_filter: "info".to_string(),
            grading: GlobalSettings::default(),
            session_ttl: Duration::minutes(DEFAULT_SESSION_TTL_MINUTES),
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(value) => value
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a port number, got '{}'", value))?,
            None => defaults.port,
        };

        let mut grading = defaults.grading;
        if let Some(value) = lookup("LEXIFLOW_MAX_TYPO_DISTANCE") {
            grading.max_typo_distance = parse_setting("LEXIFLOW_MAX_TYPO_DISTANCE", &value)?;
        }
        if let Some(value) = lookup("LEXIFLOW_MIN_TYPO_LENGTH") {
            grading.min_typo_length = parse_setting("LEXIFLOW_MIN_TYPO_LENGTH", &value)?;
        }
        if let Some(value) = lookup("LEXIFLOW_POINTS_PER_ANSWER") {
            grading.points_per_answer = parse_setting("LEXIFLOW_POINTS_PER_ANSWER", &value)?;
        }

        let session_ttl = match lookup("LEXIFLOW_SESSION_TTL_MINUTES") {
            Some(value) => {
                let minutes: u32 = parse_setting("LEXIFLOW_SESSION_TTL_MINUTES", &value)?;
                Duration::minutes(i64::from(minutes))
            }
            None => defaults.session_ttl,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            log_filter: lookup("RUST_LOG").unwrap_or(defaults.log_filter),
            grading,
            session_ttl,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_setting<T: std::str::FromStr>(key: &str, value: &str) -> anyhow::Result<T> {
    value
        .parse()
        .map_err(|_| anyhow::anyhow!("{} must be a non-negative integer, got '{}'", key, value))
}
