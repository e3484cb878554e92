use std::time::Duration;

use clap::ValueEnum;

use crate::utils::constants::{AVAILABILITY_URL, DEFAULT_POLL_INTERVAL_SECS, DEFAULT_USER_AGENT, TOKEN_URL};

/// ================================
/// Agent-wide settings
/// ================================
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub token_url: String,
    pub availability_url: String,
    /// sent as `User-Agent` on both requests
    pub user_agent: String,
    /// time between the starts of two polls
    pub poll_interval: Duration,
    /// `None` keeps requests unbounded
    pub request_timeout: Option<Duration>,
    pub logging: LoggingConfig,
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self {
            token_url: TOKEN_URL.to_owned(),
            availability_url: AVAILABILITY_URL.to_owned(),
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            request_timeout: None,
            logging: LoggingConfig::default(),
        }
    }
}

/// ================================
/// Logging
/// ================================
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String, // allowed: trace, debug, info, warn, error
    pub format: LogFormat,
}

impl LoggingConfig {
    pub fn new(level: String, format: LogFormat) -> Self {
        Self { level, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::new("info".to_owned(), LogFormat::Compact)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Compact,
}
