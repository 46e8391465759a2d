//! Endpoint and timeout settings for reaching a test chain node.

use std::time::Duration;

use crate::error::CoreError;

/// Ganache's default JSON-RPC listener.
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:7545";
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const RPC_URL_ENV: &str = "CHAINCTL_RPC_URL";
pub const CONNECT_TIMEOUT_ENV: &str = "CHAINCTL_CONNECT_TIMEOUT_SECS";
pub const REQUEST_TIMEOUT_ENV: &str = "CHAINCTL_REQUEST_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    pub url: String,
    /// Upper bound on establishing the TCP (and TLS) connection.
    pub connect_timeout: Duration,
    /// Upper bound on a whole request, from connect to the end of the body.
    pub request_timeout: Duration,
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_RPC_URL.to_owned(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

impl NodeConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Build a config from `CHAINCTL_*` environment variables, falling back
    /// to the defaults for anything unset.
    pub fn from_env() -> Result<Self, CoreError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CoreError> {
        let mut config = Self::default();
        if let Some(url) = lookup(RPC_URL_ENV).filter(|url| !url.trim().is_empty()) {
            config.url = url.trim().to_owned();
        }
        if let Some(raw) = lookup(CONNECT_TIMEOUT_ENV) {
            config.connect_timeout = parse_timeout_secs(CONNECT_TIMEOUT_ENV, &raw)?;
        }
        if let Some(raw) = lookup(REQUEST_TIMEOUT_ENV) {
            config.request_timeout = parse_timeout_secs(REQUEST_TIMEOUT_ENV, &raw)?;
        }
        Ok(config)
    }
}

fn parse_timeout_secs(key: &str, raw: &str) -> Result<Duration, CoreError> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|e| CoreError::InvalidConfig(format!("{key}=`{raw}` is not a number: {e}")))?;
    if secs == 0 {
        return Err(CoreError::InvalidConfig(format!(
            "{key} must be at least 1 second"
        )));
    }
    Ok(Duration::from_secs(secs))
}
