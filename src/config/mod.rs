//! Environment-backed configuration.
//!
//! Everything except the inference token has a default. Override with `VERITY_*`
//! environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_CLASSIFY_TIMEOUT_SECS, DEFAULT_EVIDENCE_CACHE_CAPACITY, DEFAULT_EVIDENCE_TIMEOUT_SECS,
    DEFAULT_MAX_CONCURRENCY, DEFAULT_RETRY_ATTEMPTS, DEFAULT_RETRY_BACKOFF_MS,
};

/// Default classification endpoint; the model id is appended as a path segment.
pub const DEFAULT_INFERENCE_URL: &str = "https://router.huggingface.co/hf-inference/models";

/// Default evidence endpoint; the query is appended as a title path segment.
pub const DEFAULT_EVIDENCE_URL: &str = "https://en.wikipedia.org/api/rest_v1/page/summary";

/// Engine and server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read overrides on top of defaults.
#[derive(Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Bearer token for the classification endpoint (`HF_API_TOKEN`).
    pub api_token: String,

    /// Classification base URL.
    pub inference_url: String,

    /// Evidence base URL.
    pub evidence_url: String,

    /// Per-request classification timeout. Default: 60s.
    pub classify_timeout: Duration,

    /// Per-lookup evidence timeout. Default: 10s.
    pub evidence_timeout: Duration,

    /// Max entries in the evidence LRU. Default: `128`.
    pub evidence_cache_capacity: u64,

    /// Total classification attempts per call. Default: `3`.
    pub retry_attempts: u32,

    /// Fixed delay between classification attempts. Default: 3s.
    pub retry_backoff: Duration,

    /// Sentences or claims in flight per request. Default: `8`.
    pub max_concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            api_token: String::new(),
            inference_url: DEFAULT_INFERENCE_URL.to_string(),
            evidence_url: DEFAULT_EVIDENCE_URL.to_string(),
            classify_timeout: Duration::from_secs(DEFAULT_CLASSIFY_TIMEOUT_SECS),
            evidence_timeout: Duration::from_secs(DEFAULT_EVIDENCE_TIMEOUT_SECS),
            evidence_cache_capacity: DEFAULT_EVIDENCE_CACHE_CAPACITY,
            retry_attempts: DEFAULT_RETRY_ATTEMPTS,
            retry_backoff: Duration::from_millis(DEFAULT_RETRY_BACKOFF_MS),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
        }
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("port", &self.port)
            .field("bind_addr", &self.bind_addr)
            .field("api_token", &"<redacted>")
            .field("inference_url", &self.inference_url)
            .field("evidence_url", &self.evidence_url)
            .field("classify_timeout", &self.classify_timeout)
            .field("evidence_timeout", &self.evidence_timeout)
            .field("evidence_cache_capacity", &self.evidence_cache_capacity)
            .field("retry_attempts", &self.retry_attempts)
            .field("retry_backoff", &self.retry_backoff)
            .field("max_concurrency", &self.max_concurrency)
            .finish()
    }
}

impl Config {
    const ENV_API_TOKEN: &'static str = "HF_API_TOKEN";
    const ENV_PORT: &'static str = "VERITY_PORT";
    const ENV_BIND_ADDR: &'static str = "VERITY_BIND_ADDR";
    const ENV_INFERENCE_URL: &'static str = "VERITY_INFERENCE_URL";
    const ENV_EVIDENCE_URL: &'static str = "VERITY_EVIDENCE_URL";
    const ENV_CLASSIFY_TIMEOUT: &'static str = "VERITY_CLASSIFY_TIMEOUT_SECS";
    const ENV_EVIDENCE_TIMEOUT: &'static str = "VERITY_EVIDENCE_TIMEOUT_SECS";
    const ENV_CACHE_CAPACITY: &'static str = "VERITY_EVIDENCE_CACHE_CAPACITY";
    const ENV_RETRY_ATTEMPTS: &'static str = "VERITY_RETRY_ATTEMPTS";
    const ENV_RETRY_BACKOFF: &'static str = "VERITY_RETRY_BACKOFF_MS";
    const ENV_MAX_CONCURRENCY: &'static str = "VERITY_MAX_CONCURRENCY";

    /// Loads configuration from environment variables (falling back to defaults).
    ///
    /// Fails when `HF_API_TOKEN` is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_token = Self::parse_required_from_env(Self::ENV_API_TOKEN)?;
        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let inference_url =
            Self::parse_string_from_env(Self::ENV_INFERENCE_URL, defaults.inference_url);
        let evidence_url =
            Self::parse_string_from_env(Self::ENV_EVIDENCE_URL, defaults.evidence_url);
        let classify_timeout = Duration::from_secs(Self::parse_number_from_env(
            Self::ENV_CLASSIFY_TIMEOUT,
            defaults.classify_timeout.as_secs(),
        )?);
        let evidence_timeout = Duration::from_secs(Self::parse_number_from_env(
            Self::ENV_EVIDENCE_TIMEOUT,
            defaults.evidence_timeout.as_secs(),
        )?);
        let evidence_cache_capacity = Self::parse_number_from_env(
            Self::ENV_CACHE_CAPACITY,
            defaults.evidence_cache_capacity,
        )?;
        let retry_attempts =
            Self::parse_number_from_env(Self::ENV_RETRY_ATTEMPTS, defaults.retry_attempts)?;
        let retry_backoff = Duration::from_millis(Self::parse_number_from_env(
            Self::ENV_RETRY_BACKOFF,
            defaults.retry_backoff.as_millis() as u64,
        )?);
        let max_concurrency =
            Self::parse_number_from_env(Self::ENV_MAX_CONCURRENCY, defaults.max_concurrency)?;

        Ok(Self {
            port,
            bind_addr,
            api_token,
            inference_url,
            evidence_url,
            classify_timeout,
            evidence_timeout,
            evidence_cache_capacity,
            retry_attempts,
            retry_backoff,
            max_concurrency,
        })
    }

    /// Validates basic invariants. Does not touch the network.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_RETRY_ATTEMPTS,
                value: "0".to_string(),
            });
        }
        if self.evidence_cache_capacity == 0 {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_CACHE_CAPACITY,
                value: "0".to_string(),
            });
        }
        if self.max_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_MAX_CONCURRENCY,
                value: "0".to_string(),
            });
        }

        for url in [&self.inference_url, &self.evidence_url] {
            reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidUrl {
                value: url.clone(),
                reason: e.to_string(),
            })?;
        }

        if self.api_token.trim().is_empty() {
            return Err(ConfigError::MissingEnvVar {
                name: Self::ENV_API_TOKEN,
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_required_from_env(var_name: &'static str) -> Result<String, ConfigError> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or(ConfigError::MissingEnvVar { name: var_name })
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_number_from_env<T: std::str::FromStr>(
        var_name: &'static str,
        default: T,
    ) -> Result<T, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidValue {
                    name: var_name,
                    value,
                }),
            Err(_) => Ok(default),
        }
    }
}
