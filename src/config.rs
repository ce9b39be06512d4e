//! Configuration for the gateway and the reference backend service.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`). Parsing goes through a lookup
//! function so it can be exercised without touching the process
//! environment.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::service::LatencyPolicy;

/// Log output format for the `tracing` subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable single-line output.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "pretty" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

/// Gateway configuration.
///
/// Loaded once at startup via [`GatewayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:8080`).
    pub listen_addr: SocketAddr,

    /// Root URL of the backend employee store.
    pub backend_url: String,

    /// Timeout in milliseconds for each downstream request.
    pub backend_timeout_ms: u64,

    /// Upper bound in seconds for handling one inbound request,
    /// injected delay included.
    pub request_timeout_secs: u64,

    /// Master switch for latency injection on the List path.
    pub latency_enabled: bool,

    /// Length of one injected delay in milliseconds.
    pub latency_delay_ms: u64,

    /// A List call is delayed when its sample is divisible by this.
    pub latency_divisor: u32,

    /// Seed for a reproducible sampling sequence. Unset means thread RNG.
    pub latency_seed: Option<u64>,

    /// Log output format.
    pub log_format: LogFormat,
}

impl GatewayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, std::net::AddrParseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("LISTEN_ADDR")
            .unwrap_or_else(|| "0.0.0.0:8080".to_string())
            .parse()?;

        let backend_url =
            lookup("BACKEND_URL").unwrap_or_else(|| "http://localhost:9000".to_string());

        Ok(Self {
            listen_addr,
            backend_url,
            backend_timeout_ms: parse_key(&lookup, "BACKEND_TIMEOUT_MS", 5_000),
            request_timeout_secs: parse_key(&lookup, "REQUEST_TIMEOUT_SECS", 30),
            latency_enabled: parse_bool(&lookup, "LATENCY_INJECTION_ENABLED", true),
            latency_delay_ms: parse_key(&lookup, "LATENCY_INJECTION_DELAY_MS", 3_000),
            latency_divisor: parse_key(&lookup, "LATENCY_INJECTION_DIVISOR", 3),
            latency_seed: lookup("LATENCY_INJECTION_SEED").and_then(|v| v.parse().ok()),
            log_format: parse_key(&lookup, "LOG_FORMAT", LogFormat::Text),
        })
    }

    /// Downstream request timeout.
    #[must_use]
    pub const fn backend_timeout(&self) -> Duration {
        Duration::from_millis(self.backend_timeout_ms)
    }

    /// Whole-request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Latency injection settings for the List path.
    #[must_use]
    pub fn latency_policy(&self) -> LatencyPolicy {
        LatencyPolicy {
            enabled: self.latency_enabled,
            delay: Duration::from_millis(self.latency_delay_ms),
            divisor: self.latency_divisor,
            ..LatencyPolicy::default()
        }
    }
}

/// Configuration of the reference backend service binary.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Socket address to bind to (e.g. `0.0.0.0:9000`).
    pub listen_addr: SocketAddr,

    /// Log output format.
    pub log_format: LogFormat,
}

impl StoreConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `EMPLOYEE_SERVICE_ADDR` cannot be parsed.
    pub fn from_env() -> Result<Self, std::net::AddrParseError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `EMPLOYEE_SERVICE_ADDR` cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, std::net::AddrParseError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("EMPLOYEE_SERVICE_ADDR")
            .unwrap_or_else(|| "0.0.0.0:9000".to_string())
            .parse()?;

        Ok(Self {
            listen_addr,
            log_format: parse_key(&lookup, "LOG_FORMAT", LogFormat::Text),
        })
    }
}

/// Parses a key as `T`, returning `default` on missing or invalid values.
fn parse_key<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    lookup(key)
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Parses a key as a boolean. Accepts `"true"`, `"1"`, `"false"`, `"0"`
/// (case-insensitive). Returns `default` otherwise.
fn parse_bool<F>(lookup: &F, key: &str, default: bool) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.to_ascii_lowercase()).as_deref() {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => default,
    }
}
