//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Every variable is optional; the defaults serve short links on
//! `http://localhost:8080`.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `BASE_URL` - Prefix of returned short URLs (default: `http://localhost:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `REQUEST_TIMEOUT_MS` - Per-request deadline in milliseconds (default: 30000)

use anyhow::Result;
use std::env;
use std::time::Duration;

const DEFAULT_LISTEN: &str = "0.0.0.0:8080";
const DEFAULT_BASE_URL: &str = "http://localhost:8080";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Deadline given to each request's cancellation context.
    pub request_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `REQUEST_TIMEOUT_MS` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let base_url = env::var("BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let request_timeout_ms = match env::var("REQUEST_TIMEOUT_MS") {
            Ok(v) => v.parse().map_err(|_| {
                anyhow::anyhow!("REQUEST_TIMEOUT_MS must be a number of milliseconds, got '{v}'")
            })?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_MS,
        };

        Ok(Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            request_timeout_ms,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `base_url` is not an `http://` or `https://` URL
    /// - `request_timeout_ms` is zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.request_timeout_ms == 0 {
            anyhow::bail!("REQUEST_TIMEOUT_MS must be greater than 0");
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Request timeout: {}ms", self.request_timeout_ms);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable fails to parse or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "BASE_URL",
        "RUST_LOG",
        "LOG_FORMAT",
        "REQUEST_TIMEOUT_MS",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment run serially due to #[serial]
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_default_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        config.base_url = "localhost:8080".to_string();
        assert!(config.validate().is_err());

        config.base_url = "https://sho.rt".to_string();
        config.request_timeout_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("BASE_URL", "https://sho.rt");
            env::set_var("LOG_FORMAT", "json");
            env::set_var("REQUEST_TIMEOUT_MS", "250");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.base_url, "https://sho.rt");
        assert_eq!(config.log_format, "json");
        assert_eq!(config.request_timeout(), Duration::from_millis(250));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_bad_timeout() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("REQUEST_TIMEOUT_MS", "soon");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }
}
