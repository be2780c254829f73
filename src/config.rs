//! Client configuration.
//!
//! [`ClientConfig`] holds everything needed to build a
//! [`SpotRestClient`](crate::spot::rest::SpotRestClient): the key pair, the
//! base URL (production or testnet), an optional proxy and the request timeout.
//! It can be filled in code, deserialized from a config file, or read from the
//! environment with [`ClientConfig::from_env`].

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer};

use crate::auth::{API_KEY_ENV, Credentials, SECRET_KEY_ENV};
use crate::error::BinanceError;
use crate::spot::rest::endpoints::{BINANCE_BASE_URL, BINANCE_TESTNET_URL};

/// Default request timeout in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "BINANCE_BASE_URL";
/// Environment variable selecting the testnet (`1` or `true`).
pub const TESTNET_ENV: &str = "BINANCE_TESTNET";
/// Environment variable holding a proxy URL.
pub const PROXY_URL_ENV: &str = "BINANCE_PROXY_URL";
/// Environment variable holding the timeout in milliseconds.
pub const TIMEOUT_MS_ENV: &str = "BINANCE_TIMEOUT_MS";

/// Which Binance deployment to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// `https://api.binance.com`
    #[default]
    Production,
    /// `https://testnet.binance.vision`
    Testnet,
}

impl Environment {
    /// REST base URL for this environment.
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Production => BINANCE_BASE_URL,
            Environment::Testnet => BINANCE_TESTNET_URL,
        }
    }
}

/// Settings for a Binance REST client.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// API key sent in `X-MBX-APIKEY`.
    pub api_key: Option<String>,
    /// Secret key used for request signing.
    #[serde(deserialize_with = "deserialize_secret")]
    pub secret_key: Option<SecretString>,
    /// REST base URL.
    pub base_url: String,
    /// Proxy for all requests, e.g. `http://127.0.0.1:7890`.
    pub proxy_url: Option<String>,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
    /// Retries for transient transport failures. Zero by default.
    pub max_retries: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            secret_key: None,
            base_url: BINANCE_BASE_URL.to_string(),
            proxy_url: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_retries: 0,
        }
    }
}

impl ClientConfig {
    /// Create a configuration for the given environment without credentials.
    pub fn new(environment: Environment) -> Self {
        Self {
            base_url: environment.base_url().to_string(),
            ..Self::default()
        }
    }

    /// Set the key pair.
    pub fn with_credentials(
        mut self,
        api_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> Self {
        self.api_key = Some(api_key.into());
        self.secret_key = Some(SecretString::from(secret_key.into()));
        self
    }

    /// Set the proxy URL.
    pub fn with_proxy(mut self, proxy_url: impl Into<String>) -> Self {
        self.proxy_url = Some(proxy_url.into());
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = timeout.as_millis() as u64;
        self
    }

    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Credentials, when both key and secret are configured.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.api_key, &self.secret_key) {
            (Some(key), Some(secret)) => Some(Credentials::new(key.clone(), secret.expose_secret())),
            _ => None,
        }
    }

    /// Read the configuration from `BINANCE_*` environment variables.
    ///
    /// | variable | meaning |
    /// |----------|---------|
    /// | `BINANCE_API_KEY` / `BINANCE_SECRET_KEY` | key pair |
    /// | `BINANCE_BASE_URL` | base URL, overrides `BINANCE_TESTNET` |
    /// | `BINANCE_TESTNET` | `1`/`true` selects the testnet |
    /// | `BINANCE_PROXY_URL` | proxy for all requests |
    /// | `BINANCE_TIMEOUT_MS` | request timeout |
    pub fn from_env() -> Result<Self, BinanceError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, BinanceError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let testnet = var(TESTNET_ENV)
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);
        let environment = if testnet {
            Environment::Testnet
        } else {
            Environment::Production
        };

        let timeout_ms = match var(TIMEOUT_MS_ENV) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                BinanceError::Config(format!("{TIMEOUT_MS_ENV} must be milliseconds: {e}"))
            })?,
            None => DEFAULT_TIMEOUT_MS,
        };

        Ok(Self {
            api_key: var(API_KEY_ENV),
            secret_key: var(SECRET_KEY_ENV).map(SecretString::from),
            base_url: var(BASE_URL_ENV).unwrap_or_else(|| environment.base_url().to_string()),
            proxy_url: var(PROXY_URL_ENV),
            timeout_ms,
            max_retries: 0,
        })
    }
}

fn deserialize_secret<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.map(SecretString::from))
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_key", &self.api_key)
            .field("secret_key", &self.secret_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("proxy_url", &self.proxy_url)
            .field("timeout_ms", &self.timeout_ms)
            .field("max_retries", &self.max_retries)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.binance.com");
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.max_retries, 0);
        assert!(config.credentials().is_none());
    }

    #[test]
    fn test_testnet_environment() {
        let config = ClientConfig::new(Environment::Testnet);
        assert_eq!(config.base_url, "https://testnet.binance.vision");
    }

    #[test]
    fn test_from_lookup_full() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("BINANCE_API_KEY", "key"),
            ("BINANCE_SECRET_KEY", "secret"),
            ("BINANCE_TESTNET", "true"),
            ("BINANCE_PROXY_URL", "http://127.0.0.1:7890"),
            ("BINANCE_TIMEOUT_MS", "2500"),
        ]))
        .unwrap();

        assert_eq!(config.base_url, "https://testnet.binance.vision");
        assert_eq!(config.proxy_url.as_deref(), Some("http://127.0.0.1:7890"));
        assert_eq!(config.timeout(), Duration::from_millis(2500));
        let creds = config.credentials().unwrap();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
    }

    #[test]
    fn test_from_lookup_base_url_overrides_testnet() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("BINANCE_TESTNET", "1"),
            ("BINANCE_BASE_URL", "https://api3.binance.com"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "https://api3.binance.com");
    }

    #[test]
    fn test_from_lookup_empty_values_ignored() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("BINANCE_API_KEY", ""),
            ("BINANCE_PROXY_URL", "  "),
        ]))
        .unwrap();
        assert!(config.api_key.is_none());
        assert!(config.proxy_url.is_none());
    }

    #[test]
    fn test_from_lookup_bad_timeout() {
        let err = ClientConfig::from_lookup(lookup(&[("BINANCE_TIMEOUT_MS", "ten")])).unwrap_err();
        assert!(matches!(err, BinanceError::Config(msg) if msg.contains("BINANCE_TIMEOUT_MS")));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: ClientConfig = serde_json::from_str(
            r#"{"api_key":"k","secret_key":"s","proxy_url":"socks5://localhost:1080"}"#,
        )
        .unwrap();
        assert_eq!(config.base_url, "https://api.binance.com");
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert!(config.credentials().is_some());
    }

    #[test]
    fn test_debug_redacts_secret() {
        let config = ClientConfig::default().with_credentials("visible_key", "hidden_secret");
        let debug = format!("{:?}", config);
        assert!(debug.contains("visible_key"));
        assert!(!debug.contains("hidden_secret"));
    }
}
