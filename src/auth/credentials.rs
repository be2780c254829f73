//! Credential management for Binance API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::BinanceError;

/// Default environment variable holding the API key.
pub const API_KEY_ENV: &str = "BINANCE_API_KEY";
/// Default environment variable holding the secret key.
pub const SECRET_KEY_ENV: &str = "BINANCE_SECRET_KEY";

/// API credentials: the key sent in `X-MBX-APIKEY` and the secret used for signing.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret key.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Get the secret key for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

impl CredentialsProvider for Credentials {
    fn get_credentials(&self) -> &Credentials {
        self
    }
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone, Debug)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(api_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(api_key, secret_key),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `BINANCE_API_KEY` and `BINANCE_SECRET_KEY`.
#[derive(Debug)]
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from the default environment variables.
    pub fn from_env() -> Result<Self, BinanceError> {
        Self::from_env_vars(API_KEY_ENV, SECRET_KEY_ENV)
    }

    /// Create credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, BinanceError> {
        let api_key = std::env::var(key_var)
            .map_err(|_| BinanceError::Auth(format!("Environment variable {key_var} not set")))?;
        let secret_key = std::env::var(secret_var)
            .map_err(|_| BinanceError::Auth(format!("Environment variable {secret_var} not set")))?;

        Ok(Self {
            credentials: Credentials::new(api_key, secret_key),
        })
    }

    /// Try to create credentials from the default environment variables.
    ///
    /// Returns `None` if either variable is missing or empty.
    pub fn try_from_env() -> Option<Self> {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|v| !v.is_empty())?;
        let secret_key = std::env::var(SECRET_KEY_ENV).ok().filter(|v| !v.is_empty())?;

        Some(Self {
            credentials: Credentials::new(api_key, secret_key),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("key", "secret");
        let creds = provider.get_credentials();
        assert_eq!(creds.api_key, "key");
        assert_eq!(creds.expose_secret(), "secret");
    }

    #[test]
    fn test_env_credentials_missing_var() {
        let err = EnvCredentials::from_env_vars(
            "BINANCE_TEST_SURELY_UNSET_KEY",
            "BINANCE_TEST_SURELY_UNSET_SECRET",
        )
        .unwrap_err();
        assert!(matches!(err, BinanceError::Auth(msg) if msg.contains("BINANCE_TEST_SURELY_UNSET_KEY")));
    }
}
