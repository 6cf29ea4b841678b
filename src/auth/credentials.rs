//! Credential management for mite API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

/// Default environment variable holding the account name.
const ACCOUNT_VAR: &str = "MITE_ACCOUNT";
/// Default environment variable holding the API key.
const API_KEY_VAR: &str = "MITE_API_KEY";

/// API credentials containing the account name and API key.
#[derive(Clone)]
pub struct Credentials {
    /// The mite account name (the subdomain of `<account>.mite.de`)
    pub account_name: String,
    /// The user's API key
    api_key: SecretString,
}

impl Credentials {
    /// Create new credentials from an account name and API key.
    pub fn new(account_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            account_name: account_name.into(),
            api_key: SecretString::from(api_key.into()),
        }
    }

    /// Get the API key for the request header.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("account_name", &self.account_name)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager or a config file.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(account_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(account_name, api_key),
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
/// By default, reads from `MITE_ACCOUNT` and `MITE_API_KEY`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Create credentials from default environment variables.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env() -> Self {
        Self::from_env_vars(ACCOUNT_VAR, API_KEY_VAR)
    }

    /// Create credentials from custom environment variable names.
    ///
    /// # Panics
    ///
    /// Panics if the environment variables are not set.
    pub fn from_env_vars(account_var: &str, api_key_var: &str) -> Self {
        let account_name = std::env::var(account_var)
            .unwrap_or_else(|_| panic!("Environment variable {account_var} not set"));
        let api_key = std::env::var(api_key_var)
            .unwrap_or_else(|_| panic!("Environment variable {api_key_var} not set"));

        Self {
            credentials: Credentials::new(account_name, api_key),
        }
    }

    /// Try to create credentials from default environment variables.
    ///
    /// Returns `None` if the environment variables are not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(ACCOUNT_VAR, API_KEY_VAR)
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` if the environment variables are not set.
    pub fn try_from_env_vars(account_var: &str, api_key_var: &str) -> Option<Self> {
        let account_name = std::env::var(account_var).ok()?;
        let api_key = std::env::var(api_key_var).ok()?;

        Some(Self {
            credentials: Credentials::new(account_name, api_key),
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
        let creds = Credentials::new("acme", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("acme"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_static_credentials() {
        let provider = StaticCredentials::new("acme", "key123");
        let creds = provider.get_credentials();
        assert_eq!(creds.account_name, "acme");
        assert_eq!(creds.expose_api_key(), "key123");
    }

    #[test]
    fn test_try_from_env_missing() {
        assert!(
            EnvCredentials::try_from_env_vars(
                "MITE_TEST_SURELY_UNSET_ACCOUNT",
                "MITE_TEST_SURELY_UNSET_KEY"
            )
            .is_none()
        );
    }
}
