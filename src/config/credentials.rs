//! Credential resolution from configuration.
//!
//! This module provides secure handling of the API key resolved from the
//! config or the environment at runtime.

use super::types::ApiConfig;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Status of API key resolution.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// API key is missing or empty.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
}

impl ApiConfig {
    /// Resolve the API key from config, then from `api_key_env`.
    ///
    /// Not cached, so a changed environment is picked up on the next client.
    pub fn resolve_credential(&self) -> CredentialStatus {
        if let Some(ref key) = self.api_key {
            if !key.is_empty() {
                return CredentialStatus::Configured(SecureString::new(key.clone()));
            }
        }

        match std::env::var(&self.api_key_env) {
            Ok(key) if !key.is_empty() => CredentialStatus::Configured(SecureString::new(key)),
            _ => CredentialStatus::Unconfigured {
                reason: format!("api_key is not set and {} is empty", self.api_key_env),
            },
        }
    }
}
