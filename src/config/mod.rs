//! Configuration for the report client.
//!
//! Loaded from `~/.config/foia-report/config.toml`; a missing file yields
//! the defaults.

mod credentials;
mod loader;
mod types;

pub use credentials::{CredentialStatus, SecureString};
pub use loader::ConfigError;
pub use types::{ApiConfig, Config, ReportConfig, MAX_PAGE_LIMIT};
