use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Largest page size the API accepts.
pub const MAX_PAGE_LIMIT: usize = 50;

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub report: ReportConfig,
}

/// Connection settings for the FOIA JSON:API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API (e.g., "https://api.foia.gov/api").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Report fetch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Page size for quarterly report data (default: 5).
    #[serde(default = "default_report_limit")]
    pub report_limit: usize,
    /// Page size for reference data such as agency components (default: 50).
    #[serde(default = "default_reference_limit")]
    pub reference_limit: usize,
    /// Path to the `report_data_map.json` data type catalog.
    #[serde(default = "default_data_types_path")]
    pub data_types_path: PathBuf,
}

fn default_base_url() -> String {
    "https://api.foia.gov/api".to_string()
}

fn default_api_key_env() -> String {
    "FOIA_API_KEY".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_report_limit() -> usize {
    5
}

fn default_reference_limit() -> usize {
    MAX_PAGE_LIMIT
}

fn default_data_types_path() -> PathBuf {
    PathBuf::from("report_data_map.json")
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            report_limit: default_report_limit(),
            reference_limit: default_reference_limit(),
            data_types_path: default_data_types_path(),
        }
    }
}
