use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Client, Url};
use serde_json::Value;

use crate::config::{ApiConfig, CredentialStatus, SecureString};

use super::error::TransportError;
use super::params::RequestParams;
use super::Transport;

const API_KEY_HEADER: &str = "X-Api-Key";
const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

/// `reqwest`-backed [`Transport`].
pub struct HttpTransport {
    client: Client,
    base_url: String,
    api_key: Option<SecureString>,
}

impl HttpTransport {
    pub fn new(config: &ApiConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .build()
            .map_err(TransportError::ClientBuild)?;

        let api_key = match config.resolve_credential() {
            CredentialStatus::Configured(key) => Some(key),
            CredentialStatus::Unconfigured { reason } => {
                tracing::warn!(reason = %reason, "No API key configured, requests are anonymous");
                None
            }
        };

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    fn resolve_url(&self, path: &str, params: &RequestParams) -> Result<Url, TransportError> {
        let raw = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        };

        let mut url = Url::parse(&raw).map_err(|e| TransportError::InvalidUrl {
            url: raw.clone(),
            reason: e.to_string(),
        })?;

        let pairs = params.to_query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, params: &RequestParams) -> Result<Value, TransportError> {
        let url = self.resolve_url(path, params)?;
        let url_str = url.to_string();

        let mut builder = self.client.get(url).header(ACCEPT, JSON_API_MEDIA_TYPE);
        if let Some(ref key) = self.api_key {
            builder = builder.header(API_KEY_HEADER, key.expose());
        }

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::ConnectionError {
                url: url_str.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                status: status.as_u16(),
                url: url_str,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| TransportError::Decode(e.to_string()))
    }
}
