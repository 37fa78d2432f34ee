use crate::config::ExportConfig;
use crate::error::{ExportError, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};
use url::Url;

/// Base delay between retries, multiplied by the attempt number
const RETRY_DELAY: Duration = Duration::from_millis(500);

/// Authenticated client for the Divio Cloud API.
///
/// Requests are issued one at a time; callers await each response before
/// sending the next.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    max_retries: u32,
}

impl ApiClient {
    /// Create a client that sends `Authorization: Token <api_token>` on every request
    pub fn new(base_url: &str, api_token: &str, timeout: Duration, max_retries: u32) -> Result<Self> {
        let mut auth = HeaderValue::from_str(&format!("Token {}", api_token)).map_err(|_| {
            ExportError::ConfigValidationError(
                "api_token contains characters not allowed in an HTTP header".to_string(),
            )
        })?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ExportError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_retries,
        })
    }

    /// Create a client from an export configuration
    pub fn from_config(config: &ExportConfig) -> Result<Self> {
        Self::new(
            &config.base_url,
            &config.api_token,
            config.timeout(),
            config.max_retries,
        )
    }

    /// URL of the environments listing filtered by application
    pub fn environments_url(&self, app_uuid: &str) -> Result<Url> {
        let url = Url::parse_with_params(
            &format!("{}/environments/", self.base_url),
            &[("application", app_uuid)],
        )?;
        Ok(url)
    }

    /// URL of the first (most recent) logs page for a time range
    pub fn logs_url(&self, env_uuid: &str, from_ts: &str, to_ts: &str) -> Result<Url> {
        let url = Url::parse_with_params(
            &format!("{}/environments/{}/logs/", self.base_url, env_uuid),
            &[("from_ts", from_ts), ("to_ts", to_ts)],
        )?;
        Ok(url)
    }

    /// GET a URL and deserialize the JSON body.
    ///
    /// A body that does not decode as `T` is reported together with the
    /// decoder's reason and the raw payload.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.get_text(url).await?;
        match serde_json::from_str(&body) {
            Ok(value) => Ok(value),
            Err(e) => Err(ExportError::InvalidResponse {
                url: url.to_string(),
                reason: e.to_string(),
                body,
            }),
        }
    }

    /// GET a URL and return the body of a 2xx response
    pub async fn get_text(&self, url: &str) -> Result<String> {
        let mut attempt = 0;
        let response = loop {
            debug!("GET {} (attempt {})", url, attempt + 1);
            match self.http.get(url).send().await {
                Ok(response) => break response,
                Err(e) if attempt < self.max_retries && is_transient(&e) => {
                    attempt += 1;
                    warn!(
                        "Request to {} failed: {}. Retrying ({}/{})",
                        url, e, attempt, self.max_retries
                    );
                    tokio::time::sleep(RETRY_DELAY * attempt).await;
                }
                Err(source) => {
                    return Err(ExportError::Transport {
                        url: url.to_string(),
                        source,
                    })
                }
            }
        };

        let status = response.status();
        let body = response.text().await.map_err(|source| ExportError::Transport {
            url: url.to_string(),
            source,
        })?;

        if !status.is_success() {
            return Err(ExportError::Api {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        Ok(body)
    }
}

fn is_transient(error: &reqwest::Error) -> bool {
    error.is_connect() || error.is_timeout()
}
