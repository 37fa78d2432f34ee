use crate::error::{ExportError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Base URL of the Divio Cloud applications API
pub const DEFAULT_BASE_URL: &str = "https://api.divio.com/apps/v3";

/// Default output file, truncated on every run
pub const DEFAULT_OUTPUT: &str = "logs.txt";

/// Timestamp formats accepted for `from_ts` / `to_ts`
const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M", "%Y-%m-%dT%H:%M:%S"];

/// Export configuration with every setting needed for a single run.
///
/// Required fields: `from_ts`, `to_ts`, `env_slug`, `app_uuid`, `api_token`.
/// Everything else has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Start of the time range (inclusive), `YYYY-MM-DDThh:mm`
    pub from_ts: String,

    /// End of the time range (inclusive), `YYYY-MM-DDThh:mm`
    pub to_ts: String,

    /// Environment slug, for example "live" or "test"
    pub env_slug: String,

    /// Application UUID, taken from the application URL after `/app/`
    pub app_uuid: String,

    /// API token sent as `Authorization: Token <api_token>`
    pub api_token: String,

    /// File the exported entries are written to
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// API base URL, without trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Maximum number of pages fetched before the export is aborted
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,

    /// Per-request timeout (in seconds)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Retries for transient transport failures
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Do not echo entries to stdout
    #[serde(default)]
    pub quiet: bool,
}

// Default value functions for serde
fn default_output() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT)
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub(crate) fn default_max_pages() -> usize {
    10_000
}

pub(crate) fn default_timeout() -> u64 {
    30
}

pub(crate) fn default_max_retries() -> u32 {
    2
}

impl ExportConfig {
    /// Build a configuration from the five run parameters, with defaults for the rest
    pub fn new(
        from_ts: impl Into<String>,
        to_ts: impl Into<String>,
        env_slug: impl Into<String>,
        app_uuid: impl Into<String>,
        api_token: impl Into<String>,
    ) -> Self {
        Self {
            from_ts: from_ts.into(),
            to_ts: to_ts.into(),
            env_slug: env_slug.into(),
            app_uuid: app_uuid.into(),
            api_token: api_token.into(),
            output: default_output(),
            base_url: default_base_url(),
            max_pages: default_max_pages(),
            timeout_secs: default_timeout(),
            max_retries: default_max_retries(),
            quiet: false,
        }
    }

    /// Load an export configuration from a file (supports TOML and JSON)
    pub fn from_file(path: &Path) -> Result<ExportConfig> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ExportError::ConfigError(format!("Failed to read config file: {}", e)))?;

        let extension = path.extension().and_then(|s| s.to_str()).unwrap_or("");

        let config = match extension {
            "toml" => Self::parse_toml(&contents)?,
            "json" => Self::parse_json(&contents)?,
            _ => {
                return Err(ExportError::InvalidConfig(format!(
                    "Unsupported file format: {}. Use .toml or .json",
                    extension
                )))
            }
        };

        config.validate()?;
        Ok(config)
    }

    fn parse_toml(contents: &str) -> Result<ExportConfig> {
        toml::from_str(contents)
            .map_err(|e| ExportError::InvalidConfig(format!("Failed to parse TOML: {}", e)))
    }

    fn parse_json(contents: &str) -> Result<ExportConfig> {
        serde_json::from_str(contents)
            .map_err(|e| ExportError::InvalidConfig(format!("Failed to parse JSON: {}", e)))
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("from_ts", &self.from_ts),
            ("to_ts", &self.to_ts),
            ("env_slug", &self.env_slug),
            ("app_uuid", &self.app_uuid),
            ("api_token", &self.api_token),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ExportError::MissingConfigField(field.to_string()));
            }
        }

        let from = parse_timestamp("from_ts", &self.from_ts)?;
        let to = parse_timestamp("to_ts", &self.to_ts)?;
        if from > to {
            return Err(ExportError::InvalidTimeRange {
                from: self.from_ts.clone(),
                to: self.to_ts.clone(),
            });
        }

        url::Url::parse(&self.base_url).map_err(|e| {
            ExportError::ConfigValidationError(format!(
                "Invalid base_url '{}': {}",
                self.base_url, e
            ))
        })?;

        if self.max_pages == 0 {
            return Err(ExportError::ConfigValidationError(
                "max_pages must be at least 1".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ExportError::ConfigValidationError(
                "timeout_secs must be at least 1".to_string(),
            ));
        }

        if self.output.as_os_str().is_empty() {
            return Err(ExportError::MissingConfigField("output".to_string()));
        }

        Ok(())
    }

    /// Get request timeout as Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// Parse a range boundary, accepting minute or second precision
fn parse_timestamp(field: &str, value: &str) -> Result<NaiveDateTime> {
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .ok_or_else(|| ExportError::InvalidTimestamp {
            field: field.to_string(),
            value: value.to_string(),
        })
}
