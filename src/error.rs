use thiserror::Error;

/// Main error type for the log exporter
#[derive(Debug, Error)]
pub enum ExportError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid configuration file: {0}")]
    InvalidConfig(String),

    #[error("Missing required configuration field: {0}")]
    MissingConfigField(String),

    #[error("Configuration validation failed: {0}")]
    ConfigValidationError(String),

    #[error("Invalid timestamp for {field}: '{value}'. Expected YYYY-MM-DDThh:mm")]
    InvalidTimestamp { field: String, value: String },

    #[error("Invalid time range: from_ts '{from}' is after to_ts '{to}'")]
    InvalidTimeRange { from: String, to: String },

    #[error("Environment '{slug}' not found for application {application}")]
    EnvironmentNotFound { slug: String, application: String },

    // Transport errors
    #[error("Request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    // API errors
    #[error("API returned {status} for {url}: {body}")]
    Api {
        status: u16,
        url: String,
        body: String,
    },

    #[error("Unexpected response from {url} ({reason}): {body}")]
    InvalidResponse {
        url: String,
        reason: String,
        body: String,
    },

    #[error("Malformed page from {url} (no 'results' field): {body}")]
    MalformedPage { url: String, body: String },

    // Pagination guards
    #[error("Page limit of {limit} exceeded, aborting export")]
    PageLimitExceeded { limit: usize },

    #[error("Pagination loop detected: {url} was already fetched")]
    PaginationLoop { url: String },

    // Output errors
    #[error("Failed to open log file: {0}")]
    LogFileError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Result type alias for export operations
pub type Result<T> = std::result::Result<T, ExportError>;
