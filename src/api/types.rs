use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A deployment target of an application, as listed by `/environments/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Environment {
    pub uuid: String,
    pub slug: String,
}

/// Response body of the environments listing
#[derive(Debug, Clone, Deserialize)]
pub struct EnvironmentList {
    pub results: Vec<Environment>,
}

/// A single log line returned by the logs endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogRecord {
    pub timestamp: String,
    /// Free text; `null` becomes `None` and other JSON values their JSON text
    #[serde(deserialize_with = "message_text")]
    pub message: String,
}

/// One page of log records, newest first.
///
/// `previous` points at the chronologically preceding page. The API either
/// omits it, sends `null`, or repeats the current URL once there is nothing
/// older.
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    pub results: Vec<LogRecord>,
    #[serde(default)]
    pub previous: Option<String>,
}

fn message_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => "None".to_string(),
        other => other.to_string(),
    })
}
