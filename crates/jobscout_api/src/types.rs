use serde::{Deserialize, Deserializer};
use thiserror::Error;

/// Failure taxonomy for both remote services. Every variant is non-fatal:
/// callers log it, surface a notification, and keep last-known-good data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out")]
    Timeout,
    #[error("http status {0}")]
    HttpStatus(u16),
    #[error("malformed response: {0}")]
    Decode(String),
    /// An `error` field inside an otherwise successful response body.
    #[error("{0}")]
    Application(String),
}

/// One job row, passed through from the jobs service. The scraper emits
/// salary bounds as numbers or strings depending on the source site, so both
/// are normalized to display text here.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Job {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub salary_type: Option<String>,
    #[serde(default, deserialize_with = "scalar_to_text")]
    pub salary_min: Option<String>,
    #[serde(default, deserialize_with = "scalar_to_text")]
    pub salary_max: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
}

/// Response of `GET /all-jobs`. The service also reports `total`, `page` and
/// `limit`; only the item list and the page count are consumed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct JobPage {
    #[serde(default)]
    pub jobs: Vec<Job>,
    #[serde(default = "one")]
    pub pages: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LocationCount {
    pub location: String,
    #[serde(default)]
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CategoryCount {
    pub category: String,
    #[serde(default)]
    pub count: u64,
}

/// Response of `GET /filter-counts`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FacetCounts {
    #[serde(default)]
    pub location_counts: Vec<LocationCount>,
    #[serde(default)]
    pub category_counts: Vec<CategoryCount>,
}

/// Response of `GET /filter-options`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct FilterOptions {
    #[serde(default)]
    pub locations: Vec<String>,
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Response of `GET /jobs` (the personalized home feed).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct FeedBundle {
    #[serde(default)]
    pub recommended: Vec<Job>,
    #[serde(default)]
    pub newest: Vec<Job>,
    #[serde(default)]
    pub local: Vec<Job>,
    /// The service reports failures as an `error` field in a 2xx body.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response of `POST /chat`. `reply` rows are arbitrary SQL result records;
/// rows that look like jobs get rendered as job cards downstream.
#[derive(Debug, Clone, PartialEq, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChatReply {
    #[serde(default)]
    pub response_type: String,
    #[serde(default)]
    pub sql_query: Option<String>,
    #[serde(default)]
    pub reply: Option<Vec<serde_json::Value>>,
    /// Plotly figure serialized as a JSON string, when requested.
    #[serde(default)]
    pub graph: Option<String>,
}

fn one() -> u32 {
    1
}

fn scalar_to_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        serde_json::Value::Null => None,
        serde_json::Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }))
}
