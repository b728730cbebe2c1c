//! Error types for the clan inviter

use thiserror::Error;


pub type Result<T> = std::result::Result<T, ClashError>;

#[derive(Error, Debug)]
pub enum ClashError {
    /// Token rejected by the API (401/403). The user has to fix the configuration.
    #[error("API rejected the token (HTTP {status}): {message}")]
    Auth { status: u16, message: String },

    #[error("API rate limit exceeded{}", retry_hint(.retry_after))]
    RateLimited { retry_after: Option<u64> },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Malformed API response ({context}): {source}")]
    MalformedResponse {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("API request failed with HTTP {status}: {reason}")]
    Api { status: u16, reason: String },

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("API token not configured and {env_var} environment variable not set")]
    MissingToken { env_var: String },

    #[error("Invalid tag: {tag:?}")]
    InvalidTag { tag: String },

    #[error("Invalid invite count: {input:?} (expected a positive number)")]
    InvalidCount { input: String },

    #[error("Config error in {path}: {message}")]
    Config { path: String, message: String },

    #[error("Input closed before a value was entered")]
    InputClosed,
}

fn retry_hint(retry_after: &Option<u64>) -> String {
    retry_after
        .map(|secs| format!(", retry after {secs}s"))
        .unwrap_or_default()
}

impl ClashError {
    /// Errors the user has to fix before anything else can succeed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ClashError::Auth { .. })
    }

    /// Errors that only concern a single record; the surrounding batch can continue.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            ClashError::MalformedResponse { .. } | ClashError::NotFound { .. }
        )
    }

    pub(crate) fn malformed(context: impl Into<String>, source: serde_json::Error) -> Self {
        ClashError::MalformedResponse {
            context: context.into(),
            source,
        }
    }
}
