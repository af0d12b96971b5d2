use thiserror::Error;

/// Error types that can occur while running an evaluation.
#[derive(Debug, Error)]
pub enum EvalError {
    /// Filesystem errors on the results log or dataset files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// JSON serialization/deserialization errors
    #[error("JSON parse error: {0}")]
    Json(String),
    /// A persisted results line that did not deserialize as a record
    #[error("Malformed record at {path}:{line}: {message}")]
    MalformedRecord {
        path: String,
        line: usize,
        message: String,
    },
    /// A dataset line that did not deserialize as an example
    #[error("Dataset error: {0}")]
    Dataset(String),
    /// HTTP request/response errors
    #[error("HTTP error: {0}")]
    Http(String),
    /// Errors returned by the model provider
    #[error("Provider error: {0}")]
    Provider(String),
    /// Provider response parsing or format error
    #[error("Response format error: {message}. Raw response: {raw_response}")]
    ResponseFormat {
        message: String,
        raw_response: String,
    },
    /// Invalid configuration or request parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for EvalError {
    fn from(err: reqwest::Error) -> Self {
        EvalError::Http(err.to_string())
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        EvalError::Json(format!(
            "{} at line {} column {}",
            err,
            err.line(),
            err.column()
        ))
    }
}
