use std::borrow::Cow;
use std::fmt;

/// Non-success HTTP response returned by a Meteora API.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body text.
    pub body: String,
}

impl ApiError {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Human-readable message for this error.
    ///
    /// Uses the `message` field when the body is a JSON object carrying one,
    /// otherwise the raw body verbatim.
    pub fn message(&self) -> Cow<'_, str> {
        match serde_json::from_str::<serde_json::Value>(&self.body) {
            Ok(serde_json::Value::Object(map)) => match map.get("message") {
                Some(serde_json::Value::String(message)) => Cow::Owned(message.clone()),
                _ => Cow::Borrowed(&self.body),
            },
            _ => Cow::Borrowed(&self.body),
        }
    }

    /// Returns true for statuses the transport retries (429 and 5xx).
    pub fn is_retryable(&self) -> bool {
        self.status == 429 || (500..600).contains(&self.status)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "meteora API error: status {}: {}",
            self.status,
            self.message()
        )
    }
}

impl std::error::Error for ApiError {}

/// Point at which a request observed cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CancelStage {
    /// The token was already cancelled before the given attempt (1-based).
    BeforeAttempt(u32),
    /// The token was cancelled while sleeping before a retry.
    DuringBackoff,
}

impl fmt::Display for CancelStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BeforeAttempt(attempt) => write!(f, "before attempt {attempt}"),
            Self::DuringBackoff => f.write_str("during retry delay"),
        }
    }
}

/// Error type returned by this crate.
#[derive(Debug, thiserror::Error)]
pub enum MeteoraError {
    /// Non-success HTTP status code with raw response body.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The request could not be sent (connection refused, timeout, ...).
    #[error("executing request (attempt {attempt}): {source}")]
    Transport {
        /// Attempt (1-based) whose send failed.
        attempt: u32,
        #[source]
        source: reqwest::Error,
    },
    /// The response arrived but its body could not be read.
    #[error("reading response body: {0}")]
    Body(#[source] reqwest::Error),
    /// The caller's cancellation token fired.
    #[error("request canceled {0}")]
    Canceled(CancelStage),
    /// Successful response whose body does not match the expected shape.
    #[error("decoding response: {0}")]
    Decode(#[from] serde_json::Error),
    /// The base URL and path do not form a valid URL.
    #[error("building URL: {0}")]
    InvalidUrl(String),
    /// The request could not be built.
    #[error("creating request: {0}")]
    Request(#[source] reqwest::Error),
    /// Invalid client configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl MeteoraError {
    /// HTTP status code, when the error carries one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api(err) => Some(err.status),
            _ => None,
        }
    }

    /// Returns true when the transport would retry this error.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Api(err) => err.is_retryable(),
            Self::Transport { .. } => true,
            _ => false,
        }
    }

    /// Returns true when the caller cancelled the request.
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Canceled(_))
    }
}
