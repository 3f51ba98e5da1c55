// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong while asking the upstream model for a reply.
///
/// None of these reach the HTTP caller; the relay logs them and answers with
/// an empty reply.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("upstream request timed out")]
    Timeout,

    #[error("upstream transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    UpstreamStatus { status: StatusCode, body: String },

    #[error("upstream body is not valid JSON: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("upstream response is missing {0}")]
    Malformed(&'static str),
}

// The request URL never reaches logs.
impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            RelayError::Timeout
        } else {
            RelayError::Transport(err.without_url())
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(&'static str),

    #[error("environment variable {var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}
