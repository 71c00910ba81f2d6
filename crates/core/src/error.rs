use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can go wrong talking to the AI server. Nothing is
/// retried or recovered locally; every failure propagates to the caller.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("error encoding request payload")]
    Encode(#[source] serde_json::Error),

    #[error("error making POST request")]
    Network(#[source] reqwest::Error),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected status code: {0}")]
    UnexpectedStatus(StatusCode),

    #[error("error decoding response")]
    Decode(#[source] serde_json::Error),

    #[error("no data found in response")]
    EmptyResult,
}
