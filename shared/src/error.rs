//! error types

use thiserror::Error;

/// why a request against the api did not produce a json body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// the server answered with a non-2xx status
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// the request never completed (network, cors, dns)
    #[error("{0}")]
    Transport(String),

    /// the body was not valid json
    #[error("invalid JSON response: {0}")]
    Decode(String),
}

impl FetchError {
    /// message shown in the ui when a fetch cycle fails
    pub fn user_message(&self) -> String {
        format!("Failed to fetch data: {}", self)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// the browser refused to open a tab (popup blocker, no window)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not open {url}: {reason}")]
pub struct NavigationError {
    pub url: String,
    pub reason: String,
}
