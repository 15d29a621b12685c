//! http transport seam
//!
//! the browser implementation lives in the dashboard crate (gloo-net). tests
//! plug in canned responses.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::FetchError;

/// a GET request against the api
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub url: String,
    pub headers: Vec<(&'static str, &'static str)>,
    /// ask the browser to attach cookies / auth for cross-origin calls
    pub include_credentials: bool,
}

impl ApiRequest {
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            headers: Vec::new(),
            include_credentials: false,
        }
    }

    pub fn header(mut self, name: &'static str, value: &'static str) -> Self {
        self.headers.push((name, value));
        self
    }

    pub fn with_credentials(mut self) -> Self {
        self.include_credentials = true;
        self
    }
}

/// raw response, body not yet interpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// fail with the http status unless the response is a success
    pub fn ensure_ok(&self) -> Result<&Self, FetchError> {
        if !self.ok() {
            return Err(FetchError::Http {
                status: self.status,
            });
        }
        Ok(self)
    }

    /// parse the body as json, refusing non-success responses first
    pub fn json(&self) -> Result<Value, FetchError> {
        self.ensure_ok()?;
        Ok(serde_json::from_str(&self.body)?)
    }
}

/// sends requests to the api.
///
/// `?Send` because the browser implementation holds js values.
#[async_trait(?Send)]
pub trait ApiTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError>;
}
