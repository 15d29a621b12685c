//! ==============================================================================
//! api.rs - browser side of the api seams
//! ==============================================================================
//!
//! BrowserTransport sends requests with fetch (gloo-net), BrowserNavigator
//! opens tabs with window.open. everything else lives in the shared crate.
//!
//! ==============================================================================

use async_trait::async_trait;
use gloo_net::http::Request;
use shared::{ApiRequest, ApiResponse, ApiTransport, FetchError, NavigationError, Navigator};
use web_sys::RequestCredentials;

// ==============================================================================
// transport
// ==============================================================================

/// fetch() through gloo-net
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

#[async_trait(?Send)]
impl ApiTransport for BrowserTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError> {
        let mut builder = Request::get(&request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name, value);
        }
        if request.include_credentials {
            builder = builder.credentials(RequestCredentials::Include);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(ApiResponse::new(status, body))
    }
}

// ==============================================================================
// navigation
// ==============================================================================

/// window.open(url, "_blank")
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn open_in_new_tab(&self, url: &str) -> Result<(), NavigationError> {
        let fail = |reason: String| NavigationError {
            url: url.to_string(),
            reason,
        };

        let window = web_sys::window().ok_or_else(|| fail("no window".to_string()))?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            // null handle: popup blocker
            Ok(None) => Err(fail("popup blocked".to_string())),
            Err(e) => Err(fail(format!("{:?}", e))),
        }
    }
}
