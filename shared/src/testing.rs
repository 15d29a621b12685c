//! in-memory fakes for the browser seams

use std::cell::RefCell;
use std::collections::HashMap;

use async_trait::async_trait;

use crate::actions::Navigator;
use crate::error::{FetchError, NavigationError};
use crate::transport::{ApiRequest, ApiResponse, ApiTransport};

/// answers requests from a url -> response table, records what was sent
#[derive(Default)]
pub struct FakeTransport {
    routes: HashMap<String, Result<ApiResponse, FetchError>>,
    sent: RefCell<Vec<ApiRequest>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(mut self, url: &str, status: u16, body: &str) -> Self {
        self.routes
            .insert(url.to_string(), Ok(ApiResponse::new(status, body)));
        self
    }

    pub fn fail(mut self, url: &str, reason: &str) -> Self {
        self.routes
            .insert(url.to_string(), Err(FetchError::Transport(reason.to_string())));
        self
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl ApiTransport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, FetchError> {
        let url = request.url.clone();
        self.sent.borrow_mut().push(request);
        self.routes
            .get(&url)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Transport(format!("no route for {}", url))))
    }
}

/// remembers every url it was asked to open
#[derive(Default)]
pub struct RecordingNavigator {
    opened: RefCell<Vec<String>>,
    blocked: bool,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// behave like a browser with a popup blocker
    pub fn blocking() -> Self {
        Self {
            blocked: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn open_in_new_tab(&self, url: &str) -> Result<(), NavigationError> {
        self.opened.borrow_mut().push(url.to_string());
        if self.blocked {
            return Err(NavigationError {
                url: url.to_string(),
                reason: "popup blocked".to_string(),
            });
        }
        Ok(())
    }
}
