//! render decision
//!
//! the component renders whatever `DashboardState::view` returns. precedence
//! is loading, then error, then the main view.

use crate::model::{DashboardData, EndpointEntry};
use crate::state::DashboardState;

pub const LOADING_TEXT: &str = "Loading financial data...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardView {
    Loading,
    Failed { message: String },
    /// buttons, plus the status panel once data has arrived
    Ready { status: Option<StatusPanel> },
}

/// "API Connection Status" panel and endpoint list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusPanel {
    pub service: String,
    pub version: String,
    pub description: Option<String>,
    pub health_status: Option<String>,
    pub user_count: Option<usize>,
    pub endpoints: Vec<EndpointEntry>,
}

impl StatusPanel {
    pub fn from_data(data: &DashboardData) -> Self {
        let info = data.api_info();
        Self {
            service: info.service.unwrap_or_default(),
            version: info.version.unwrap_or_default(),
            description: info.description,
            health_status: data.health_status().map(str::to_string),
            user_count: data.user_count(),
            endpoints: info.endpoints,
        }
    }

    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }
}

impl DashboardState {
    pub fn view(&self) -> DashboardView {
        if self.loading() {
            return DashboardView::Loading;
        }
        if let Some(message) = self.error() {
            return DashboardView::Failed {
                message: message.to_string(),
            };
        }
        DashboardView::Ready {
            status: self.data().map(StatusPanel::from_data),
        }
    }
}
