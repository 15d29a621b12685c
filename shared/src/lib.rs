//! ==============================================================================
//! lib.rs - shared core for the financial dashboard integration
//! ==============================================================================
//!
//! purpose:
//!     everything the dashboard does that does not need a browser lives here:
//!     api configuration, response types, the concurrent fetch cycle, the
//!     per-user action, component state and the render decision.
//!
//! relationships:
//!     - used by: dashboard (leptos csr component, browser transport/navigator)
//!     - talks to: the external finara api through the ApiTransport seam
//!
//! design rationale:
//!     the browser only supplies two things: a way to send http requests and
//!     a way to open tabs. both sit behind traits so the whole flow can be
//!     exercised natively with in-memory fakes.
//!
//! ==============================================================================

pub mod actions;
pub mod config;
pub mod error;
pub mod fetch;
pub mod model;
pub mod state;
pub mod transport;
pub mod view;

#[cfg(test)]
mod testing;

pub use actions::{open_dashboard, open_user_dashboard, Navigator};
pub use config::ApiConfig;
pub use error::{FetchError, NavigationError};
pub use fetch::{fetch_dashboard_data, fetch_user};
pub use model::{ApiInfo, DashboardData, EndpointEntry};
pub use state::{run_fetch_cycle, CycleEvent, CycleTicket, DashboardState, Lifecycle};
pub use transport::{ApiRequest, ApiResponse, ApiTransport};
pub use view::{DashboardView, StatusPanel, LOADING_TEXT};
