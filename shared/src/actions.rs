//! ==============================================================================
//! actions.rs - button actions
//! ==============================================================================
//!
//! both actions open html pages served by the api in a new tab. neither
//! touches the dashboard state, and failures only reach the log.
//!
//! ==============================================================================

use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{FetchError, NavigationError};
use crate::fetch::fetch_user;
use crate::transport::ApiTransport;

/// opens pages outside the component (a new browser tab)
pub trait Navigator {
    fn open_in_new_tab(&self, url: &str) -> Result<(), NavigationError>;
}

/// open `{base}/dashboard` in a new tab
pub fn open_dashboard<N>(navigator: &N, config: &ApiConfig)
where
    N: Navigator + ?Sized,
{
    let url = config.dashboard_url();
    log::info!("opening dashboard {}", url);
    if let Err(e) = navigator.open_in_new_tab(&url) {
        log::warn!("{}", e);
    }
}

/// fetch `/users/{id}` and, if that worked, open `{base}/dashboard/{id}`.
///
/// errors are logged and handed back; the ui does not show them.
pub async fn open_user_dashboard<T, N>(
    transport: &T,
    navigator: &N,
    config: &ApiConfig,
    user_id: &str,
) -> Result<Value, FetchError>
where
    T: ApiTransport + ?Sized,
    N: Navigator + ?Sized,
{
    let user = match fetch_user(transport, config, user_id).await {
        Ok(user) => user,
        Err(e) => {
            log::error!("Error fetching user dashboard for {}: {}", user_id, e);
            return Err(e);
        }
    };
    log::info!("User data: {}", user);

    if let Err(e) = navigator.open_in_new_tab(&config.user_dashboard_url(user_id)) {
        log::warn!("{}", e);
    }
    Ok(user)
}

// ==============================================================================
// tests
// ==============================================================================
