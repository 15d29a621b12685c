//! ==============================================================================
//! fetch.rs - requests against the api
//! ==============================================================================
//!
//! a fetch cycle sends the three dashboard requests at once and joins them
//! all-or-nothing: the first transport failure rejects the batch. every
//! status is checked before any body is parsed, so a non-success response
//! wins over a malformed body elsewhere in the batch.
//!
//! ==============================================================================

use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::FetchError;
use crate::model::DashboardData;
use crate::transport::{ApiRequest, ApiTransport};

/// the root request is the one that needs cors credentials
fn api_info_request(config: &ApiConfig) -> ApiRequest {
    ApiRequest::get(config.api_info_url())
        .header("Content-Type", "application/json")
        .header("Accept", "application/json")
        .with_credentials()
}

/// run one fetch cycle: `/health`, `/users` and `/` concurrently
pub async fn fetch_dashboard_data<T>(
    transport: &T,
    config: &ApiConfig,
) -> Result<DashboardData, FetchError>
where
    T: ApiTransport + ?Sized,
{
    let (health, users, api_info) = futures::try_join!(
        transport.send(ApiRequest::get(config.health_url())),
        transport.send(ApiRequest::get(config.users_url())),
        transport.send(api_info_request(config)),
    )?;

    for response in [&health, &users, &api_info] {
        response.ensure_ok()?;
    }

    Ok(DashboardData::new(health.json()?, users.json()?, api_info.json()?))
}

/// `GET /users/{id}`
pub async fn fetch_user<T>(
    transport: &T,
    config: &ApiConfig,
    user_id: &str,
) -> Result<Value, FetchError>
where
    T: ApiTransport + ?Sized,
{
    let request =
        ApiRequest::get(config.user_url(user_id)).header("Content-Type", "application/json");
    transport.send(request).await?.json()
}

// ==============================================================================
// tests
// ==============================================================================
