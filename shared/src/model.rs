//! ==============================================================================
//! model.rs - payloads returned by the api
//! ==============================================================================
//!
//! the api responses are kept as opaque json values. only the root endpoint's
//! self-description is ever looked into, and then leniently: a missing or
//! oddly typed field is simply absent, never an error.
//!
//! ==============================================================================

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ==============================================================================
// fetch cycle result
// ==============================================================================

/// merged result of one successful fetch cycle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    /// body of `GET /health`
    pub health: Value,
    /// body of `GET /users`
    pub users: Value,
    /// body of `GET /`
    #[serde(rename = "apiInfo")]
    pub api_info: Value,
}

impl DashboardData {
    pub fn new(health: Value, users: Value, api_info: Value) -> Self {
        Self {
            health,
            users,
            api_info,
        }
    }

    pub fn api_info(&self) -> ApiInfo {
        ApiInfo::from_value(&self.api_info)
    }

    /// `status` string reported by the health endpoint, if any
    pub fn health_status(&self) -> Option<&str> {
        self.health.get("status").and_then(Value::as_str)
    }

    /// number of users when the users endpoint returned a list
    pub fn user_count(&self) -> Option<usize> {
        self.users.as_array().map(Vec::len)
    }
}

// ==============================================================================
// api self-description
// ==============================================================================

/// one entry of the `endpoints` mapping
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointEntry {
    pub name: String,
    pub description: String,
}

/// view over the root endpoint's payload
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiInfo {
    pub service: Option<String>,
    pub version: Option<String>,
    pub description: Option<String>,
    /// in the order the server sent them
    pub endpoints: Vec<EndpointEntry>,
}

impl ApiInfo {
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);

        let endpoints = value
            .get("endpoints")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .map(|(name, description)| EndpointEntry {
                        name: name.clone(),
                        description: match description {
                            Value::String(s) => s.clone(),
                            other => other.to_string(),
                        },
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            service: text("service"),
            version: text("version"),
            description: text("description"),
            endpoints,
        }
    }

    pub fn endpoint_count(&self) -> usize {
        self.endpoints.len()
    }
}

// ==============================================================================
// tests
// ==============================================================================
