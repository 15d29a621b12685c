//! api configuration
//!
//! the base url is injected into the component rather than baked into it, so
//! several dashboards pointing at different deployments can coexist.

/// base url used when nothing else is configured (local go api server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// user opened by the "Open User Dashboard" button when nothing else is configured
pub const DEFAULT_DEMO_USER_ID: &str = "6666666666";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    demo_user_id: String,
}

impl ApiConfig {
    /// create a config for `base_url`, trailing slashes are dropped
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            demo_user_id: DEFAULT_DEMO_USER_ID.to_string(),
        }
    }

    pub fn with_demo_user(mut self, user_id: impl Into<String>) -> Self {
        self.demo_user_id = user_id.into();
        self
    }

    /// build from optional overrides (usually `option_env!` values).
    /// blank values fall back to the defaults.
    pub fn from_overrides(base_url: Option<&str>, demo_user_id: Option<&str>) -> Self {
        let base_url = non_blank(base_url).unwrap_or(DEFAULT_BASE_URL);
        let config = Self::new(base_url);
        match non_blank(demo_user_id) {
            Some(user_id) => config.with_demo_user(user_id),
            None => config,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn demo_user_id(&self) -> &str {
        &self.demo_user_id
    }

    pub fn health_url(&self) -> String {
        format!("{}/health", self.base_url)
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// root endpoint returning the api self-description
    pub fn api_info_url(&self) -> String {
        format!("{}/", self.base_url)
    }

    pub fn user_url(&self, user_id: &str) -> String {
        format!("{}/users/{}", self.base_url, urlencoding::encode(user_id))
    }

    pub fn dashboard_url(&self) -> String {
        format!("{}/dashboard", self.base_url)
    }

    pub fn user_dashboard_url(&self, user_id: &str) -> String {
        format!("{}/dashboard/{}", self.base_url, urlencoding::encode(user_id))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
