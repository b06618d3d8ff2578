//! Fixed endpoints, routes, and timings used by the session layer.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

pub const DEFAULT_API_ORIGIN: &str = "http://localhost:8000";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const ME_PATH: &str = "/auth/me";
pub const LOGIN_PATH: &str = "/auth/google";
pub const PUBLIC_ROOT: &str = "/";
pub const DASHBOARD_ROOT: &str = "/dashboard";
pub const CALLBACK_PATH: &str = "/auth/callback";
pub const DEFAULT_CALLBACK_FAILURE_DELAY_MS: u64 = 3_000;
pub const DEFAULT_FORBIDDEN_REDIRECT_DELAY_MS: u64 = 2_000;

/// Session-layer configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthConfig {
    /// Origin of the backend API, without a trailing slash.
    pub api_origin: String,
    /// Storage key holding the bearer token.
    pub token_key: String,
    pub me_path: String,
    pub login_path: String,
    pub public_root: String,
    pub dashboard_root: String,
    pub callback_path: String,
    /// How long the callback page shows its failure message before going home.
    pub callback_failure_delay: Duration,
    /// How long the access-denied panel stays up before redirecting.
    pub forbidden_redirect_delay: Duration,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_ORIGIN)
    }
}

impl AuthConfig {
    /// Config for the given API origin with every other value defaulted.
    /// A blank origin falls back to [`DEFAULT_API_ORIGIN`].
    #[must_use]
    pub fn new(api_origin: &str) -> Self {
        Self {
            api_origin: normalize_origin(api_origin),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
            me_path: ME_PATH.to_owned(),
            login_path: LOGIN_PATH.to_owned(),
            public_root: PUBLIC_ROOT.to_owned(),
            dashboard_root: DASHBOARD_ROOT.to_owned(),
            callback_path: CALLBACK_PATH.to_owned(),
            callback_failure_delay: Duration::from_millis(DEFAULT_CALLBACK_FAILURE_DELAY_MS),
            forbidden_redirect_delay: Duration::from_millis(DEFAULT_FORBIDDEN_REDIRECT_DELAY_MS),
        }
    }

    /// Override the token storage key.
    #[must_use]
    pub fn with_token_key(mut self, key: &str) -> Self {
        self.token_key = key.to_owned();
        self
    }

    /// Absolute URL of the "current user" endpoint.
    #[must_use]
    pub fn me_url(&self) -> String {
        format!("{}{}", self.api_origin, self.me_path)
    }

    /// Absolute URL that starts the OAuth sign-in flow.
    #[must_use]
    pub fn login_url(&self) -> String {
        format!("{}{}", self.api_origin, self.login_path)
    }
}

/// Trim whitespace and trailing slashes from an origin.
#[must_use]
pub fn normalize_origin(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_ORIGIN.to_owned()
    } else {
        trimmed.to_owned()
    }
}
