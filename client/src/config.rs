//! Build-time client configuration.
//!
//! The API origin is baked into the WASM bundle at compile time through the
//! `DASHBOARD_API_ORIGIN` environment variable; the browser has no process
//! environment to read at runtime.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use session::AuthConfig;
use session::config::DEFAULT_API_ORIGIN;

const BUILD_API_ORIGIN: Option<&str> = option_env!("DASHBOARD_API_ORIGIN");

/// Session configuration for this build.
pub fn auth_config() -> AuthConfig {
    auth_config_from(BUILD_API_ORIGIN)
}

fn auth_config_from(api_origin: Option<&str>) -> AuthConfig {
    AuthConfig::new(api_origin.unwrap_or(DEFAULT_API_ORIGIN))
}
