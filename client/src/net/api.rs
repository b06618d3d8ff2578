//! REST calls to the dashboard API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): resolution always fails with a transport error, since
//! the bearer token only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is folded into `AuthError`; the session layer treats all of
//! them as "token no longer valid" and signs the tab out.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use session::{AuthConfig, AuthError, SessionResolver, User};

/// Resolves tokens against `GET {api_origin}/auth/me`.
#[derive(Clone, Debug)]
pub struct ApiResolver {
    me_url: String,
}

impl ApiResolver {
    pub fn new(config: &AuthConfig) -> Self {
        Self { me_url: config.me_url() }
    }

    pub fn me_url(&self) -> &str {
        &self.me_url
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn transport_failed_message(detail: &str) -> String {
    format!("GET /auth/me failed: {detail}")
}

#[cfg(any(test, not(feature = "hydrate")))]
fn unavailable_on_server() -> AuthError {
    AuthError::Transport("not available on server".to_owned())
}

impl SessionResolver for ApiResolver {
    async fn resolve(&self, token: &str) -> Result<User, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.me_url)
                .header("Authorization", &session::bearer_header(token))
                .send()
                .await
                .map_err(|e| AuthError::Transport(transport_failed_message(&e.to_string())))?;
            let status = resp.status();
            let body = resp
                .text()
                .await
                .map_err(|e| AuthError::Transport(transport_failed_message(&e.to_string())))?;
            session::interpret_me_response(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(unavailable_on_server())
        }
    }
}
