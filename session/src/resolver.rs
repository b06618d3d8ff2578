//! Exchange a bearer token for the user it represents.
//!
//! SYSTEM CONTEXT
//! ==============
//! The transport is supplied by the caller (`gloo-net` in the browser, fakes in
//! tests). This module fixes the contract every transport shares: how the
//! credential is sent and how the `/auth/me` response is interpreted.
//!
//! ERROR HANDLING
//! ==============
//! Any non-2xx status, transport failure, or undecodable body is an
//! [`AuthError`]. Resolution is single-shot; retrying is the caller's call and
//! nothing in this crate does it.

#[cfg(test)]
#[path = "resolver_test.rs"]
mod resolver_test;

use crate::error::AuthError;
use crate::user::User;

/// Resolves a token into a [`User`] with one network round trip.
///
/// Futures are not required to be `Send`: browser HTTP futures never are.
#[allow(async_fn_in_trait)]
pub trait SessionResolver {
    /// Resolve `token` (never empty) into its user profile.
    async fn resolve(&self, token: &str) -> Result<User, AuthError>;
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Interpret a `GET /auth/me` response.
///
/// # Errors
///
/// Returns [`AuthError::Rejected`] for non-2xx statuses and
/// [`AuthError::Malformed`] when a 2xx body is not a valid user.
pub fn interpret_me_response(status: u16, body: &str) -> Result<User, AuthError> {
    if !(200..300).contains(&status) {
        return Err(AuthError::Rejected(status));
    }
    serde_json::from_str(body).map_err(|e| AuthError::Malformed(e.to_string()))
}
