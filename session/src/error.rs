//! Error taxonomy for session resolution and access decisions.
//!
//! "No token" is deliberately absent: an empty token store is the ordinary
//! signed-out state, not a failure.

use crate::guard::Requirement;
use crate::user::Role;

/// The stored token could not be turned into a user.
///
/// Every variant means the same thing to callers: discard the token and treat
/// the tab as signed out.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server answered with a non-2xx status.
    #[error("session rejected with status {0}")]
    Rejected(u16),
    /// The request never produced a response.
    #[error("session lookup failed: {0}")]
    Transport(String),
    /// A 2xx response whose body is not a valid user profile.
    #[error("malformed user payload: {0}")]
    Malformed(String),
}

/// A signed-in user tried to reach a route their role does not allow.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AccessError {
    #[error("{actual} role does not grant {required} access")]
    InsufficientRole { required: Requirement, actual: Role },
}

/// The OAuth provider redirected back without a usable token.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CallbackError {
    #[error("no token was returned by the sign-in provider")]
    MissingToken,
}
