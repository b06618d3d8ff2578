//! Browser session and role-gated access control for the dashboard.
//!
//! This crate owns everything that decides whether a tab is signed in, what
//! role the signed-in user holds, and which routes are reachable. It has no
//! browser or framework dependencies: storage and HTTP are reached through the
//! [`TokenStore`] and [`SessionResolver`] traits, so the `client` crate binds
//! them to `localStorage` and `fetch` while tests bind them to in-memory fakes.
//!
//! DATA FLOW
//! =========
//! `TokenStore` -> `SessionResolver` -> `AuthSession` -> {`RoleFlags`, `Guard`}.
//! The OAuth callback writes into the token store and calls back into the
//! session through [`callback::complete_callback`].

pub mod callback;
pub mod config;
pub mod error;
pub mod guard;
pub mod resolver;
pub mod role;
pub mod session;
pub mod state;
pub mod token;
pub mod user;

pub use callback::{CallbackOutcome, CallbackPhase, callback_token, complete_callback};
pub use config::AuthConfig;
pub use error::{AccessError, AuthError, CallbackError};
pub use guard::{Guard, GuardDecision, Requirement};
pub use resolver::{SessionResolver, bearer_header, interpret_me_response};
pub use role::RoleFlags;
pub use session::AuthSession;
pub use state::{AuthPhase, SessionNotice, SessionState};
pub use token::{MemoryTokenStore, TokenStore};
pub use user::{Role, User};
