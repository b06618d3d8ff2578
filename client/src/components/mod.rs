//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render session-aware chrome (guards, interstitials, notices)
//! while reading shared auth state from the `AuthProvider` context.

pub mod access_denied;
pub mod loading_screen;
pub mod route_guard;
pub mod session_notice;
