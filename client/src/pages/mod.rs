//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates rendering details
//! to `components`. Access control is applied in the route table, not here.

pub mod admin;
pub mod auth_callback;
pub mod dashboard;
pub mod home;
