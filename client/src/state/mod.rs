//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Authentication is the only cross-page state; pages keep their own local
//! signals for everything else.

pub mod auth;
