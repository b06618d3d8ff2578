//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` binds the session resolver contract to the browser's HTTP stack.

pub mod api;
