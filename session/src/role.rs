//! Capability flags derived from the current user's role.
//!
//! Pure projection with no state of its own; recompute it whenever the
//! session state changes.

#[cfg(test)]
#[path = "role_test.rs"]
mod role_test;

use crate::user::{Role, User};

/// Boolean capability view over a (possibly absent) user.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RoleFlags {
    pub is_admin: bool,
    pub is_super_admin: bool,
    pub is_user: bool,
    pub role: Option<Role>,
}

impl RoleFlags {
    /// Project `user` into flags. An absent user yields all-false flags.
    #[must_use]
    pub fn of(user: Option<&User>) -> Self {
        user.map_or_else(Self::default, |user| Self::from_role(user.role))
    }

    #[must_use]
    pub fn from_role(role: Role) -> Self {
        Self {
            is_admin: matches!(role, Role::Admin | Role::SuperAdmin),
            is_super_admin: matches!(role, Role::SuperAdmin),
            is_user: matches!(role, Role::User),
            role: Some(role),
        }
    }
}
