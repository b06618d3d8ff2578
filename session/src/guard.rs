//! Route guard decision table.
//!
//! DESIGN
//! ======
//! Protected and admin routes share one guard parameterized by a role
//! predicate, so their loading/redirect policy cannot drift apart. Guards are
//! pure: they read a `SessionState` and never start a resolution.
//!
//! | state                         | decision       |
//! |-------------------------------|----------------|
//! | `loading`                     | `Loading`      |
//! | settled, no user              | `RedirectHome` |
//! | user, predicate rejects role  | `Forbidden`    |
//! | user, predicate accepts role  | `Render`       |

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::fmt;

use crate::error::AccessError;
use crate::role::RoleFlags;
use crate::state::SessionState;

/// What a guard requires beyond being signed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Requirement {
    Authenticated,
    Admin,
    SuperAdmin,
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Authenticated => "signed-in",
            Self::Admin => "admin",
            Self::SuperAdmin => "superadmin",
        })
    }
}

/// Outcome of evaluating a guard against the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Show the loading interstitial.
    Loading,
    /// Replace the current history entry with the public root.
    RedirectHome,
    /// Show the access-denied panel, then replace with the public root.
    Forbidden,
    /// Render the guarded content.
    Render,
}

/// A role-predicate guard.
#[derive(Clone, Copy, Debug)]
pub struct Guard {
    requirement: Requirement,
    permits: fn(RoleFlags) -> bool,
}

impl Guard {
    pub const fn new(requirement: Requirement, permits: fn(RoleFlags) -> bool) -> Self {
        Self { requirement, permits }
    }

    /// Any signed-in user.
    #[must_use]
    pub const fn protected() -> Self {
        Self::new(Requirement::Authenticated, any_role)
    }

    /// Admins, or only super-admins when `require_super_admin` is set.
    #[must_use]
    pub const fn admin(require_super_admin: bool) -> Self {
        if require_super_admin {
            Self::new(Requirement::SuperAdmin, super_admin_role)
        } else {
            Self::new(Requirement::Admin, admin_role)
        }
    }

    #[must_use]
    pub fn requirement(&self) -> Requirement {
        self.requirement
    }

    /// Evaluate the decision table.
    #[must_use]
    pub fn decide(&self, state: &SessionState) -> GuardDecision {
        if state.loading {
            return GuardDecision::Loading;
        }
        if state.user.is_none() {
            return GuardDecision::RedirectHome;
        }
        if (self.permits)(state.role()) {
            GuardDecision::Render
        } else {
            GuardDecision::Forbidden
        }
    }

    /// Why access is denied, if it is denied because of the user's role.
    #[must_use]
    pub fn denial(&self, state: &SessionState) -> Option<AccessError> {
        if self.decide(state) != GuardDecision::Forbidden {
            return None;
        }
        let actual = state.user.as_ref()?.role;
        Some(AccessError::InsufficientRole { required: self.requirement, actual })
    }
}

fn any_role(_: RoleFlags) -> bool {
    true
}

fn admin_role(flags: RoleFlags) -> bool {
    flags.is_admin
}

fn super_admin_role(flags: RoleFlags) -> bool {
    flags.is_super_admin
}
