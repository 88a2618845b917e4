//! Group-based authorization check.

use crate::identity::domain::{Permission, User};

/// Returns `true` when `user` belongs to the group `required` designates.
///
/// An unset permission authorizes nobody. Membership is an exact match
/// against the user's group set.
#[must_use]
pub fn authorize(user: &User, required: &Permission) -> bool {
    required.permits(user.groups())
}
