//! Authorization primitives.
//!
//! [`Actor`] is what the session layer hands every operation: the
//! authenticated user's identity and role. The predicates here are the
//! single source of truth for the two checks the portal repeats everywhere:
//! "is this an administrator" and "may this caller modify that resource".

use crate::{
    entities::{UserRole, user},
    errors::{Error, Result},
};

/// The authenticated caller of an operation.
#[derive(Debug, Clone)]
pub struct Actor {
    /// User id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
    /// Account role
    pub role: UserRole,
}

impl From<user::Model> for Actor {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

/// Whether `actor` may modify a resource owned by `resource_owner`.
///
/// Administrators may modify anything; everyone else only what they own.
/// Resources with no recorded owner are admin-only.
#[must_use]
pub fn can_modify(actor: &Actor, resource_owner: Option<i64>) -> bool {
    actor.role.is_admin() || resource_owner == Some(actor.id)
}

/// Fails with `Forbidden` unless the actor is an administrator.
pub fn require_admin(actor: &Actor) -> Result<()> {
    if actor.role.is_admin() {
        Ok(())
    } else {
        Err(Error::forbidden("administrator privilege required"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actor(id: i64, role: UserRole) -> Actor {
        Actor {
            id,
            name: "Test".to_string(),
            email: "test@example.com".to_string(),
            role,
        }
    }

    #[test]
    fn test_admin_can_modify_anything() {
        let admin = actor(1, UserRole::Admin);
        assert!(can_modify(&admin, Some(2)));
        assert!(can_modify(&admin, Some(1)));
        assert!(can_modify(&admin, None));
    }

    #[test]
    fn test_member_can_modify_only_own() {
        let member = actor(5, UserRole::Member);
        assert!(can_modify(&member, Some(5)));
        assert!(!can_modify(&member, Some(6)));
        assert!(!can_modify(&member, None));
    }

    #[test]
    fn test_require_admin() {
        assert!(require_admin(&actor(1, UserRole::Admin)).is_ok());
        let err = require_admin(&actor(1, UserRole::Member)).unwrap_err();
        assert!(matches!(err, Error::Forbidden { .. }));
        let err = require_admin(&actor(1, UserRole::Guest)).unwrap_err();
        assert!(matches!(err, Error::Forbidden { .. }));
    }
}
