//! User account business logic.
//!
//! Registration is open (new accounts are members); everything else here is
//! reached through admin-gated endpoints. Deleting a user takes the user's
//! sessions, assignments, and check-ins with it in one transaction, and an
//! administrator can never delete their own account.

use crate::{
    entities::{AuthSession, CheckIn, PlantCare, User, UserRole, auth_session, check_in,
        plant_care, user},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Serialize;

/// The id/name/email projection attached to assignments and check-ins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    /// User id
    pub id: i64,
    /// Display name
    pub name: String,
    /// Login email
    pub email: String,
}

impl From<user::Model> for UserSummary {
    fn from(user: user::Model) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

/// Registers a new member account.
///
/// The email must not already be taken; the password is stored as a bcrypt
/// hash and new accounts always start with the MEMBER role.
pub async fn register_user(
    db: &DatabaseConnection,
    name: String,
    email: String,
    password: String,
) -> Result<user::Model> {
    create_user(db, name, email, password, UserRole::Member).await
}

/// Creates a user with an explicit role (admin user management).
pub async fn create_user(
    db: &DatabaseConnection,
    name: String,
    email: String,
    password: String,
    role: UserRole,
) -> Result<user::Model> {
    if name.trim().is_empty() {
        return Err(Error::validation("Name is required"));
    }
    if email.trim().is_empty() {
        return Err(Error::validation("Email is required"));
    }
    if password.is_empty() {
        return Err(Error::validation("Password is required"));
    }

    let existing = User::find()
        .filter(user::Column::Email.eq(email.trim()))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(Error::validation("User with this email already exists"));
    }

    let hashed = bcrypt::hash(&password, bcrypt::DEFAULT_COST)?;

    let new_user = user::ActiveModel {
        name: Set(name.trim().to_string()),
        email: Set(email.trim().to_string()),
        password: Set(hashed),
        role: Set(role),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let result = new_user.insert(db).await?;
    Ok(result)
}

/// Retrieves all users, newest first.
pub async fn list_users(db: &DatabaseConnection) -> Result<Vec<user::Model>> {
    User::find()
        .order_by_desc(user::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a user by id.
pub async fn get_user(db: &DatabaseConnection, user_id: i64) -> Result<Option<user::Model>> {
    User::find_by_id(user_id).one(db).await.map_err(Into::into)
}

/// Finds a user by email.
pub async fn get_user_by_email(
    db: &DatabaseConnection,
    email: &str,
) -> Result<Option<user::Model>> {
    User::find()
        .filter(user::Column::Email.eq(email))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Updates a user's name, email, and role.
///
/// Fails with `Validation` if the new email already belongs to a different
/// account.
pub async fn update_user(
    db: &DatabaseConnection,
    user_id: i64,
    name: String,
    email: String,
    role: UserRole,
) -> Result<user::Model> {
    let existing = User::find_by_id(user_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("user"))?;

    let taken = User::find()
        .filter(user::Column::Email.eq(email.trim()))
        .one(db)
        .await?;
    if let Some(other) = taken {
        if other.id != user_id {
            return Err(Error::validation("Email is already in use"));
        }
    }

    let mut active: user::ActiveModel = existing.into();
    active.name = Set(name.trim().to_string());
    active.email = Set(email.trim().to_string());
    active.role = Set(role);
    let updated = active.update(db).await?;
    Ok(updated)
}

/// Deletes a user and everything they own.
///
/// The acting administrator can never delete their own account. Sessions,
/// assignments, and check-ins owned by the user are removed in the same
/// transaction as the user row.
pub async fn delete_user(db: &DatabaseConnection, acting_user_id: i64, user_id: i64) -> Result<()> {
    if acting_user_id == user_id {
        return Err(Error::validation("You cannot delete your own account"));
    }

    let txn = db.begin().await?;

    let existing = User::find_by_id(user_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::not_found("user"))?;

    AuthSession::delete_many()
        .filter(auth_session::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    PlantCare::delete_many()
        .filter(plant_care::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    CheckIn::delete_many()
        .filter(check_in::Column::UserId.eq(user_id))
        .exec(&txn)
        .await?;
    existing.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{create_test_plant, create_test_user, setup_test_db};

    #[tokio::test]
    async fn test_register_rejects_duplicate_email() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "Ana", "ana@club.test", UserRole::Member).await?;

        let result = register_user(
            &db,
            "Other Ana".to_string(),
            "ana@club.test".to_string(),
            "pw".to_string(),
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_register_defaults_to_member() -> Result<()> {
        let db = setup_test_db().await?;

        let user = register_user(
            &db,
            "Ana".to_string(),
            "ana@club.test".to_string(),
            "gardening".to_string(),
        )
        .await?;
        assert_eq!(user.role, UserRole::Member);
        assert_ne!(user.password, "gardening"); // stored hashed

        Ok(())
    }

    #[tokio::test]
    async fn test_validation_of_required_fields() -> Result<()> {
        let db = setup_test_db().await?;

        let result =
            register_user(&db, "  ".to_string(), "a@b.c".to_string(), "pw".to_string()).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        let result =
            register_user(&db, "Ana".to_string(), String::new(), "pw".to_string()).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        let result =
            register_user(&db, "Ana".to_string(), "a@b.c".to_string(), String::new()).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_user_email_conflict() -> Result<()> {
        let db = setup_test_db().await?;
        let ana = create_test_user(&db, "Ana", "ana@club.test", UserRole::Member).await?;
        create_test_user(&db, "Ben", "ben@club.test", UserRole::Member).await?;

        let result = update_user(
            &db,
            ana.id,
            "Ana".to_string(),
            "ben@club.test".to_string(),
            UserRole::Member,
        )
        .await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        // Keeping one's own email is fine
        let updated = update_user(
            &db,
            ana.id,
            "Ana Maria".to_string(),
            "ana@club.test".to_string(),
            UserRole::Admin,
        )
        .await?;
        assert_eq!(updated.name, "Ana Maria");
        assert_eq!(updated.role, UserRole::Admin);

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_cannot_delete_own_account() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = create_test_user(&db, "Root", "root@club.test", UserRole::Admin).await?;

        let result = delete_user(&db, admin.id, admin.id).await;
        assert!(matches!(result.unwrap_err(), Error::Validation { .. }));

        // Account is still there
        assert!(get_user(&db, admin.id).await?.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_user_cascades() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = create_test_user(&db, "Root", "root@club.test", UserRole::Admin).await?;
        let member = create_test_user(&db, "Ana", "ana@club.test", UserRole::Member).await?;
        let plant = create_test_plant(&db, "Basil").await?;

        crate::test_utils::create_test_assignment(&db, member.id, plant.id, Utc::now(), None)
            .await?;

        delete_user(&db, admin.id, member.id).await?;

        assert!(get_user(&db, member.id).await?.is_none());
        let remaining = PlantCare::find()
            .filter(plant_care::Column::UserId.eq(member.id))
            .all(&db)
            .await?;
        assert!(remaining.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_user_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = create_test_user(&db, "Root", "root@club.test", UserRole::Admin).await?;

        let result = delete_user(&db, admin.id, 999).await;
        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));

        Ok(())
    }
}
