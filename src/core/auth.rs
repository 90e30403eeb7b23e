//! Login session business logic.
//!
//! Login verifies the bcrypt hash and issues an opaque token; every
//! authenticated request resolves its bearer token back to an [`Actor`].
//! Tokens are random uuids stored server-side, so logout is a plain row
//! delete and revocation is immediate.

use crate::{
    core::{authz::Actor, user as user_ops},
    entities::{AuthSession, User, auth_session, user},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use uuid::Uuid;

/// Verifies credentials and opens a new session.
///
/// Returns the bearer token and the logged-in user. Unknown email and wrong
/// password are indistinguishable to the caller.
pub async fn login(
    db: &DatabaseConnection,
    email: &str,
    password: &str,
) -> Result<(String, user::Model)> {
    let Some(account) = user_ops::get_user_by_email(db, email).await? else {
        return Err(Error::Unauthorized);
    };

    if !bcrypt::verify(password, &account.password)? {
        return Err(Error::Unauthorized);
    }

    let token = Uuid::new_v4().to_string();
    let session = auth_session::ActiveModel {
        token: Set(token.clone()),
        user_id: Set(account.id),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    session.insert(db).await?;

    Ok((token, account))
}

/// Revokes a session. Unknown tokens are a no-op.
pub async fn logout(db: &DatabaseConnection, token: &str) -> Result<()> {
    AuthSession::delete_many()
        .filter(auth_session::Column::Token.eq(token))
        .exec(db)
        .await?;
    Ok(())
}

/// Resolves a bearer token to the acting user, or `None` if the token is
/// unknown or its account has been deleted.
pub async fn resolve_session(db: &DatabaseConnection, token: &str) -> Result<Option<Actor>> {
    let Some(session) = AuthSession::find()
        .filter(auth_session::Column::Token.eq(token))
        .one(db)
        .await?
    else {
        return Ok(None);
    };

    let account = session.find_related(User).one(db).await?;
    Ok(account.map(Actor::from))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        entities::UserRole,
        test_utils::{TEST_PASSWORD, create_test_user, setup_test_db},
    };

    #[tokio::test]
    async fn test_login_round_trip() -> Result<()> {
        let db = setup_test_db().await?;
        let member = create_test_user(&db, "Ana", "ana@club.test", UserRole::Member).await?;

        let (token, account) = login(&db, "ana@club.test", TEST_PASSWORD).await?;
        assert_eq!(account.id, member.id);

        let actor = resolve_session(&db, &token).await?.unwrap();
        assert_eq!(actor.id, member.id);
        assert_eq!(actor.email, "ana@club.test");
        assert_eq!(actor.role, UserRole::Member);

        Ok(())
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "Ana", "ana@club.test", UserRole::Member).await?;

        let result = login(&db, "ana@club.test", "wrong").await;
        assert!(matches!(result.unwrap_err(), Error::Unauthorized));

        let result = login(&db, "nobody@club.test", TEST_PASSWORD).await;
        assert!(matches!(result.unwrap_err(), Error::Unauthorized));

        Ok(())
    }

    #[tokio::test]
    async fn test_logout_revokes_token() -> Result<()> {
        let db = setup_test_db().await?;
        create_test_user(&db, "Ana", "ana@club.test", UserRole::Member).await?;

        let (token, _) = login(&db, "ana@club.test", TEST_PASSWORD).await?;
        assert!(resolve_session(&db, &token).await?.is_some());

        logout(&db, &token).await?;
        assert!(resolve_session(&db, &token).await?.is_none());

        // Logging out again is a no-op
        logout(&db, &token).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_unknown_token_resolves_to_none() -> Result<()> {
        let db = setup_test_db().await?;
        assert!(resolve_session(&db, "not-a-token").await?.is_none());
        Ok(())
    }
}
