//! Session extraction from bearer tokens.
//!
//! The identity provider contract is simple: each request either carries a
//! valid `Authorization: Bearer <token>` header that resolves to a user, or
//! it is anonymous. [`CurrentUser`] rejects anonymous requests with 401;
//! [`MaybeUser`] lets the handler decide (some listings return an empty
//! result instead of an error).

use crate::{
    core::{auth, authz::Actor},
    errors::Error,
    http::AppState,
};
use axum::{
    extract::FromRequestParts,
    http::{HeaderMap, header, request::Parts},
};

/// Extractor for endpoints that require an authenticated caller.
pub struct CurrentUser(pub Actor);

/// Extractor for endpoints that degrade gracefully without a session.
pub struct MaybeUser(pub Option<Actor>);

/// Pulls the bearer token out of the Authorization header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

#[axum::async_trait]
impl FromRequestParts<AppState> for MaybeUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = bearer_token(&parts.headers) else {
            return Ok(Self(None));
        };
        let actor = auth::resolve_session(&state.db, token).await?;
        Ok(Self(actor))
    }
}

#[axum::async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let MaybeUser(actor) = MaybeUser::from_request_parts(parts, state).await?;
        actor.map(Self).ok_or(Error::Unauthorized)
    }
}
