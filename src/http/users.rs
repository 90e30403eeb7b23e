//! Registration, login, and admin user management endpoints.

use crate::{
    core::{auth, authz, user as user_ops},
    entities::UserRole,
    errors::{Error, Result},
    http::{AppState, session::{self, CurrentUser}},
};
use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

/// Request body for open registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    name: String,
    email: String,
    password: String,
}

/// Request body for login.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    email: String,
    password: String,
}

/// Request body for admin user creation.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    name: String,
    email: String,
    password: String,
    role: UserRole,
}

/// Request body for admin user update.
#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    name: String,
    email: String,
    role: UserRole,
}

/// POST /api/register - open member registration.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse> {
    let account =
        user_ops::register_user(&state.db, request.name, request.email, request.password).await?;
    Ok((StatusCode::CREATED, Json(json!({ "user": account }))))
}

/// POST /api/login - verify credentials and open a session.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse> {
    let (token, account) = auth::login(&state.db, &request.email, &request.password).await?;
    Ok(Json(json!({ "token": token, "user": account })))
}

/// POST /api/logout - revoke the presented session token.
pub async fn logout(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let token = session::bearer_token(&headers).ok_or(Error::Unauthorized)?;
    auth::logout(&state.db, token).await?;
    Ok(Json(json!({ "success": true })))
}

/// GET /api/admin/users - all users (admin only).
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
) -> Result<impl IntoResponse> {
    authz::require_admin(&actor)?;
    let users = user_ops::list_users(&state.db).await?;
    Ok(Json(json!({ "users": users })))
}

/// POST /api/admin/users - create a user with an explicit role (admin only).
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Json(request): Json<CreateUserRequest>,
) -> Result<impl IntoResponse> {
    authz::require_admin(&actor)?;
    let account = user_ops::create_user(
        &state.db,
        request.name,
        request.email,
        request.password,
        request.role,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(json!({ "user": account }))))
}

/// GET /api/admin/users/{id} - one user (admin only).
pub async fn get_one(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    authz::require_admin(&actor)?;
    let account = user_ops::get_user(&state.db, id)
        .await?
        .ok_or_else(|| Error::not_found("user"))?;
    Ok(Json(json!({ "user": account })))
}

/// PUT /api/admin/users/{id} - update name, email, and role (admin only).
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateUserRequest>,
) -> Result<impl IntoResponse> {
    authz::require_admin(&actor)?;
    let account =
        user_ops::update_user(&state.db, id, request.name, request.email, request.role).await?;
    Ok(Json(json!({ "user": account })))
}

/// DELETE /api/admin/users/{id} - delete a user (admin only, never self).
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    authz::require_admin(&actor)?;
    user_ops::delete_user(&state.db, actor.id, id).await?;
    Ok(Json(json!({ "message": "User deleted successfully" })))
}
