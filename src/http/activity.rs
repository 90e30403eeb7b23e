//! Activity feed endpoints.

use crate::{
    core::activity,
    errors::Result,
    http::{AppState, session::CurrentUser},
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

/// Request body for creating a post.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostRequest {
    text: String,
    image_url: Option<String>,
}

/// GET /api/activity - all posts, newest first.
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let posts = activity::list_posts(&state.db).await?;
    Ok(Json(json!({ "posts": posts })))
}

/// POST /api/activity - create a post (authenticated).
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Json(request): Json<PostRequest>,
) -> Result<impl IntoResponse> {
    let post = activity::create_post(&state.db, &actor, request.text, request.image_url).await?;
    Ok((StatusCode::CREATED, Json(json!({ "post": post }))))
}

/// DELETE /api/activity/{id} - delete a post (author or admin).
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    activity::delete_post(&state.db, &actor, id).await?;
    Ok(Json(json!({ "success": true })))
}

/// POST /api/activity/{id}/like - toggle the caller's like.
pub async fn like(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let (post, liked) = activity::toggle_like(&state.db, actor.id, id).await?;
    Ok(Json(json!({ "post": post, "liked": liked })))
}
