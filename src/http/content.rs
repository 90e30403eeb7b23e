//! Site content endpoints.

use crate::{
    core::{authz, content},
    errors::{Error, Result},
    http::{AppState, session::CurrentUser},
};
use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Deserialize;
use serde_json::json;

/// Request body for the content upsert.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    title: String,
    content: String,
    image_url: Option<String>,
}

/// GET /api/site-content - every document (public).
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let contents = content::list_contents(&state.db).await?;
    Ok(Json(json!({ "contents": contents })))
}

/// GET /api/site-content/{key} - one document (public).
pub async fn get_one(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<impl IntoResponse> {
    let found = content::get_content(&state.db, &key)
        .await?
        .ok_or_else(|| Error::not_found("content"))?;
    Ok(Json(json!({ "content": found })))
}

/// PUT /api/site-content/{key} - create or replace a document (admin only).
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(key): Path<String>,
    Json(request): Json<ContentRequest>,
) -> Result<impl IntoResponse> {
    authz::require_admin(&actor)?;
    let updated = content::upsert_content(
        &state.db,
        &key,
        request.title,
        request.content,
        request.image_url,
    )
    .await?;
    Ok(Json(json!({ "content": updated })))
}
