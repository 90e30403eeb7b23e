//! Plant-care assignment endpoints.

use crate::{
    core::{
        assignment::{self, AssignmentInput, ListScope},
        authz,
    },
    errors::{Error, Result},
    http::{
        AppState,
        session::{CurrentUser, MaybeUser},
    },
};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;

/// Request body for creating or replacing an assignment.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentRequest {
    user_id: i64,
    plant_id: i64,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
    task_type: Option<String>,
    notes: Option<String>,
}

impl From<AssignmentRequest> for AssignmentInput {
    fn from(request: AssignmentRequest) -> Self {
        Self {
            user_id: request.user_id,
            plant_id: request.plant_id,
            start_date: request.start_date,
            end_date: request.end_date,
            task_type: request.task_type,
            notes: request.notes,
        }
    }
}

/// GET /api/plant-care - assignments scoped by role; empty without a session.
pub async fn list(
    State(state): State<AppState>,
    MaybeUser(actor): MaybeUser,
) -> Result<impl IntoResponse> {
    let Some(actor) = actor else {
        return Ok(Json(json!({ "plantCare": [] })));
    };

    let scope = if actor.role.is_admin() {
        ListScope::All
    } else {
        ListScope::ForUser(actor.id)
    };
    let assignments = assignment::list_assignments(&state.db, scope).await?;
    Ok(Json(json!({ "plantCare": assignments })))
}

/// POST /api/plant-care - create an assignment (admin only).
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Json(request): Json<AssignmentRequest>,
) -> Result<impl IntoResponse> {
    authz::require_admin(&actor)?;
    let created = assignment::create_assignment(&state.db, request.into()).await?;
    Ok((StatusCode::CREATED, Json(json!({ "plantCare": created }))))
}

/// GET /api/plant-care/{id} - one assignment (owner or admin).
pub async fn get_one(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let details = assignment::get_assignment(&state.db, id)
        .await?
        .ok_or_else(|| Error::not_found("plant care assignment"))?;

    if !authz::can_modify(&actor, Some(details.assignment.user_id)) {
        return Err(Error::forbidden("You may only view your own assignments"));
    }

    Ok(Json(json!({ "plantCare": details })))
}

/// PUT /api/plant-care/{id} - replace an assignment (admin only).
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i64>,
    Json(request): Json<AssignmentRequest>,
) -> Result<impl IntoResponse> {
    authz::require_admin(&actor)?;
    let updated = assignment::update_assignment(&state.db, id, request.into()).await?;
    Ok(Json(json!({ "plantCare": updated })))
}

/// DELETE /api/plant-care/{id} - delete an assignment (admin only).
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    authz::require_admin(&actor)?;
    assignment::delete_assignment(&state.db, id).await?;
    Ok(Json(
        json!({ "message": "Plant care assignment deleted successfully" }),
    ))
}
