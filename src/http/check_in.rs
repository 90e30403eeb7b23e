//! Check-in endpoints.

use crate::{
    core::checkin,
    errors::Result,
    http::{
        AppState,
        session::{CurrentUser, MaybeUser},
    },
};
use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use serde_json::json;

/// Request body for recording a check-in.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    plant_id: i64,
    notes: Option<String>,
    image_url: Option<String>,
}

/// GET /api/check-in - all check-ins; empty without a session.
pub async fn list(
    State(state): State<AppState>,
    MaybeUser(actor): MaybeUser,
) -> Result<impl IntoResponse> {
    if actor.is_none() {
        return Ok(Json(json!({ "checkIns": [] })));
    }

    let check_ins = checkin::list_check_ins(&state.db).await?;
    Ok(Json(json!({ "checkIns": check_ins })))
}

/// POST /api/check-in - record a care event (assignment gate applies).
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Json(request): Json<CheckInRequest>,
) -> Result<impl IntoResponse> {
    let created = checkin::record_check_in(
        &state.db,
        &actor,
        request.plant_id,
        request.notes,
        request.image_url,
    )
    .await?;
    Ok((StatusCode::CREATED, Json(json!({ "checkIn": created }))))
}
