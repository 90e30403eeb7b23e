//! Plant record endpoints.

use crate::{
    core::{
        authz,
        plant::{self, PlantInput},
    },
    errors::{Error, Result},
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

/// Request body for creating or replacing a plant.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRequest {
    name: String,
    description: Option<String>,
    image_url: Option<String>,
    water_amount: Option<String>,
    water_schedule: Option<String>,
    care_notes: Option<String>,
}

impl From<PlantRequest> for PlantInput {
    fn from(request: PlantRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            image_url: request.image_url,
            water_amount: request.water_amount,
            water_schedule: request.water_schedule,
            care_notes: request.care_notes,
        }
    }
}

/// GET /api/plants - all plants (public).
pub async fn list(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let plants = plant::list_plants(&state.db).await?;
    Ok(Json(json!({ "plants": plants })))
}

/// POST /api/plants - create a plant (admin only).
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Json(request): Json<PlantRequest>,
) -> Result<impl IntoResponse> {
    authz::require_admin(&actor)?;
    let created = plant::create_plant(&state.db, request.into()).await?;
    Ok((StatusCode::CREATED, Json(json!({ "plant": created }))))
}

/// GET /api/plants/{id} - one plant (public).
pub async fn get_one(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    let found = plant::get_plant(&state.db, id)
        .await?
        .ok_or_else(|| Error::not_found("plant"))?;
    Ok(Json(json!({ "plant": found })))
}

/// PUT /api/plants/{id} - replace a plant's fields (admin only).
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i64>,
    Json(request): Json<PlantRequest>,
) -> Result<impl IntoResponse> {
    authz::require_admin(&actor)?;
    let updated = plant::update_plant(&state.db, id, request.into()).await?;
    Ok(Json(json!({ "plant": updated })))
}

/// DELETE /api/plants/{id} - delete a plant and its dependents (admin only).
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(actor): CurrentUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse> {
    authz::require_admin(&actor)?;
    plant::delete_plant(&state.db, id).await?;
    Ok(Json(json!({ "message": "Plant deleted successfully" })))
}
