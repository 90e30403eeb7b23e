//! Plant record business logic.
//!
//! Reads are public; mutations are reached through admin-gated endpoints.
//! Deleting a plant takes its assignments and check-ins with it in one
//! transaction so no orphaned rows survive.

use crate::{
    entities::{CheckIn, Plant, PlantCare, check_in, plant, plant_care},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};

/// Editable fields of a plant, shared by create and update.
#[derive(Debug, Clone, Default)]
pub struct PlantInput {
    /// Plant name (required)
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional image URL
    pub image_url: Option<String>,
    /// Optional watering amount (free text)
    pub water_amount: Option<String>,
    /// Optional watering schedule (free text)
    pub water_schedule: Option<String>,
    /// Optional care notes
    pub care_notes: Option<String>,
}

/// Creates a new plant record.
pub async fn create_plant(db: &DatabaseConnection, input: PlantInput) -> Result<plant::Model> {
    if input.name.trim().is_empty() {
        return Err(Error::validation("Plant name is required"));
    }

    let now = Utc::now();
    let new_plant = plant::ActiveModel {
        name: Set(input.name.trim().to_string()),
        description: Set(input.description),
        image_url: Set(input.image_url),
        water_amount: Set(input.water_amount),
        water_schedule: Set(input.water_schedule),
        care_notes: Set(input.care_notes),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };

    let created = new_plant.insert(db).await?;
    Ok(created)
}

/// Retrieves all plants, ordered alphabetically by name.
pub async fn list_plants(db: &DatabaseConnection) -> Result<Vec<plant::Model>> {
    Plant::find()
        .order_by_asc(plant::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a plant by id.
pub async fn get_plant(db: &DatabaseConnection, plant_id: i64) -> Result<Option<plant::Model>> {
    Plant::find_by_id(plant_id).one(db).await.map_err(Into::into)
}

/// Replaces a plant's editable fields and bumps `updated_at`.
pub async fn update_plant(
    db: &DatabaseConnection,
    plant_id: i64,
    input: PlantInput,
) -> Result<plant::Model> {
    if input.name.trim().is_empty() {
        return Err(Error::validation("Plant name is required"));
    }

    let existing = Plant::find_by_id(plant_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("plant"))?;

    let mut active: plant::ActiveModel = existing.into();
    active.name = Set(input.name.trim().to_string());
    active.description = Set(input.description);
    active.image_url = Set(input.image_url);
    active.water_amount = Set(input.water_amount);
    active.water_schedule = Set(input.water_schedule);
    active.care_notes = Set(input.care_notes);
    active.updated_at = Set(Utc::now());
    let updated = active.update(db).await?;
    Ok(updated)
}

/// Deletes a plant together with its assignments and check-ins.
pub async fn delete_plant(db: &DatabaseConnection, plant_id: i64) -> Result<()> {
    let txn = db.begin().await?;

    let existing = Plant::find_by_id(plant_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::not_found("plant"))?;

    PlantCare::delete_many()
        .filter(plant_care::Column::PlantId.eq(plant_id))
        .exec(&txn)
        .await?;
    CheckIn::delete_many()
        .filter(check_in::Column::PlantId.eq(plant_id))
        .exec(&txn)
        .await?;
    existing.delete(&txn).await?;

    txn.commit().await?;
    Ok(())
}
