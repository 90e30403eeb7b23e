//! Plant entity - Represents one plant under the club's care.
//!
//! Care metadata (watering amount/schedule, free-form notes) is optional and
//! shown on the plant's page. Plants own assignments and check-ins.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Plant database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plants")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the plant
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Plant name (unique by convention, not enforced)
    pub name: String,
    /// Optional description shown on the plant's page
    pub description: Option<String>,
    /// Optional image URL
    pub image_url: Option<String>,
    /// How much water the plant needs (free text, e.g. "200ml")
    pub water_amount: Option<String>,
    /// How often the plant needs water (free text, e.g. "every 2 days")
    pub water_schedule: Option<String>,
    /// Free-form care notes
    pub care_notes: Option<String>,
    /// When the record was created
    pub created_at: DateTimeUtc,
    /// When the record was last modified
    pub updated_at: DateTimeUtc,
}

/// Defines relationships between Plant and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One plant has many care assignments
    #[sea_orm(has_many = "super::plant_care::Entity")]
    PlantCare,
    /// One plant has many check-ins
    #[sea_orm(has_many = "super::check_in::Entity")]
    CheckIns,
}

impl Related<super::plant_care::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::PlantCare.def()
    }
}

impl Related<super::check_in::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CheckIns.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
