//! `CheckIn` entity - One recorded care event against a plant.
//!
//! Append-only: check-ins are never updated or deleted through the API.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Check-in database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "check_ins")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the check-in
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Member who recorded the care event
    pub user_id: i64,
    /// Plant the care event was for
    pub plant_id: i64,
    /// Optional notes about the visit
    pub notes: Option<String>,
    /// Optional photo URL
    pub image_url: Option<String>,
    /// When the check-in was recorded
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `CheckIn` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each check-in belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Each check-in targets one plant
    #[sea_orm(
        belongs_to = "super::plant::Entity",
        from = "Column::PlantId",
        to = "super::plant::Column::Id"
    )]
    Plant,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::plant::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Plant.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
