//! `PlantCare` entity - A care assignment: who tends which plant, and when.
//!
//! An assignment is active at instant `t` iff `start_date <= t` and
//! `end_date` is either null (ongoing) or `>= t`. Overlapping assignments
//! for the same (user, plant) pair are permitted; the highest id wins when
//! an active one must be chosen.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Plant-care assignment database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "plant_care")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the assignment
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Member responsible for the plant
    pub user_id: i64,
    /// Plant being cared for
    pub plant_id: i64,
    /// First instant the assignment is in force
    pub start_date: DateTimeUtc,
    /// Last instant the assignment is in force; None means ongoing
    pub end_date: Option<DateTimeUtc>,
    /// Kind of care task (free text, defaults to "Watering")
    pub task_type: String,
    /// Optional notes from the admin who created the assignment
    pub notes: Option<String>,
    /// When the assignment was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `PlantCare` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each assignment belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    /// Each assignment targets one plant
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
