//! `AuthSession` entity - An opaque bearer token backing a login session.
//!
//! Login inserts a row, logout deletes it, and every authenticated request
//! resolves its token back to the owning user.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Auth session database model
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "auth_sessions")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Opaque bearer token presented by the client
    #[sea_orm(unique)]
    pub token: String,
    /// User this session belongs to
    pub user_id: i64,
    /// When the session was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between `AuthSession` and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// Each session belongs to one user
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
