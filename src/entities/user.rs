//! User entity - Represents a club account.
//!
//! Each user has a display name, unique email, bcrypt-hashed password, and a
//! role controlling what the portal lets them do. Users own plant-care
//! assignments, check-ins, and auth sessions.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role of a club account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    /// Regular club member
    #[sea_orm(string_value = "MEMBER")]
    Member,
    /// Administrator with full access
    #[sea_orm(string_value = "ADMIN")]
    Admin,
    /// Read-only visitor account
    #[sea_orm(string_value = "GUEST")]
    Guest,
}

impl UserRole {
    /// Whether this role carries administrator privilege.
    #[must_use]
    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name shown across the portal
    pub name: String,
    /// Login email, unique across accounts
    #[sea_orm(unique)]
    pub email: String,
    /// Bcrypt password hash; never serialized into API responses
    #[serde(skip_serializing)]
    pub password: String,
    /// Account role: MEMBER, ADMIN, or GUEST
    pub role: UserRole,
    /// When the account was created
    pub created_at: DateTimeUtc,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    /// One user holds many plant-care assignments
    #[sea_orm(has_many = "super::plant_care::Entity")]
    PlantCare,
    /// One user records many check-ins
    #[sea_orm(has_many = "super::check_in::Entity")]
    CheckIns,
    /// One user may have several live auth sessions
    #[sea_orm(has_many = "super::auth_session::Entity")]
    AuthSessions,
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

impl Related<super::auth_session::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AuthSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
