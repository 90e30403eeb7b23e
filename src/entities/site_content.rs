//! `SiteContent` entity - Per-key editable documents for site copy.
//!
//! A generic key/value document store for marketing and informational text;
//! the `content` field sometimes holds JSON-encoded structured content that
//! the frontend interprets.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Site content database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "site_content")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Lookup key (e.g. `"home_hero"`, `"about"`)
    #[sea_orm(unique)]
    pub key: String,
    /// Document title
    pub title: String,
    /// Document body (free text, sometimes JSON-encoded)
    pub content: String,
    /// Optional image URL
    pub image_url: Option<String>,
    /// When the document was last modified
    pub updated_at: DateTimeUtc,
}

/// `SiteContent` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
