//! `ActivityPost` entity - One post on the club activity feed.
//!
//! `liked_by` is a JSON-encoded array of user ids stored in a TEXT column;
//! `likes` caches its cardinality and must equal `liked_by.len()` at all
//! times. The author reference is denormalized so posts survive account
//! deletion.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Activity post database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "activity_posts")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    /// Unique identifier for the post
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Post body text
    pub text: String,
    /// Optional image URL
    pub image_url: Option<String>,
    /// Cached like count, equals the number of ids in `liked_by`
    pub likes: i32,
    /// JSON-encoded array of user ids that liked the post
    pub liked_by: String,
    /// When the post was created
    pub created_at: DateTimeUtc,
    /// Author's user id, if known
    pub user_id: Option<i64>,
    /// Author's display name at posting time
    pub user_name: Option<String>,
}

impl Model {
    /// Decodes the `liked_by` column into the set of user ids it holds.
    /// A malformed or empty column reads as no likes.
    #[must_use]
    pub fn liked_by_ids(&self) -> Vec<i64> {
        serde_json::from_str(&self.liked_by).unwrap_or_default()
    }
}

/// `ActivityPost` has no relationships with other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
