//! Activity feed business logic.
//!
//! Posts live server-side only; clients are caches and never authoritative.
//! The like toggle is the one read-modify-write in the portal that can race
//! under concurrent requests, so it runs inside a single database
//! transaction to keep `likes` equal to the size of `liked_by`.

use crate::{
    core::authz::{self, Actor},
    entities::{ActivityPost, activity_post},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use serde::Serialize;

/// An activity post with `liked_by` decoded for API consumers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityPostView {
    /// Post id
    pub id: i64,
    /// Post body text
    pub text: String,
    /// Optional image URL
    pub image_url: Option<String>,
    /// Like count; always equals `liked_by.len()`
    pub likes: i32,
    /// Ids of users that liked the post
    pub liked_by: Vec<i64>,
    /// When the post was created
    pub created_at: DateTime<Utc>,
    /// Author's user id, if known
    pub user_id: Option<i64>,
    /// Author's display name at posting time
    pub user_name: Option<String>,
}

impl From<activity_post::Model> for ActivityPostView {
    fn from(post: activity_post::Model) -> Self {
        let liked_by = post.liked_by_ids();
        Self {
            id: post.id,
            text: post.text,
            image_url: post.image_url,
            likes: post.likes,
            liked_by,
            created_at: post.created_at,
            user_id: post.user_id,
            user_name: post.user_name,
        }
    }
}

/// Retrieves all posts, newest first.
pub async fn list_posts(db: &DatabaseConnection) -> Result<Vec<ActivityPostView>> {
    let posts = ActivityPost::find()
        .order_by_desc(activity_post::Column::CreatedAt)
        .all(db)
        .await?;
    Ok(posts.into_iter().map(Into::into).collect())
}

/// Creates a new post authored by `actor`.
pub async fn create_post(
    db: &DatabaseConnection,
    actor: &Actor,
    text: String,
    image_url: Option<String>,
) -> Result<ActivityPostView> {
    if text.trim().is_empty() {
        return Err(Error::validation("Text is required"));
    }

    let post = activity_post::ActiveModel {
        text: Set(text.trim().to_string()),
        image_url: Set(image_url),
        likes: Set(0),
        liked_by: Set("[]".to_string()),
        created_at: Set(Utc::now()),
        user_id: Set(Some(actor.id)),
        user_name: Set(Some(actor.name.clone())),
        ..Default::default()
    };

    let created = post.insert(db).await?;
    Ok(created.into())
}

/// Deletes a post. Only the author or an administrator may do this.
pub async fn delete_post(db: &DatabaseConnection, actor: &Actor, post_id: i64) -> Result<()> {
    let post = ActivityPost::find_by_id(post_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("post"))?;

    if !authz::can_modify(actor, post.user_id) {
        return Err(Error::forbidden("You can only delete your own posts"));
    }

    post.delete(db).await?;
    Ok(())
}

/// Toggles `actor_id`'s like on a post.
///
/// Runs as one database transaction: two concurrent toggles cannot lose an
/// update, so the cached count stays equal to the set size. Returns the
/// updated post and whether it is now liked by the caller.
pub async fn toggle_like(
    db: &DatabaseConnection,
    actor_id: i64,
    post_id: i64,
) -> Result<(ActivityPostView, bool)> {
    let txn = db.begin().await?;

    let post = ActivityPost::find_by_id(post_id)
        .one(&txn)
        .await?
        .ok_or_else(|| Error::not_found("post"))?;

    let mut liked_by = post.liked_by_ids();
    let liked = if let Some(position) = liked_by.iter().position(|id| *id == actor_id) {
        liked_by.remove(position);
        false
    } else {
        liked_by.push(actor_id);
        true
    };

    let new_likes = if liked {
        post.likes + 1
    } else {
        (post.likes - 1).max(0)
    };

    let mut active: activity_post::ActiveModel = post.into();
    active.likes = Set(new_likes);
    active.liked_by = Set(serde_json::to_string(&liked_by)?);
    let updated = active.update(&txn).await?;

    txn.commit().await?;

    Ok((updated.into(), liked))
}
