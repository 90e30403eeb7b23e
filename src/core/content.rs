//! Site content business logic.
//!
//! A per-key document store for editable site copy. Reads are public;
//! the upsert is reached through an admin-gated endpoint and creates the
//! document when the key does not exist yet.

use crate::{
    entities::{SiteContent, site_content},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all content documents, ordered by key.
pub async fn list_contents(db: &DatabaseConnection) -> Result<Vec<site_content::Model>> {
    SiteContent::find()
        .order_by_asc(site_content::Column::Key)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Finds a content document by key.
pub async fn get_content(
    db: &DatabaseConnection,
    key: &str,
) -> Result<Option<site_content::Model>> {
    SiteContent::find()
        .filter(site_content::Column::Key.eq(key))
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates or replaces the document stored under `key`.
pub async fn upsert_content(
    db: &DatabaseConnection,
    key: &str,
    title: String,
    content: String,
    image_url: Option<String>,
) -> Result<site_content::Model> {
    let now = Utc::now();
    let existing = SiteContent::find()
        .filter(site_content::Column::Key.eq(key))
        .one(db)
        .await?;

    let updated = if let Some(found) = existing {
        let mut active: site_content::ActiveModel = found.into();
        active.title = Set(title);
        active.content = Set(content);
        active.image_url = Set(image_url);
        active.updated_at = Set(now);
        active.update(db).await?
    } else {
        let new_content = site_content::ActiveModel {
            key: Set(key.to_string()),
            title: Set(title),
            content: Set(content),
            image_url: Set(image_url),
            updated_at: Set(now),
            ..Default::default()
        };
        new_content.insert(db).await?
    };

    Ok(updated)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;
    use sea_orm::PaginatorTrait;

    #[tokio::test]
    async fn test_upsert_creates_then_updates() -> Result<()> {
        let db = setup_test_db().await?;

        assert!(get_content(&db, "about").await?.is_none());

        let created = upsert_content(
            &db,
            "about",
            "About".to_string(),
            "We grow things.".to_string(),
            None,
        )
        .await?;
        assert_eq!(created.key, "about");

        let updated = upsert_content(
            &db,
            "about",
            "About us".to_string(),
            "We still grow things.".to_string(),
            Some("/img/garden.jpg".to_string()),
        )
        .await?;
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "About us");
        assert_eq!(updated.image_url.as_deref(), Some("/img/garden.jpg"));

        // Only one row for the key
        let count = SiteContent::find().count(&db).await?;
        assert_eq!(count, 1);

        Ok(())
    }

    #[tokio::test]
    async fn test_list_contents_ordered_by_key() -> Result<()> {
        let db = setup_test_db().await?;
        upsert_content(&db, "home", "Home".to_string(), "hi".to_string(), None).await?;
        upsert_content(&db, "about", "About".to_string(), "us".to_string(), None).await?;

        let contents = list_contents(&db).await?;
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].key, "about");
        assert_eq!(contents[1].key, "home");

        Ok(())
    }
}
