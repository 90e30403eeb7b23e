//! Seed data loading from config.toml
//!
//! This module provides functionality to load initial plants and site
//! content from a TOML configuration file. The records defined in
//! config.toml are used to seed the database on first run or when entries
//! are missing; existing rows are never overwritten.

use crate::{
    entities::{Plant, SiteContent, plant, site_content},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{Set, prelude::*};
use std::path::Path;
use tracing::info;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, serde::Deserialize)]
pub struct SeedConfig {
    /// Plants to create if missing
    #[serde(default)]
    pub plants: Vec<PlantSeed>,
    /// Site content documents to create if missing
    #[serde(default)]
    pub content: Vec<ContentSeed>,
}

/// Seed definition for a single plant
#[derive(Debug, Clone, serde::Deserialize)]
pub struct PlantSeed {
    /// Name of the plant
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Optional watering amount (free text)
    pub water_amount: Option<String>,
    /// Optional watering schedule (free text)
    pub water_schedule: Option<String>,
    /// Optional care notes
    pub care_notes: Option<String>,
}

/// Seed definition for a single site-content document
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ContentSeed {
    /// Lookup key
    pub key: String,
    /// Document title
    pub title: String,
    /// Document body
    pub content: String,
}

/// Loads seed configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_seed_config<P: AsRef<Path>>(path: P) -> Result<SeedConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read seed file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Seeds plants and site content that are not already present.
///
/// Plants are matched by name and content documents by key; rows that
/// already exist are left untouched so admin edits survive restarts.
pub async fn seed_initial_data(db: &DatabaseConnection, config: &SeedConfig) -> Result<()> {
    let now = Utc::now();

    for seed in &config.plants {
        let existing = Plant::find()
            .filter(plant::Column::Name.eq(seed.name.as_str()))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        let new_plant = plant::ActiveModel {
            name: Set(seed.name.clone()),
            description: Set(seed.description.clone()),
            image_url: Set(None),
            water_amount: Set(seed.water_amount.clone()),
            water_schedule: Set(seed.water_schedule.clone()),
            care_notes: Set(seed.care_notes.clone()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };
        new_plant.insert(db).await?;
        info!(plant = %seed.name, "seeded plant");
    }

    for seed in &config.content {
        let existing = SiteContent::find()
            .filter(site_content::Column::Key.eq(seed.key.as_str()))
            .one(db)
            .await?;
        if existing.is_some() {
            continue;
        }

        let new_content = site_content::ActiveModel {
            key: Set(seed.key.clone()),
            title: Set(seed.title.clone()),
            content: Set(seed.content.clone()),
            image_url: Set(None),
            updated_at: Set(now),
            ..Default::default()
        };
        new_content.insert(db).await?;
        info!(key = %seed.key, "seeded site content");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::setup_test_db;

    #[test]
    fn test_parse_seed_config() {
        let toml_str = r#"
            [[plants]]
            name = "Snake Plant"
            description = "Hardy and forgiving"
            water_amount = "200ml"
            water_schedule = "every 10 days"

            [[content]]
            key = "about"
            title = "About the club"
            content = "We grow things."
        "#;

        let config: SeedConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.plants.len(), 1);
        assert_eq!(config.plants[0].name, "Snake Plant");
        assert_eq!(config.plants[0].water_schedule.as_deref(), Some("every 10 days"));
        assert!(config.plants[0].care_notes.is_none());
        assert_eq!(config.content.len(), 1);
        assert_eq!(config.content[0].key, "about");
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() -> Result<()> {
        let db = setup_test_db().await?;
        let config: SeedConfig = toml::from_str(
            r#"
            [[plants]]
            name = "Basil"

            [[content]]
            key = "home"
            title = "Welcome"
            content = "Hello"
        "#,
        )
        .unwrap();

        seed_initial_data(&db, &config).await?;
        seed_initial_data(&db, &config).await?;

        let plants = Plant::find().all(&db).await?;
        assert_eq!(plants.len(), 1);

        let contents = SiteContent::find().all(&db).await?;
        assert_eq!(contents.len(), 1);

        Ok(())
    }
}
