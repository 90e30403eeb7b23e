//! Database configuration module for `GardenClub`.
//!
//! This module handles `SQLite` database connection and table creation using `SeaORM`.
//! It provides functions for establishing database connections and creating all necessary tables
//! based on the entity definitions. The module uses `SeaORM`'s `Schema::create_table_from_entity`
//! method to automatically generate SQL statements from the entity models, ensuring that the
//! database schema matches the Rust struct definitions without requiring manual SQL.

use crate::entities::{
    ActivityPost, AuthSession, CheckIn, Plant, PlantCare, SiteContent, User,
};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from environment variable or returns default `SQLite` path.
///
/// This function looks for `DATABASE_URL` in the environment and falls back to
/// a default local `SQLite` file if not found.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://data/gardenclub.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the `SQLite` database using the `DATABASE_URL` environment variable.
///
/// Falls back to a default local `SQLite` file if no environment variable is set.
/// This function handles connection errors and provides a clean interface for database access
/// throughout the application.
pub async fn create_connection() -> Result<DatabaseConnection> {
    Database::connect(get_database_url()).await.map_err(Into::into)
}

/// Creates all necessary database tables using `SeaORM`'s schema generation from entity definitions.
///
/// This function uses the `DeriveEntityModel` macros to automatically generate proper SQL
/// statements for table creation, ensuring the database schema matches the Rust struct
/// definitions. It creates tables for users, plants, assignments, check-ins, activity posts,
/// site content, and auth sessions.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    let statements = [
        schema.create_table_from_entity(User),
        schema.create_table_from_entity(Plant),
        schema.create_table_from_entity(PlantCare),
        schema.create_table_from_entity(CheckIn),
        schema.create_table_from_entity(ActivityPost),
        schema.create_table_from_entity(SiteContent),
        schema.create_table_from_entity(AuthSession),
    ];

    for mut statement in statements {
        statement.if_not_exists();
        db.execute(builder.build(&statement)).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        activity_post::Model as ActivityPostModel, check_in::Model as CheckInModel,
        plant::Model as PlantModel, plant_care::Model as PlantCareModel,
        site_content::Model as SiteContentModel, user::Model as UserModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<UserModel> = User::find().limit(1).all(&db).await?;
        let _: Vec<PlantModel> = Plant::find().limit(1).all(&db).await?;
        let _: Vec<PlantCareModel> = PlantCare::find().limit(1).all(&db).await?;
        let _: Vec<CheckInModel> = CheckIn::find().limit(1).all(&db).await?;
        let _: Vec<ActivityPostModel> = ActivityPost::find().limit(1).all(&db).await?;
        let _: Vec<SiteContentModel> = SiteContent::find().limit(1).all(&db).await?;
        let _: Vec<crate::entities::AuthSessionModel> =
            AuthSession::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_default_database_url() {
        // With no DATABASE_URL set the local file path is used
        if std::env::var("DATABASE_URL").is_err() {
            assert!(get_database_url().starts_with("sqlite://"));
        }
    }
}
