/// Database connection and table creation
pub mod database;

/// Seed data loading from config.toml (initial plants and site content)
pub mod seed;

/// Runtime settings from environment variables
pub mod settings;
