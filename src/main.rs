//! Server binary: boots the portal API.

use gardenclub::{config, http, mailer::LogMailer};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> gardenclub::errors::Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file (as early as possible)
    dotenvy::dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load runtime settings
    let settings = config::settings::Settings::from_env()
        .inspect_err(|e| error!("Failed to load settings: {e}"))?;

    // 4. Initialize database
    let db = config::database::create_connection()
        .await
        .inspect(|_| info!("Database connection opened."))
        .inspect_err(|e| error!("Failed to open database: {e}"))?;
    config::database::create_tables(&db)
        .await
        .inspect(|()| info!("Database tables ensured."))
        .inspect_err(|e| error!("Failed to create tables: {e}"))?;

    // 5. Seed initial plants and site content (if config.toml is present)
    if std::path::Path::new("config.toml").exists() {
        let seed = config::seed::load_seed_config("config.toml")?;
        config::seed::seed_initial_data(&db, &seed)
            .await
            .inspect(|()| info!("Seed data ensured."))
            .inspect_err(|e| error!("Failed to seed initial data: {e}"))?;
    }

    // 6. Serve the API
    let bind_addr = settings.bind_addr.clone();
    let state = http::AppState {
        db,
        mailer: Arc::new(LogMailer),
        settings: Arc::new(settings),
    };
    let app = http::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    info!(addr = %bind_addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
