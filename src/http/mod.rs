//! HTTP layer - axum routes over the core operations.
//!
//! Handlers stay thin: extract the session, gate the call, delegate to
//! `core`, and wrap the result in the response envelope the frontend
//! expects. Error mapping to status codes lives in [`error`].

/// Activity feed endpoints
pub mod activity;
/// Check-in endpoints
pub mod check_in;
/// Site content endpoints
pub mod content;
/// Reminder trigger endpoint
pub mod cron;
/// Error-to-response mapping
pub mod error;
/// Plant-care assignment endpoints
pub mod plant_care;
/// Plant record endpoints
pub mod plants;
/// Session extraction from bearer tokens
pub mod session;
/// Registration, login, and admin user management endpoints
pub mod users;

use crate::{config::settings::Settings, mailer::Mailer};
use axum::{
    Router,
    routing::{delete, get, post},
};
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

/// Shared state available to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: DatabaseConnection,
    /// Email delivery collaborator
    pub mailer: Arc<dyn Mailer>,
    /// Runtime settings
    pub settings: Arc<Settings>,
}

/// Builds the full API router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/plant-care",
            get(plant_care::list).post(plant_care::create),
        )
        .route(
            "/api/plant-care/:id",
            get(plant_care::get_one)
                .put(plant_care::update)
                .delete(plant_care::remove),
        )
        .route("/api/check-in", get(check_in::list).post(check_in::create))
        .route(
            "/api/cron/send-reminders",
            get(cron::send_reminders).post(cron::send_reminders),
        )
        .route("/api/activity", get(activity::list).post(activity::create))
        .route("/api/activity/:id", delete(activity::remove))
        .route("/api/activity/:id/like", post(activity::like))
        .route("/api/plants", get(plants::list).post(plants::create))
        .route(
            "/api/plants/:id",
            get(plants::get_one).put(plants::update).delete(plants::remove),
        )
        .route("/api/register", post(users::register))
        .route("/api/login", post(users::login))
        .route("/api/logout", post(users::logout))
        .route("/api/admin/users", get(users::list).post(users::create))
        .route(
            "/api/admin/users/:id",
            get(users::get_one).put(users::update).delete(users::remove),
        )
        .route("/api/site-content", get(content::list))
        .route(
            "/api/site-content/:key",
            get(content::get_one).put(content::update),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}
