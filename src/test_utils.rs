//! Shared test utilities for `GardenClub`.
//!
//! This module provides common helper functions for setting up test
//! databases and creating test entities with sensible defaults, plus a
//! recording mock for the email collaborator.

use crate::{
    core::authz::Actor,
    entities::{UserRole, plant, plant_care, user},
    errors::Result,
    mailer::{Mailer, SendOutcome},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sea_orm::{Set, prelude::*};
use std::sync::Mutex;
use uuid::Uuid;

/// Password every test account is created with.
pub const TEST_PASSWORD: &str = "gardening";

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Creates a test user with the given role and [`TEST_PASSWORD`].
///
/// The minimum bcrypt cost keeps test runs fast; production hashing uses
/// the default cost.
pub async fn create_test_user(
    db: &DatabaseConnection,
    name: &str,
    email: &str,
    role: UserRole,
) -> Result<user::Model> {
    let hashed = bcrypt::hash(TEST_PASSWORD, 4)?;
    let new_user = user::ActiveModel {
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password: Set(hashed),
        role: Set(role),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    Ok(new_user.insert(db).await?)
}

/// Creates a test plant with just a name.
pub async fn create_test_plant(db: &DatabaseConnection, name: &str) -> Result<plant::Model> {
    let now = Utc::now();
    let new_plant = plant::ActiveModel {
        name: Set(name.to_string()),
        description: Set(None),
        image_url: Set(None),
        water_amount: Set(None),
        water_schedule: Set(None),
        care_notes: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
        ..Default::default()
    };
    Ok(new_plant.insert(db).await?)
}

/// Creates a test assignment with the default "Watering" task type.
pub async fn create_test_assignment(
    db: &DatabaseConnection,
    user_id: i64,
    plant_id: i64,
    start_date: DateTime<Utc>,
    end_date: Option<DateTime<Utc>>,
) -> Result<plant_care::Model> {
    let new_assignment = plant_care::ActiveModel {
        user_id: Set(user_id),
        plant_id: Set(plant_id),
        start_date: Set(start_date),
        end_date: Set(end_date),
        task_type: Set("Watering".to_string()),
        notes: Set(None),
        created_at: Set(Utc::now()),
        ..Default::default()
    };
    Ok(new_assignment.insert(db).await?)
}

/// Builds the [`Actor`] a session would produce for the given user.
#[must_use]
pub fn actor_for(account: &user::Model) -> Actor {
    Actor::from(account.clone())
}

/// One message captured by [`MockMailer`].
#[derive(Debug, Clone)]
pub struct SentMessage {
    /// Recipient address
    pub to: String,
    /// Subject line
    pub subject: String,
    /// HTML body
    pub body: String,
}

/// Recording mailer for scheduler tests. Optionally fails every send to
/// one address so failure isolation can be exercised.
#[derive(Debug, Default)]
pub struct MockMailer {
    sent: Mutex<Vec<SentMessage>>,
    fail_for: Option<String>,
}

impl MockMailer {
    /// A mailer that accepts everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A mailer that rejects every send to `address`.
    #[must_use]
    pub fn failing_for(address: &str) -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_for: Some(address.to_string()),
        }
    }

    /// Everything successfully "sent" so far.
    #[must_use]
    pub fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().unwrap_or_else(std::sync::PoisonError::into_inner).clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> SendOutcome {
        if self.fail_for.as_deref() == Some(to) {
            return SendOutcome::Failed {
                error: "mailbox unavailable".to_string(),
            };
        }

        self.sent
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push(SentMessage {
                to: to.to_string(),
                subject: subject.to_string(),
                body: html_body.to_string(),
            });
        SendOutcome::Sent {
            message_id: Uuid::new_v4().to_string(),
        }
    }
}
