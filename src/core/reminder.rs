//! Reminder Scheduler - the once-daily reminder pass.
//!
//! One linear sweep over current assignments: members assigned today who
//! have not yet checked in get a "due today" email, members assigned
//! tomorrow get a "due tomorrow" email unconditionally. Delivery failures
//! are collected per recipient and never abort the pass; the next day's run
//! naturally re-attempts because the check-in-exists test will again come
//! up empty.
//!
//! The pass is stateless between runs: everything it needs it reads from
//! the `PlantCare` and `CheckIn` tables at call time.

use crate::{
    core::{assignment, checkin},
    entities::{Plant, User, plant, plant_care, user},
    errors::Result,
    mailer::{self, Mailer, SendOutcome},
};
use chrono::{DateTime, Duration, NaiveDate, Utc};
use sea_orm::{LoaderTrait, prelude::*};
use tracing::{info, warn};

/// What happened to one assignment during the pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReminderStatus {
    /// The mailer accepted the reminder
    Sent,
    /// The member already checked in today, so no email was needed
    Skipped,
    /// The mailer rejected the reminder, or the joined rows were missing
    Failed(String),
}

/// Outcome for one assignment in the pass.
#[derive(Debug, Clone)]
pub struct ReminderOutcome {
    /// Assignment the outcome is for
    pub assignment_id: i64,
    /// Member that was (or would have been) reminded
    pub user_id: i64,
    /// Plant the reminder names
    pub plant_id: i64,
    /// What happened
    pub status: ReminderStatus,
}

/// Result of one full reminder pass.
#[derive(Debug, Clone)]
pub struct ReminderRunResult {
    /// Calendar day (UTC) the pass ran for
    pub run_date: NaiveDate,
    /// Outcomes for assignments active today
    pub today: Vec<ReminderOutcome>,
    /// Outcomes for assignments active tomorrow
    pub tomorrow: Vec<ReminderOutcome>,
}

impl ReminderRunResult {
    /// Number of assignments processed for today (sent, skipped, or failed).
    #[must_use]
    pub fn today_reminders(&self) -> usize {
        self.today.len()
    }

    /// Number of assignments processed for tomorrow.
    #[must_use]
    pub fn tomorrow_reminders(&self) -> usize {
        self.tomorrow.len()
    }

    /// How many of today's assignments were skipped as already checked in.
    #[must_use]
    pub fn skipped_today(&self) -> usize {
        self.today
            .iter()
            .filter(|outcome| outcome.status == ReminderStatus::Skipped)
            .count()
    }

    /// How many sends failed across both days.
    #[must_use]
    pub fn failures(&self) -> usize {
        self.today
            .iter()
            .chain(&self.tomorrow)
            .filter(|outcome| matches!(outcome.status, ReminderStatus::Failed(_)))
            .count()
    }
}

/// Runs the daily reminder pass as of `now`.
///
/// `now` is a parameter rather than read from the clock so that callers
/// (and tests) control the reference instant; the HTTP trigger passes
/// `Utc::now()`.
pub async fn run_reminder_pass(
    db: &DatabaseConnection,
    sender: &dyn Mailer,
    site_url: &str,
    now: DateTime<Utc>,
) -> Result<ReminderRunResult> {
    let today = now.date_naive();
    let tomorrow_instant = now + Duration::days(1);

    let today_assignments = assignment::active_assignments_at(db, now).await?;
    let tomorrow_assignments = assignment::active_assignments_at(db, tomorrow_instant).await?;

    info!(
        %today,
        today_count = today_assignments.len(),
        tomorrow_count = tomorrow_assignments.len(),
        "reminder pass starting"
    );

    let mut today_outcomes = Vec::with_capacity(today_assignments.len());
    for (row, found_user, found_plant) in joined(db, today_assignments).await? {
        let Some((member, target)) = found_user.zip(found_plant) else {
            today_outcomes.push(missing_join_outcome(&row));
            continue;
        };

        let status = if checkin::has_checked_in_on(db, row.user_id, row.plant_id, today).await? {
            ReminderStatus::Skipped
        } else {
            deliver(sender, &member, &target, true, site_url).await
        };
        today_outcomes.push(outcome(&row, status));
    }

    // No check-in lookback for tomorrow: there is nothing to check in on yet.
    let mut tomorrow_outcomes = Vec::with_capacity(tomorrow_assignments.len());
    for (row, found_user, found_plant) in joined(db, tomorrow_assignments).await? {
        let Some((member, target)) = found_user.zip(found_plant) else {
            tomorrow_outcomes.push(missing_join_outcome(&row));
            continue;
        };

        let status = deliver(sender, &member, &target, false, site_url).await;
        tomorrow_outcomes.push(outcome(&row, status));
    }

    let result = ReminderRunResult {
        run_date: today,
        today: today_outcomes,
        tomorrow: tomorrow_outcomes,
    };

    info!(
        today = result.today_reminders(),
        tomorrow = result.tomorrow_reminders(),
        skipped = result.skipped_today(),
        failures = result.failures(),
        "reminder pass finished"
    );

    Ok(result)
}

async fn joined(
    db: &DatabaseConnection,
    assignments: Vec<plant_care::Model>,
) -> Result<Vec<(plant_care::Model, Option<user::Model>, Option<plant::Model>)>> {
    let users = assignments.load_one(User, db).await?;
    let plants = assignments.load_one(Plant, db).await?;
    Ok(assignments
        .into_iter()
        .zip(users)
        .zip(plants)
        .map(|((row, found_user), found_plant)| (row, found_user, found_plant))
        .collect())
}

async fn deliver(
    sender: &dyn Mailer,
    member: &user::Model,
    target: &plant::Model,
    is_today: bool,
    site_url: &str,
) -> ReminderStatus {
    let subject = mailer::reminder_subject(&target.name, is_today);
    let body = mailer::reminder_body(&member.name, &target.name, is_today, site_url);

    match sender.send(&member.email, &subject, &body).await {
        SendOutcome::Sent { .. } => ReminderStatus::Sent,
        SendOutcome::Failed { error } => {
            // One bad address must not block the rest of the run
            warn!(to = %member.email, plant = %target.name, %error, "reminder send failed");
            ReminderStatus::Failed(error)
        }
    }
}

fn outcome(row: &plant_care::Model, status: ReminderStatus) -> ReminderOutcome {
    ReminderOutcome {
        assignment_id: row.id,
        user_id: row.user_id,
        plant_id: row.plant_id,
        status,
    }
}

fn missing_join_outcome(row: &plant_care::Model) -> ReminderOutcome {
    warn!(assignment_id = row.id, "assignment references a missing user or plant");
    outcome(
        row,
        ReminderStatus::Failed("user or plant record missing".to_string()),
    )
}
