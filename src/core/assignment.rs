//! Assignment Manager - CRUD over plant-care assignments plus the
//! active-assignment query used by the Reminder Scheduler and the Check-in
//! Recorder.
//!
//! An assignment is active at instant `t` iff its start date is at or
//! before `t` and its end date is either absent (ongoing) or at or after
//! `t`. Overlapping assignments are allowed; where one must be chosen, the
//! most recently created (highest id) wins.

use crate::{
    core::user::UserSummary,
    entities::{Plant, PlantCare, User, plant, plant_care},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{Condition, LoaderTrait, QueryOrder, Set, prelude::*};
use serde::Serialize;

/// Editable fields of an assignment, shared by create and update.
#[derive(Debug, Clone)]
pub struct AssignmentInput {
    /// Member responsible for the plant
    pub user_id: i64,
    /// Plant being cared for
    pub plant_id: i64,
    /// First instant the assignment is in force
    pub start_date: DateTime<Utc>,
    /// Last instant the assignment is in force; None means ongoing
    pub end_date: Option<DateTime<Utc>>,
    /// Kind of care task; defaults to "Watering" when absent
    pub task_type: Option<String>,
    /// Optional notes for the assignee
    pub notes: Option<String>,
}

/// An assignment with its plant and (for admin views) user summary joined.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDetails {
    /// The assignment row itself
    #[serde(flatten)]
    pub assignment: plant_care::Model,
    /// The plant being cared for
    pub plant: Option<plant::Model>,
    /// The responsible member; omitted in member-scoped listings
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<UserSummary>,
}

/// Which rows a listing should return.
#[derive(Debug, Clone, Copy)]
pub enum ListScope {
    /// Every assignment, with user summaries joined (admin view)
    All,
    /// Only the given user's assignments, user summary omitted
    ForUser(i64),
}

/// Whether `assignment` is active at instant `at`.
#[must_use]
pub fn is_active(assignment: &plant_care::Model, at: DateTime<Utc>) -> bool {
    assignment.start_date <= at && assignment.end_date.is_none_or(|end| end >= at)
}

/// Condition matching assignments active at instant `at`.
fn active_condition(at: DateTime<Utc>) -> Condition {
    Condition::all()
        .add(plant_care::Column::StartDate.lte(at))
        .add(
            Condition::any()
                .add(plant_care::Column::EndDate.is_null())
                .add(plant_care::Column::EndDate.gte(at)),
        )
}

/// Creates a new assignment after checking that the referenced user and
/// plant exist.
pub async fn create_assignment(
    db: &DatabaseConnection,
    input: AssignmentInput,
) -> Result<AssignmentDetails> {
    ensure_references_exist(db, input.user_id, input.plant_id).await?;

    let assignment = plant_care::ActiveModel {
        user_id: Set(input.user_id),
        plant_id: Set(input.plant_id),
        start_date: Set(input.start_date),
        end_date: Set(input.end_date),
        task_type: Set(input.task_type.unwrap_or_else(|| "Watering".to_string())),
        notes: Set(input.notes),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let created = assignment.insert(db).await?;
    with_details(db, created).await
}

/// Replaces every editable field of an existing assignment.
pub async fn update_assignment(
    db: &DatabaseConnection,
    assignment_id: i64,
    input: AssignmentInput,
) -> Result<AssignmentDetails> {
    let existing = PlantCare::find_by_id(assignment_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("plant care assignment"))?;

    ensure_references_exist(db, input.user_id, input.plant_id).await?;

    let mut active: plant_care::ActiveModel = existing.into();
    active.user_id = Set(input.user_id);
    active.plant_id = Set(input.plant_id);
    active.start_date = Set(input.start_date);
    active.end_date = Set(input.end_date);
    active.task_type = Set(input.task_type.unwrap_or_else(|| "Watering".to_string()));
    active.notes = Set(input.notes);
    let updated = active.update(db).await?;
    with_details(db, updated).await
}

/// Deletes an assignment. Fails with `NotFound` if it is already gone, so a
/// second delete of the same id is an error rather than a silent no-op.
pub async fn delete_assignment(db: &DatabaseConnection, assignment_id: i64) -> Result<()> {
    let existing = PlantCare::find_by_id(assignment_id)
        .one(db)
        .await?
        .ok_or_else(|| Error::not_found("plant care assignment"))?;

    existing.delete(db).await?;
    Ok(())
}

/// Lists assignments in the given scope with their joins attached.
pub async fn list_assignments(
    db: &DatabaseConnection,
    scope: ListScope,
) -> Result<Vec<AssignmentDetails>> {
    let query = match scope {
        ListScope::All => PlantCare::find(),
        ListScope::ForUser(user_id) => {
            PlantCare::find().filter(plant_care::Column::UserId.eq(user_id))
        }
    };
    let assignments = query.all(db).await?;

    let plants = assignments.load_one(Plant, db).await?;
    let users: Vec<Option<UserSummary>> = match scope {
        ListScope::All => assignments
            .load_one(User, db)
            .await?
            .into_iter()
            .map(|found| found.map(UserSummary::from))
            .collect(),
        ListScope::ForUser(_) => vec![None; assignments.len()],
    };

    Ok(assignments
        .into_iter()
        .zip(plants)
        .zip(users)
        .map(|((assignment, found_plant), found_user)| AssignmentDetails {
            assignment,
            plant: found_plant,
            user: found_user,
        })
        .collect())
}

/// Fetches one assignment with joins, or `None`.
pub async fn get_assignment(
    db: &DatabaseConnection,
    assignment_id: i64,
) -> Result<Option<AssignmentDetails>> {
    let Some(assignment) = PlantCare::find_by_id(assignment_id).one(db).await? else {
        return Ok(None);
    };
    Ok(Some(with_details(db, assignment).await?))
}

/// Finds the active assignment for (user, plant) at instant `at`, if any.
///
/// When several overlapping assignments are active, the most recently
/// created one is returned.
pub async fn find_active_assignment(
    db: &DatabaseConnection,
    user_id: i64,
    plant_id: i64,
    at: DateTime<Utc>,
) -> Result<Option<plant_care::Model>> {
    PlantCare::find()
        .filter(plant_care::Column::UserId.eq(user_id))
        .filter(plant_care::Column::PlantId.eq(plant_id))
        .filter(active_condition(at))
        .order_by_desc(plant_care::Column::Id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// All assignments active at instant `at` (the scheduler's working set).
pub async fn active_assignments_at(
    db: &DatabaseConnection,
    at: DateTime<Utc>,
) -> Result<Vec<plant_care::Model>> {
    PlantCare::find()
        .filter(active_condition(at))
        .all(db)
        .await
        .map_err(Into::into)
}

async fn ensure_references_exist(
    db: &DatabaseConnection,
    user_id: i64,
    plant_id: i64,
) -> Result<()> {
    if User::find_by_id(user_id).one(db).await?.is_none() {
        return Err(Error::not_found("user"));
    }
    if Plant::find_by_id(plant_id).one(db).await?.is_none() {
        return Err(Error::not_found("plant"));
    }
    Ok(())
}

async fn with_details(
    db: &DatabaseConnection,
    assignment: plant_care::Model,
) -> Result<AssignmentDetails> {
    let found_plant = assignment.find_related(Plant).one(db).await?;
    let found_user = assignment
        .find_related(User)
        .one(db)
        .await?
        .map(UserSummary::from);
    Ok(AssignmentDetails {
        assignment,
        plant: found_plant,
        user: found_user,
    })
}
