//! Check-in Recorder - records care events, enforcing the assignment gate.
//!
//! A member may only check in on a plant they hold an active assignment
//! for; administrators are exempt. Check-ins are append-only and a user may
//! record any number of them per day; the scheduler only asks whether at
//! least one exists.

use crate::{
    core::{assignment, authz::Actor, user::UserSummary},
    entities::{CheckIn, Plant, User, check_in, plant},
    errors::{Error, Result},
};
use chrono::{Days, NaiveDate, NaiveTime, Utc};
use sea_orm::{LoaderTrait, QueryOrder, Set, prelude::*};
use serde::Serialize;

/// A check-in with its plant and user summary joined for display.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInDetails {
    /// The check-in row itself
    #[serde(flatten)]
    pub check_in: check_in::Model,
    /// The plant the care event was for
    pub plant: Option<plant::Model>,
    /// The member who recorded it
    pub user: Option<UserSummary>,
}

/// Records a care event against a plant.
///
/// Non-admin actors must hold an active assignment for the plant at the
/// time of the call; otherwise the operation fails with `Forbidden` before
/// anything is written.
pub async fn record_check_in(
    db: &DatabaseConnection,
    actor: &Actor,
    plant_id: i64,
    notes: Option<String>,
    image_url: Option<String>,
) -> Result<CheckInDetails> {
    if Plant::find_by_id(plant_id).one(db).await?.is_none() {
        return Err(Error::not_found("plant"));
    }

    if !actor.role.is_admin() {
        let active =
            assignment::find_active_assignment(db, actor.id, plant_id, Utc::now()).await?;
        if active.is_none() {
            return Err(Error::forbidden(
                "You are not assigned to care for this plant",
            ));
        }
    }

    let check_in = check_in::ActiveModel {
        user_id: Set(actor.id),
        plant_id: Set(plant_id),
        notes: Set(notes),
        image_url: Set(image_url),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let created = check_in.insert(db).await?;
    with_details(db, created).await
}

/// Retrieves all check-ins, newest first, with summaries joined.
pub async fn list_check_ins(db: &DatabaseConnection) -> Result<Vec<CheckInDetails>> {
    let check_ins = CheckIn::find()
        .order_by_desc(check_in::Column::CreatedAt)
        .all(db)
        .await?;

    let plants = check_ins.load_one(Plant, db).await?;
    let users = check_ins.load_one(User, db).await?;

    Ok(check_ins
        .into_iter()
        .zip(plants)
        .zip(users)
        .map(|((check_in, found_plant), found_user)| CheckInDetails {
            check_in,
            plant: found_plant,
            user: found_user.map(UserSummary::from),
        })
        .collect())
}

/// Whether (user, plant) has at least one check-in during `day` (UTC).
///
/// The window is `[day 00:00, day+1 00:00)`.
pub async fn has_checked_in_on(
    db: &DatabaseConnection,
    user_id: i64,
    plant_id: i64,
    day: NaiveDate,
) -> Result<bool> {
    let window_start = day.and_time(NaiveTime::MIN).and_utc();
    let window_end = (day + Days::new(1)).and_time(NaiveTime::MIN).and_utc();

    let count = CheckIn::find()
        .filter(check_in::Column::UserId.eq(user_id))
        .filter(check_in::Column::PlantId.eq(plant_id))
        .filter(check_in::Column::CreatedAt.gte(window_start))
        .filter(check_in::Column::CreatedAt.lt(window_end))
        .count(db)
        .await?;

    Ok(count > 0)
}

async fn with_details(db: &DatabaseConnection, check_in: check_in::Model) -> Result<CheckInDetails> {
    let found_plant = check_in.find_related(Plant).one(db).await?;
    let found_user = check_in
        .find_related(User)
        .one(db)
        .await?
        .map(UserSummary::from);
    Ok(CheckInDetails {
        check_in,
        plant: found_plant,
        user: found_user,
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::{
        entities::UserRole,
        test_utils::{actor_for, create_test_assignment, create_test_plant, create_test_user,
            setup_test_db},
    };
    use chrono::Duration;

    #[tokio::test]
    async fn test_unassigned_member_is_forbidden() -> Result<()> {
        let db = setup_test_db().await?;
        let member = create_test_user(&db, "Ana", "ana@club.test", UserRole::Member).await?;
        let plant = create_test_plant(&db, "Basil").await?;

        let result = record_check_in(&db, &actor_for(&member), plant.id, None, None).await;
        assert!(matches!(result.unwrap_err(), Error::Forbidden { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_assigned_member_can_check_in() -> Result<()> {
        let db = setup_test_db().await?;
        let member = create_test_user(&db, "Ana", "ana@club.test", UserRole::Member).await?;
        let plant = create_test_plant(&db, "Basil").await?;
        create_test_assignment(&db, member.id, plant.id, Utc::now() - Duration::days(1), None)
            .await?;

        let details = record_check_in(
            &db,
            &actor_for(&member),
            plant.id,
            Some("watered well".to_string()),
            None,
        )
        .await?;

        assert_eq!(details.check_in.user_id, member.id);
        assert_eq!(details.check_in.notes.as_deref(), Some("watered well"));
        assert_eq!(details.plant.unwrap().id, plant.id);
        assert_eq!(details.user.unwrap().id, member.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_expired_assignment_is_forbidden() -> Result<()> {
        let db = setup_test_db().await?;
        let member = create_test_user(&db, "Ana", "ana@club.test", UserRole::Member).await?;
        let plant = create_test_plant(&db, "Basil").await?;
        let now = Utc::now();
        create_test_assignment(
            &db,
            member.id,
            plant.id,
            now - Duration::days(10),
            Some(now - Duration::days(2)),
        )
        .await?;

        let result = record_check_in(&db, &actor_for(&member), plant.id, None, None).await;
        assert!(matches!(result.unwrap_err(), Error::Forbidden { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_admin_is_exempt_from_assignment_gate() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = create_test_user(&db, "Root", "root@club.test", UserRole::Admin).await?;
        let plant = create_test_plant(&db, "Basil").await?;

        let details = record_check_in(&db, &actor_for(&admin), plant.id, None, None).await?;
        assert_eq!(details.check_in.user_id, admin.id);

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_plant_not_found() -> Result<()> {
        let db = setup_test_db().await?;
        let admin = create_test_user(&db, "Root", "root@club.test", UserRole::Admin).await?;

        let result = record_check_in(&db, &actor_for(&admin), 999, None, None).await;
        assert!(matches!(result.unwrap_err(), Error::NotFound { .. }));

        Ok(())
    }

    #[tokio::test]
    async fn test_multiple_check_ins_per_day_allowed() -> Result<()> {
        let db = setup_test_db().await?;
        let member = create_test_user(&db, "Ana", "ana@club.test", UserRole::Member).await?;
        let plant = create_test_plant(&db, "Basil").await?;
        create_test_assignment(&db, member.id, plant.id, Utc::now() - Duration::days(1), None)
            .await?;

        record_check_in(&db, &actor_for(&member), plant.id, None, None).await?;
        record_check_in(&db, &actor_for(&member), plant.id, None, None).await?;

        let all = list_check_ins(&db).await?;
        assert_eq!(all.len(), 2);
        assert!(has_checked_in_on(&db, member.id, plant.id, Utc::now().date_naive()).await?);

        Ok(())
    }

    #[tokio::test]
    async fn test_has_checked_in_on_windows_by_day() -> Result<()> {
        let db = setup_test_db().await?;
        let member = create_test_user(&db, "Ana", "ana@club.test", UserRole::Member).await?;
        let plant = create_test_plant(&db, "Basil").await?;
        let member_actor = actor_for(&member);

        let today = Utc::now().date_naive();
        assert!(!has_checked_in_on(&db, member.id, plant.id, today).await?);

        create_test_assignment(&db, member.id, plant.id, Utc::now() - Duration::days(1), None)
            .await?;
        record_check_in(&db, &member_actor, plant.id, None, None).await?;

        assert!(has_checked_in_on(&db, member.id, plant.id, today).await?);
        // Yesterday's window does not see today's check-in
        assert!(!has_checked_in_on(&db, member.id, plant.id, today - Days::new(1)).await?);

        Ok(())
    }
}
