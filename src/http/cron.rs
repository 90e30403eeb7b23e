//! Reminder trigger endpoint.
//!
//! Called by an external scheduler once a day. The caller must present the
//! shared secret; without it the endpoint reveals nothing and sends
//! nothing.

use crate::{
    core::reminder,
    errors::{Error, Result},
    http::AppState,
};
use axum::{Json, extract::State, http::HeaderMap, response::IntoResponse};
use chrono::Utc;
use serde_json::json;

const CRON_SECRET_HEADER: &str = "x-cron-secret";

/// GET/POST /api/cron/send-reminders - run the daily reminder pass.
pub async fn send_reminders(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse> {
    let presented = headers
        .get(CRON_SECRET_HEADER)
        .and_then(|value| value.to_str().ok());
    if presented != Some(state.settings.cron_secret.as_str()) {
        return Err(Error::Unauthorized);
    }

    let result = reminder::run_reminder_pass(
        &state.db,
        state.mailer.as_ref(),
        &state.settings.site_url,
        Utc::now(),
    )
    .await?;

    Ok(Json(json!({
        "success": true,
        "todayReminders": result.today_reminders(),
        "tomorrowReminders": result.tomorrow_reminders(),
    })))
}
