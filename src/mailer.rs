//! Outbound email collaborator.
//!
//! The portal only needs one contract from its mail transport: send a
//! subject and HTML body to one address and report whether delivery was
//! accepted. The [`Mailer`] trait captures that contract; the reminder
//! scheduler treats a failed send as data, never as a reason to abort.
//!
//! [`LogMailer`] is the default implementation: it records the send through
//! `tracing` and reports success, which keeps local development and the
//! reminder pass fully functional without SMTP credentials. Deployments
//! wire in a real transport behind the same trait.

use async_trait::async_trait;
use tracing::info;
use uuid::Uuid;

/// Result of one delivery attempt.
#[derive(Debug, Clone)]
pub enum SendOutcome {
    /// The transport accepted the message.
    Sent {
        /// Transport-assigned message id
        message_id: String,
    },
    /// The transport rejected the message or was unreachable.
    Failed {
        /// Why delivery failed
        error: String,
    },
}

impl SendOutcome {
    /// Whether the message was accepted.
    #[must_use]
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent { .. })
    }
}

/// Contract for the email delivery collaborator.
#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends one HTML email. Never returns `Err`; delivery failure is an
    /// outcome, not an error, so batch callers can keep going.
    async fn send(&self, to: &str, subject: &str, html_body: &str) -> SendOutcome;
}

/// Default mailer that logs sends instead of delivering them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, to: &str, subject: &str, _html_body: &str) -> SendOutcome {
        let message_id = Uuid::new_v4().to_string();
        info!(%to, %subject, %message_id, "email send (log transport)");
        SendOutcome::Sent { message_id }
    }
}

/// Builds the subject line for a care reminder.
#[must_use]
pub fn reminder_subject(plant_name: &str, is_today: bool) -> String {
    if is_today {
        format!("Reminder: Water {plant_name} Today")
    } else {
        format!("Reminder: Water {plant_name} Tomorrow")
    }
}

/// Builds the HTML body for a care reminder, greeting the member by name
/// and linking back to the portal dashboard.
#[must_use]
pub fn reminder_body(user_name: &str, plant_name: &str, is_today: bool, site_url: &str) -> String {
    let day = if is_today { "today" } else { "tomorrow" };
    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #22c55e;">Gardening Club</h2>
  <p>Hello {user_name},</p>
  <p>This is a friendly reminder that you are assigned to water <strong>{plant_name}</strong> {day}.</p>
  <p>Please don't forget to check in on the plant and record your activity on our platform.</p>
  <div style="margin: 30px 0;">
    <a href="{site_url}/dashboard" style="background-color: #22c55e; color: white; padding: 10px 20px; text-decoration: none; border-radius: 5px;">Go to Dashboard</a>
  </div>
  <p>Thank you for your contribution to our gardening club!</p>
  <p>Best regards,<br>Gardening Club</p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reminder_subject() {
        assert_eq!(
            reminder_subject("Basil", true),
            "Reminder: Water Basil Today"
        );
        assert_eq!(
            reminder_subject("Basil", false),
            "Reminder: Water Basil Tomorrow"
        );
    }

    #[test]
    fn test_reminder_body_contents() {
        let body = reminder_body("Ana", "Snake Plant", true, "https://club.example");
        assert!(body.contains("Hello Ana,"));
        assert!(body.contains("<strong>Snake Plant</strong> today"));
        assert!(body.contains("https://club.example/dashboard"));

        let body = reminder_body("Ana", "Snake Plant", false, "https://club.example");
        assert!(body.contains("tomorrow"));
    }

    #[tokio::test]
    async fn test_log_mailer_reports_sent() {
        let outcome = LogMailer.send("a@b.c", "subject", "<p>hi</p>").await;
        assert!(outcome.is_sent());
    }
}
