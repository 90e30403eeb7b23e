//! Runtime settings loaded from environment variables.
//!
//! Everything the server needs beyond the database URL: where to listen,
//! the public site URL used in reminder emails, and the shared secret that
//! protects the reminder-trigger endpoint.

use crate::errors::{Error, Result};

/// Runtime settings for the server process.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Socket address the HTTP server binds to
    pub bind_addr: String,
    /// Public base URL of the portal, used for links in reminder emails
    pub site_url: String,
    /// Shared secret required by the reminder-trigger endpoint
    pub cron_secret: String,
}

impl Settings {
    /// Loads settings from the environment.
    ///
    /// `BIND_ADDR` and `SITE_URL` have local-development defaults;
    /// `CRON_SECRET` is required so the reminder endpoint is never
    /// accidentally left open.
    pub fn from_env() -> Result<Self> {
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let site_url =
            std::env::var("SITE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let cron_secret = std::env::var("CRON_SECRET").map_err(|_| Error::Config {
            message: "CRON_SECRET must be set to protect the reminder endpoint".to_string(),
        })?;

        Ok(Self {
            bind_addr,
            site_url,
            cron_secret,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_construction() {
        let settings = Settings {
            bind_addr: "127.0.0.1:0".to_string(),
            site_url: "http://localhost:3000".to_string(),
            cron_secret: "secret".to_string(),
        };
        assert_eq!(settings.bind_addr, "127.0.0.1:0");
        assert_eq!(settings.cron_secret, "secret");
    }
}
