//! Unified error types for the portal backend.
//!
//! The variants mirror how failures surface at the API boundary: missing or
//! invalid sessions, insufficient privilege, absent entities, rejected input,
//! and opaque store failures. The HTTP layer maps each variant to a status
//! code in one place.

use thiserror::Error;

/// All failure modes the crate surfaces.
#[derive(Debug, Error)]
pub enum Error {
    /// No session, or the presented token does not resolve to a user.
    #[error("unauthorized")]
    Unauthorized,

    /// Authenticated but lacking the role or ownership the operation needs.
    #[error("forbidden: {message}")]
    Forbidden {
        /// Human-readable reason shown to the caller
        message: String,
    },

    /// A referenced entity does not exist.
    #[error("{what} not found")]
    NotFound {
        /// Which entity was looked up (e.g. "plant", "user")
        what: String,
    },

    /// Input rejected before any write was attempted.
    #[error("validation error: {message}")]
    Validation {
        /// What was wrong with the input
        message: String,
    },

    /// Bad or missing configuration (env vars, seed file).
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong with the configuration
        message: String,
    },

    /// Underlying persistence failure, opaque to the caller.
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Password hashing/verification failure.
    #[error("password hash error: {0}")]
    PasswordHash(#[from] bcrypt::BcryptError),

    /// JSON (de)serialization failure for stored columns.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error (seed file, listener socket).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Environment variable error.
    #[error("environment variable error: {0}")]
    EnvVar(#[from] std::env::VarError),
}

impl Error {
    /// Shorthand for a [`Error::Forbidden`] with the given reason.
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden {
            message: message.into(),
        }
    }

    /// Shorthand for a [`Error::NotFound`] naming the missing entity.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Shorthand for a [`Error::Validation`] with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
