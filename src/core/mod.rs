//! Core business logic - framework-agnostic portal operations.
//!
//! Everything here takes a database connection (and, where relevant, the
//! acting user) and returns plain data; the HTTP layer is a thin shell on
//! top. Authorization gates sit at the start of each operation and are
//! never deferred.

/// Activity feed - posts, deletion, and the like/unlike toggle
pub mod activity;
/// Assignment Manager - plant-care CRUD and the active-assignment query
pub mod assignment;
/// Login sessions - token issue, revoke, and per-request resolution
pub mod auth;
/// Authorization primitives - the acting user and shared predicates
pub mod authz;
/// Check-in Recorder - care-event logging with the assignment gate
pub mod checkin;
/// Site content - per-key editable documents
pub mod content;
/// Plant records - CRUD with cascading delete
pub mod plant;
/// Reminder Scheduler - the daily reminder pass
pub mod reminder;
/// User accounts - registration and admin management
pub mod user;
