//! # Schedcast Core
//!
//! Domain types and logic for the stream schedule manager: the schedule
//! document model, tolerant normalization of persisted configuration,
//! 12-hour slot time math, and Discord announcement composition.
//!
//! This crate is deliberately free of I/O. Persistence lives in
//! `schedcast-store` and the HTTP surface in `schedcast-api`; both operate
//! on the types defined here.

/// 12-hour wall-clock parsing and formatting
pub mod clock;
/// Announcement message composition and template token substitution
pub mod compose;
/// Error taxonomy shared across the workspace
pub mod errors;
/// The schedule document data model
pub mod models;
/// Normalization of raw persisted data and slot defaulting
pub mod normalize;
