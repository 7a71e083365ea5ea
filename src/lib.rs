//! Periodic compliance tracking for fitness progress checks.
//!
//! The core is a set of pure functions over weight-log and progress-photo
//! records: when the next weekly weight check and four-week photo check are
//! due, which required poses are missing or stale, and which photos to show
//! in the first/previous/current comparison grid. All persistence lives in a
//! hosted backend reached through the [`backend`] client.

pub mod backend;
pub mod checks;
pub mod compare;
pub mod config;
pub mod logging;
pub mod poses;
pub mod records;
