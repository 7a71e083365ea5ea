//! Periodic check scheduling and compliance evaluation.
//!
//! Pure functions over already-fetched records. "Today" is always an
//! explicit parameter so the schedules are deterministic under test.

pub mod compliance;
pub mod photos;
pub mod weight;

pub use compliance::{evaluate, latest_for_pose, ComplianceState, PoseStatus};
pub use photos::{last_complete_check, next_photo_check, PHOTO_CHECK_INTERVAL_DAYS};
pub use weight::{next_weight_check, WEIGHT_CHECK_INTERVAL_DAYS};
