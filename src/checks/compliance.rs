//! Combined overdue state for the reminder surfaces.

use chrono::NaiveDate;

use crate::poses::Pose;
use crate::records::{ProgressPhoto, WeightLogEntry};

use super::photos::{next_photo_check, PHOTO_CHECK_INTERVAL_DAYS};
use super::weight::{next_weight_check, WEIGHT_CHECK_INTERVAL_DAYS};

/// Freshness of the latest photo for one required pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoseStatus {
    pub pose: Pose,
    /// Check date of the latest photo for this pose, if any exists.
    pub latest: Option<NaiveDate>,
    pub present: bool,
    /// The latest photo is at most 28 days old.
    pub recent: bool,
}

/// Derived compliance snapshot. Recomputed on every load, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComplianceState {
    pub next_weight_check: NaiveDate,
    pub next_photo_check: NaiveDate,
    pub weight_overdue: bool,
    pub photos_overdue: bool,
    /// Per-pose breakdown in catalog order.
    pub per_pose: Vec<PoseStatus>,
}

/// Latest photo of the given pose, by check date.
pub fn latest_for_pose<'a>(photos: &'a [ProgressPhoto], pose: Pose) -> Option<&'a ProgressPhoto> {
    photos
        .iter()
        .filter(|photo| photo.pose == pose)
        .max_by_key(|photo| photo.check_date)
}

/// Evaluate both periodic checks against `today`.
///
/// The weight check is overdue with no history or when the last log is more
/// than 7 whole days old. The photo check is overdue unless every required
/// pose has a photo at most 28 days old; a single stale or missing pose
/// flips the whole check, with `per_pose` keeping the detail.
pub fn evaluate(
    weight_history: &[WeightLogEntry],
    photos: &[ProgressPhoto],
    required: &[Pose],
    today: NaiveDate,
) -> ComplianceState {
    let weight_overdue = match weight_history.iter().map(|entry| entry.log_date).max() {
        Some(latest) => (today - latest).num_days() > WEIGHT_CHECK_INTERVAL_DAYS,
        None => true,
    };

    let per_pose: Vec<PoseStatus> = required
        .iter()
        .map(|&pose| {
            let latest = latest_for_pose(photos, pose).map(|photo| photo.check_date);
            let recent = latest
                .is_some_and(|date| (today - date).num_days() <= PHOTO_CHECK_INTERVAL_DAYS);
            PoseStatus {
                pose,
                latest,
                present: latest.is_some(),
                recent,
            }
        })
        .collect();

    let photos_overdue = !per_pose.iter().all(|status| status.present && status.recent);

    ComplianceState {
        next_weight_check: next_weight_check(weight_history, today),
        next_photo_check: next_photo_check(photos, required, today),
        weight_overdue,
        photos_overdue,
        per_pose,
    }
}
