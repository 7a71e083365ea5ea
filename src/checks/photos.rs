//! Four-week photo check scheduling.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate};

use crate::poses::Pose;
use crate::records::ProgressPhoto;

/// Days between complete photo checks.
pub const PHOTO_CHECK_INTERVAL_DAYS: i64 = 28;

/// Most recent date on which every required pose was photographed.
///
/// Dates with only a partial pose set do not count, no matter how recent.
pub fn last_complete_check(photos: &[ProgressPhoto], required: &[Pose]) -> Option<NaiveDate> {
    let mut poses_by_date: BTreeMap<NaiveDate, BTreeSet<Pose>> = BTreeMap::new();
    for photo in photos {
        poses_by_date
            .entry(photo.check_date)
            .or_default()
            .insert(photo.pose);
    }

    poses_by_date
        .iter()
        .rev()
        .find(|(_, poses)| required.iter().all(|pose| poses.contains(pose)))
        .map(|(date, _)| *date)
}

/// Next date a complete photo check is due.
///
/// 28 days after the last complete check, clamped to `today` when already
/// past. No photos at all, or no complete check yet, means due immediately.
pub fn next_photo_check(photos: &[ProgressPhoto], required: &[Pose], today: NaiveDate) -> NaiveDate {
    match last_complete_check(photos, required) {
        Some(last) => (last + Duration::days(PHOTO_CHECK_INTERVAL_DAYS)).max(today),
        None => today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::poses::required_poses;
    use crate::records::Gender;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn photo(pose: Pose, date: &str) -> ProgressPhoto {
        ProgressPhoto {
            id: None,
            user_id: "u1".to_string(),
            pose,
            photo_url: format!("http://store/{}-{}.jpg", pose.as_str(), date),
            check_date: d(date),
        }
    }

    fn complete_set(date: &str, required: &[Pose]) -> Vec<ProgressPhoto> {
        required.iter().map(|&pose| photo(pose, date)).collect()
    }

    #[test]
    fn test_no_photos_is_due_today() {
        let required = required_poses(Gender::Female);
        assert_eq!(next_photo_check(&[], &required, d("2024-03-01")), d("2024-03-01"));
    }

    #[test]
    fn test_complete_check_schedules_four_weeks_out() {
        let required = required_poses(Gender::Unspecified);
        let photos = complete_set("2024-03-01", &required);
        assert_eq!(last_complete_check(&photos, &required), Some(d("2024-03-01")));
        assert_eq!(
            next_photo_check(&photos, &required, d("2024-03-05")),
            d("2024-03-29")
        );
    }

    #[test]
    fn test_incomplete_date_does_not_count() {
        let required = required_poses(Gender::Unspecified);
        // Complete set on 03-01, a single newer photo on 03-15.
        let mut photos = complete_set("2024-03-01", &required);
        photos.push(photo(Pose::FrontArmsDown, "2024-03-15"));

        assert_eq!(last_complete_check(&photos, &required), Some(d("2024-03-01")));
        assert_eq!(
            next_photo_check(&photos, &required, d("2024-03-16")),
            d("2024-03-29")
        );
    }

    #[test]
    fn test_no_complete_check_is_due_today() {
        let required = required_poses(Gender::Male);
        // Missing the male-specific biceps poses.
        let photos = complete_set("2024-03-01", &required_poses(Gender::Unspecified));
        assert_eq!(last_complete_check(&photos, &required), None);
        assert_eq!(next_photo_check(&photos, &required, d("2024-03-02")), d("2024-03-02"));
    }

    #[test]
    fn test_overdue_clamps_to_today() {
        let required = required_poses(Gender::Unspecified);
        let photos = complete_set("2024-01-01", &required);
        // 01-01 + 28 = 01-29, long past.
        assert_eq!(next_photo_check(&photos, &required, d("2024-04-01")), d("2024-04-01"));
    }

    #[test]
    fn test_most_recent_complete_check_wins() {
        let required = required_poses(Gender::Unspecified);
        let mut photos = complete_set("2024-01-01", &required);
        photos.extend(complete_set("2024-02-01", &required));
        assert_eq!(last_complete_check(&photos, &required), Some(d("2024-02-01")));
    }
}
