//! Record types mirroring the backend's tables.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::poses::Pose;

/// One weight measurement in kilograms.
///
/// The backend keeps at most one row per user per calendar date; submitting
/// twice on the same day updates the existing row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightLogEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub weight: f64,
    pub log_date: NaiveDate,
}

/// A progress photograph of one pose on one check date.
///
/// Immutable after upload. Several photos may share a check date (different
/// poses) or a pose (different dates).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPhoto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub pose: Pose,
    pub photo_url: String,
    pub check_date: NaiveDate,
}

/// Gender recorded during onboarding. Drives which poses a complete photo
/// check requires; `Unspecified` falls back to the common pose set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    #[default]
    Unspecified,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_log_deserializes_backend_row() {
        let row = r#"{"id":"a1","user_id":"u1","weight":72.5,"log_date":"2024-01-08"}"#;
        let entry: WeightLogEntry = serde_json::from_str(row).unwrap();
        assert_eq!(entry.weight, 72.5);
        assert_eq!(entry.log_date, "2024-01-08".parse().unwrap());
    }

    #[test]
    fn test_photo_pose_uses_kebab_case() {
        let row = r#"{"user_id":"u1","pose":"front-arms-down","photo_url":"http://x/y.jpg","check_date":"2024-02-01"}"#;
        let photo: ProgressPhoto = serde_json::from_str(row).unwrap();
        assert_eq!(photo.pose, Pose::FrontArmsDown);
        assert!(photo.id.is_none());
    }

    #[test]
    fn test_gender_lowercase_forms() {
        assert_eq!(serde_json::from_str::<Gender>("\"male\"").unwrap(), Gender::Male);
        assert_eq!(serde_json::from_str::<Gender>("\"female\"").unwrap(), Gender::Female);
        assert_eq!(Gender::default(), Gender::Unspecified);
    }
}
