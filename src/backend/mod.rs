//! Client for the hosted backend that owns all persistence.
//!
//! The backend enforces row-level ownership, one weight row per user per
//! date, and serialization of concurrent writes; this side is plain
//! request/response with no retries. Recovery from a failed call is a fresh
//! user action.

mod rest;

pub use rest::RestBackend;

use chrono::NaiveDate;
use thiserror::Error;

use crate::poses::Pose;
use crate::records::{Gender, ProgressPhoto, WeightLogEntry};

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("backend request failed: {0}")]
    Request(String),

    #[error("unexpected response from backend: {0}")]
    Response(String),

    #[error("invalid photo upload: {0}")]
    InvalidUpload(String),
}

/// Remote store of weight logs and progress photos.
pub trait ProgressStore: Send + Sync {
    /// All weight logs for the user, in no guaranteed order.
    fn fetch_weight_logs(&self, user_id: &str) -> Result<Vec<WeightLogEntry>, BackendError>;

    /// All progress photos for the user, in no guaranteed order.
    fn fetch_progress_photos(&self, user_id: &str) -> Result<Vec<ProgressPhoto>, BackendError>;

    /// Gender recorded during onboarding; `Unspecified` when absent.
    fn fetch_gender(&self, user_id: &str) -> Result<Gender, BackendError>;

    /// Insert or update the single weight row for `user_id` + `date`.
    fn upsert_weight_log(
        &self,
        user_id: &str,
        date: NaiveDate,
        weight: f64,
    ) -> Result<(), BackendError>;

    /// Store the image bytes and insert the photo record.
    /// Returns the public URL of the stored photo.
    fn upload_photo(
        &self,
        user_id: &str,
        pose: Pose,
        date: NaiveDate,
        image: &[u8],
    ) -> Result<String, BackendError>;
}
