//! Blocking REST client for the hosted backend.
//!
//! Rows live behind `/rest/v1/<table>` PostgREST-style endpoints filtered by
//! `user_id`; photo bytes go to `/storage/v1/object/<bucket>/...` and are
//! served back from the bucket's public path.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::BackendConfig;
use crate::poses::Pose;
use crate::records::{Gender, ProgressPhoto, WeightLogEntry};

use super::{BackendError, ProgressStore};

/// Upload cap enforced before any request goes out.
const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

pub struct RestBackend {
    endpoint: String,
    api_key: String,
    access_token: String,
    bucket: String,
}

#[derive(Debug, Serialize)]
struct WeightUpsertRow<'a> {
    user_id: &'a str,
    weight: f64,
    log_date: NaiveDate,
}

#[derive(Debug, Deserialize)]
struct GenderRow {
    #[serde(default)]
    gender: Option<Gender>,
}

#[derive(Debug, Serialize)]
struct PhotoInsertRow<'a> {
    user_id: &'a str,
    pose: Pose,
    photo_url: &'a str,
    check_date: NaiveDate,
}

impl RestBackend {
    pub fn new(config: &BackendConfig) -> Self {
        Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            access_token: config.access_token.clone(),
            bucket: config.bucket.clone(),
        }
    }

    fn get(&self, url: &str) -> ureq::Request {
        self.authed(ureq::get(url))
    }

    fn post(&self, url: &str) -> ureq::Request {
        self.authed(ureq::post(url))
    }

    fn authed(&self, request: ureq::Request) -> ureq::Request {
        request
            .set("apikey", &self.api_key)
            .set("Authorization", &format!("Bearer {}", self.access_token))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.endpoint, table)
    }
}

impl ProgressStore for RestBackend {
    fn fetch_weight_logs(&self, user_id: &str) -> Result<Vec<WeightLogEntry>, BackendError> {
        let url = format!(
            "{}?user_id=eq.{}&order=log_date.asc",
            self.table_url("weight_logs"),
            user_id
        );
        let response = self
            .get(&url)
            .call()
            .map_err(|e| BackendError::Request(e.to_string()))?;
        let logs: Vec<WeightLogEntry> = response
            .into_json()
            .map_err(|e| BackendError::Response(e.to_string()))?;
        debug!("Fetched {} weight logs", logs.len());
        Ok(logs)
    }

    fn fetch_progress_photos(&self, user_id: &str) -> Result<Vec<ProgressPhoto>, BackendError> {
        let url = format!(
            "{}?user_id=eq.{}&order=check_date.asc",
            self.table_url("progress_photos"),
            user_id
        );
        let response = self
            .get(&url)
            .call()
            .map_err(|e| BackendError::Request(e.to_string()))?;
        let photos: Vec<ProgressPhoto> = response
            .into_json()
            .map_err(|e| BackendError::Response(e.to_string()))?;
        debug!("Fetched {} progress photos", photos.len());
        Ok(photos)
    }

    fn fetch_gender(&self, user_id: &str) -> Result<Gender, BackendError> {
        let url = format!(
            "{}?user_id=eq.{}&select=gender",
            self.table_url("onboarding_responses"),
            user_id
        );
        let response = self
            .get(&url)
            .call()
            .map_err(|e| BackendError::Request(e.to_string()))?;
        let rows: Vec<GenderRow> = response
            .into_json()
            .map_err(|e| BackendError::Response(e.to_string()))?;
        Ok(rows
            .into_iter()
            .next()
            .and_then(|row| row.gender)
            .unwrap_or_default())
    }

    fn upsert_weight_log(
        &self,
        user_id: &str,
        date: NaiveDate,
        weight: f64,
    ) -> Result<(), BackendError> {
        let url = format!(
            "{}?on_conflict=user_id,log_date",
            self.table_url("weight_logs")
        );
        let row = WeightUpsertRow {
            user_id,
            weight,
            log_date: date,
        };
        self.post(&url)
            .set("Prefer", "resolution=merge-duplicates")
            .send_json(&row)
            .map_err(|e| BackendError::Request(e.to_string()))?;
        info!("Logged weight {} kg for {}", weight, date);
        Ok(())
    }

    fn upload_photo(
        &self,
        user_id: &str,
        pose: Pose,
        date: NaiveDate,
        image: &[u8],
    ) -> Result<String, BackendError> {
        let content_type = sniff_image_type(image)
            .ok_or_else(|| BackendError::InvalidUpload("only JPEG and PNG images are accepted".to_string()))?;
        if image.len() > MAX_UPLOAD_BYTES {
            return Err(BackendError::InvalidUpload(
                "file size exceeds the 5MB limit".to_string(),
            ));
        }

        let object = object_name(user_id, pose, date, chrono::Utc::now().timestamp_millis());

        let upload_url = format!("{}/storage/v1/object/{}/{}", self.endpoint, self.bucket, object);
        self.post(&upload_url)
            .set("Content-Type", content_type)
            .send_bytes(image)
            .map_err(|e| BackendError::Request(e.to_string()))?;

        let photo_url = format!(
            "{}/storage/v1/object/public/{}/{}",
            self.endpoint, self.bucket, object
        );

        let row = PhotoInsertRow {
            user_id,
            pose,
            photo_url: &photo_url,
            check_date: date,
        };
        self.post(&self.table_url("progress_photos"))
            .send_json(&row)
            .map_err(|e| BackendError::Request(e.to_string()))?;

        info!("Uploaded {} photo for {}", pose.as_str(), date);
        Ok(photo_url)
    }
}

/// Storage object key: one folder per user and date, timestamp to keep
/// re-uploads of the same pose distinct.
fn object_name(user_id: &str, pose: Pose, date: NaiveDate, timestamp_ms: i64) -> String {
    format!("{}/{}/{}-{}", user_id, date, pose.as_str(), timestamp_ms)
}

/// Recognize the image container from its magic bytes.
fn sniff_image_type(bytes: &[u8]) -> Option<&'static str> {
    if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("image/jpeg")
    } else if bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]) {
        Some("image/png")
    } else {
        None
    }
}
