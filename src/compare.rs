//! First / previous / current photo selection for the comparison grid.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::poses::Pose;
use crate::records::ProgressPhoto;

/// Up to three photographs of one pose chosen for side-by-side display:
/// the very first check, the check before the latest one, and the latest.
///
/// Slots hold whatever the data supports; adjacent slots may refer to the
/// same photo when fewer than three distinct check dates exist. Whether a
/// duplicate slot is rendered is a display decision, answered by
/// [`show_previous`](Self::show_previous) and
/// [`show_current`](Self::show_current) rather than by emptying the slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSlots {
    pub first: Option<ProgressPhoto>,
    pub previous: Option<ProgressPhoto>,
    pub current: Option<ProgressPhoto>,
}

impl ComparisonSlots {
    pub fn is_empty(&self) -> bool {
        self.first.is_none() && self.previous.is_none() && self.current.is_none()
    }

    /// Render the previous slot, or suppress it as a duplicate of the first
    /// check ("no previous check").
    pub fn show_previous(&self) -> bool {
        match (&self.previous, &self.first) {
            (Some(previous), Some(first)) => !same_photo(previous, first),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Render the current slot, or suppress it as a duplicate of an earlier
    /// slot ("same as previous").
    pub fn show_current(&self) -> bool {
        let Some(current) = &self.current else {
            return false;
        };
        let duplicate = self
            .first
            .iter()
            .chain(self.previous.iter())
            .any(|earlier| same_photo(current, earlier));
        !duplicate
    }
}

/// Photo identity for duplicate suppression: record ids when both rows carry
/// one, otherwise check date plus stored URL.
fn same_photo(a: &ProgressPhoto, b: &ProgressPhoto) -> bool {
    match (&a.id, &b.id) {
        (Some(a_id), Some(b_id)) => a_id == b_id,
        _ => a.check_date == b.check_date && a.photo_url == b.photo_url,
    }
}

/// Pick the comparison photos for every required pose.
///
/// Photos collapse to one per distinct check date per pose, the first record
/// in input order winning when a pose+date pair is duplicated. Dates sort
/// ascending: `first` is the earliest, `current` the latest, `previous` the
/// second-latest when at least two distinct dates exist. Poses without any
/// photos still appear, with all slots empty, so callers can render an
/// empty-state placeholder for each.
pub fn select_comparisons(
    photos: &[ProgressPhoto],
    required: &[Pose],
) -> Vec<(Pose, ComparisonSlots)> {
    let mut by_pose: BTreeMap<Pose, BTreeMap<NaiveDate, &ProgressPhoto>> = BTreeMap::new();
    for photo in photos {
        by_pose
            .entry(photo.pose)
            .or_default()
            .entry(photo.check_date)
            .or_insert(photo);
    }

    required
        .iter()
        .map(|&pose| {
            let slots = match by_pose.get(&pose) {
                Some(by_date) if !by_date.is_empty() => {
                    let ordered: Vec<&ProgressPhoto> = by_date.values().copied().collect();
                    let previous = if ordered.len() > 1 {
                        Some(ordered[ordered.len() - 2].clone())
                    } else {
                        None
                    };
                    ComparisonSlots {
                        first: ordered.first().map(|p| (*p).clone()),
                        previous,
                        current: ordered.last().map(|p| (*p).clone()),
                    }
                }
                _ => ComparisonSlots::default(),
            };
            (pose, slots)
        })
        .collect()
}
