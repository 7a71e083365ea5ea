//! Weekly weight check scheduling.

use chrono::{Duration, NaiveDate};

use crate::records::WeightLogEntry;

/// Days between weight checks.
pub const WEIGHT_CHECK_INTERVAL_DAYS: i64 = 7;

/// Next date a weight log is due.
///
/// With no history the check is due immediately. A computed date that has
/// already passed clamps to `today`: an overdue check reads as "due now",
/// never as a date buried in the past. Input order is arbitrary.
pub fn next_weight_check(history: &[WeightLogEntry], today: NaiveDate) -> NaiveDate {
    let Some(latest) = history.iter().map(|entry| entry.log_date).max() else {
        return today;
    };
    let due = latest + Duration::days(WEIGHT_CHECK_INTERVAL_DAYS);
    due.max(today)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn entry(date: &str, weight: f64) -> WeightLogEntry {
        WeightLogEntry {
            id: None,
            user_id: "u1".to_string(),
            weight,
            log_date: d(date),
        }
    }

    #[test]
    fn test_empty_history_is_due_today() {
        assert_eq!(next_weight_check(&[], d("2024-01-10")), d("2024-01-10"));
    }

    #[test]
    fn test_due_seven_days_after_last_log() {
        let history = vec![entry("2024-01-01", 70.0)];
        assert_eq!(next_weight_check(&history, d("2024-01-03")), d("2024-01-08"));
    }

    #[test]
    fn test_overdue_clamps_to_today() {
        // 2024-01-01 + 7 = 2024-01-08, already past.
        let history = vec![entry("2024-01-01", 70.0)];
        assert_eq!(next_weight_check(&history, d("2024-01-10")), d("2024-01-10"));
    }

    #[test]
    fn test_due_exactly_today_is_not_clamped() {
        let history = vec![entry("2024-01-01", 70.0)];
        assert_eq!(next_weight_check(&history, d("2024-01-08")), d("2024-01-08"));
    }

    #[test]
    fn test_unsorted_history_uses_most_recent_entry() {
        let history = vec![
            entry("2024-01-08", 69.5),
            entry("2024-01-01", 70.0),
            entry("2024-01-15", 69.0),
            entry("2024-01-12", 69.2),
        ];
        assert_eq!(next_weight_check(&history, d("2024-01-16")), d("2024-01-22"));
    }
}
