//! Date and time formatting for list cells and the activity feed

use chrono::{DateTime, Utc};

/// `2024-03-15T14:02:26Z` -> `Mar 15, 2024`
pub fn format_date(value: &DateTime<Utc>) -> String {
    value.format("%b %-d, %Y").to_string()
}

/// `2024-03-05T14:02:26Z` -> `March 5, 2024 - 02:02 PM`
pub fn format_date_time(value: &DateTime<Utc>) -> String {
    value.format("%B %-d, %Y - %I:%M %p").to_string()
}

/// Relative age such as "5 minutes ago".
///
/// Months are 30 days and years 12 months; timestamps in the future read as "0 seconds ago".
pub fn time_ago(past: &DateTime<Utc>, now: &DateTime<Utc>) -> String {
    let seconds = (*now - *past).num_seconds().max(0);
    if seconds < 60 {
        return format!("{} seconds ago", seconds);
    }
    let minutes = seconds / 60;
    if minutes < 60 {
        return format!("{} minutes ago", minutes);
    }
    let hours = minutes / 60;
    if hours < 24 {
        return format!("{} hours ago", hours);
    }
    let days = hours / 24;
    if days < 30 {
        return format!("{} days ago", days);
    }
    let months = days / 30;
    if months < 12 {
        return format!("{} months ago", months);
    }
    format!("{} years ago", months / 12)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_format_date() {
        let value = Utc.with_ymd_and_hms(2024, 3, 5, 14, 2, 26).unwrap();
        assert_eq!(format_date(&value), "Mar 5, 2024");
        assert_eq!(format_date_time(&value), "March 5, 2024 - 02:02 PM");
    }

    #[test]
    fn test_time_ago_buckets() {
        let now = now();
        assert_eq!(time_ago(&(now - Duration::seconds(42)), &now), "42 seconds ago");
        assert_eq!(time_ago(&(now - Duration::minutes(5)), &now), "5 minutes ago");
        assert_eq!(time_ago(&(now - Duration::hours(23)), &now), "23 hours ago");
        assert_eq!(time_ago(&(now - Duration::days(3)), &now), "3 days ago");
        assert_eq!(time_ago(&(now - Duration::days(65)), &now), "2 months ago");
        assert_eq!(time_ago(&(now - Duration::days(800)), &now), "2 years ago");
    }

    #[test]
    fn test_future_timestamp() {
        let now = now();
        assert_eq!(time_ago(&(now + Duration::minutes(1)), &now), "0 seconds ago");
    }
}
