use crate::shared::config::page_sizes;
use contracts::dashboards::d400_overview::Activity;

/// Entries shown in the feed: the first few unless the feed is expanded
pub fn recent(activities: &[Activity], extended: bool) -> &[Activity] {
    if extended {
        activities
    } else {
        &activities[..activities.len().min(page_sizes().recent_activity)]
    }
}
