use contracts::dashboards::d400_overview::{Activity, DashboardOverviewStats, MonthlyOverview};

use crate::shared::api_utils::{get_json, ApiError};

const API_BASE: &str = "/api/dashboard";

pub async fn fetch_overview_stats() -> Result<DashboardOverviewStats, ApiError> {
    get_json(&format!("{}/overview-stats", API_BASE)).await
}

/// Sales totals per month for the bar chart
pub async fn fetch_overview() -> Result<Vec<MonthlyOverview>, ApiError> {
    get_json(&format!("{}/overview", API_BASE)).await
}

pub async fn fetch_recent_activity() -> Result<Vec<Activity>, ApiError> {
    get_json(&format!("{}/recent-activity", API_BASE)).await
}
