use crate::system::users::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Figures behind the dashboard summary cards
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverviewStats {
    pub total_inventory: i64,
    pub low_stock_inventory: i64,
    pub total_value: f64,
    pub active_orders: i64,
}

/// One bar of the monthly sales overview
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyOverview {
    /// Month label as sent by the API (e.g. "Jan")
    pub month: String,
    pub total_amount: f64,
}

/// Entry of the recent activity feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub user: User,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}
