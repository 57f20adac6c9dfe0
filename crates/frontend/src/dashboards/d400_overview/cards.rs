//! Summary cards above the overview dashboard

use crate::shared::components::table::{format_count, format_currency};
use contracts::dashboards::d400_overview::{DashboardOverviewStats, MonthlyOverview};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverviewCard {
    TotalInventory,
    LowStock,
    TotalValue,
    ActiveOrders,
}

impl OverviewCard {
    pub fn all() -> [OverviewCard; 4] {
        [
            OverviewCard::TotalInventory,
            OverviewCard::LowStock,
            OverviewCard::TotalValue,
            OverviewCard::ActiveOrders,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            OverviewCard::TotalInventory => "Total Inventory",
            OverviewCard::LowStock => "Low Stock Items",
            OverviewCard::TotalValue => "Total Value",
            OverviewCard::ActiveOrders => "Active Orders",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            OverviewCard::TotalInventory => "inventory",
            OverviewCard::LowStock => "alert",
            OverviewCard::TotalValue => "payments",
            OverviewCard::ActiveOrders => "orders",
        }
    }
}

/// Display value of a card; missing stats read as zero
pub fn card_value(card: OverviewCard, stats: Option<&DashboardOverviewStats>) -> String {
    let zero = DashboardOverviewStats::default();
    let stats = stats.unwrap_or(&zero);
    match card {
        OverviewCard::TotalInventory => format_count(stats.total_inventory),
        OverviewCard::LowStock => format_count(stats.low_stock_inventory),
        OverviewCard::TotalValue => format_currency(stats.total_value),
        OverviewCard::ActiveOrders => format_count(stats.active_orders),
    }
}

/// Bar heights in percent of the best month
pub fn bar_heights(months: &[MonthlyOverview]) -> Vec<f64> {
    let max = months.iter().map(|m| m.total_amount).fold(0.0_f64, f64::max);
    months
        .iter()
        .map(|m| if max > 0.0 { (m.total_amount.max(0.0) / max) * 100.0 } else { 0.0 })
        .collect()
}
