//! Canned analytics datasets behind the reports page.
//!
//! Tabular datasets implement [`ListRow`] so the report tables sort through
//! the same list-view pipeline as the live entity lists.

use crate::shared::list_view::{FieldValue, ListRow};
use contracts::enums::BadgeTone;

/// Named amount of a breakdown (category, channel, age bucket)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Share {
    pub name: &'static str,
    pub value: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyAmount {
    pub month: &'static str,
    pub amount: f64,
}

const fn share(name: &'static str, value: f64) -> Share {
    Share { name, value }
}

const fn monthly(month: &'static str, amount: f64) -> MonthlyAmount {
    MonthlyAmount { month, amount }
}

pub const SALES_BY_CATEGORY: [Share; 5] = [
    share("Electronics", 125_000.0),
    share("Accessories", 75_000.0),
    share("Office", 45_000.0),
    share("Storage", 30_000.0),
    share("Wearables", 25_000.0),
];

pub const SALES_BY_CHANNEL: [Share; 4] = [
    share("Online Store", 180_000.0),
    share("Marketplace", 120_000.0),
    share("Retail", 60_000.0),
    share("Wholesale", 40_000.0),
];

pub const SALES_TREND: [MonthlyAmount; 6] = [
    monthly("Jan", 65_000.0),
    monthly("Feb", 72_000.0),
    monthly("Mar", 68_000.0),
    monthly("Apr", 75_000.0),
    monthly("May", 82_000.0),
    monthly("Jun", 90_000.0),
];

pub const INVENTORY_AGING: [Share; 5] = [
    share("0-30 days", 125_000.0),
    share("31-60 days", 75_000.0),
    share("61-90 days", 45_000.0),
    share("91-180 days", 30_000.0),
    share("180+ days", 25_000.0),
];

/// Turns per year by category
pub const INVENTORY_TURNOVER: [Share; 5] = [
    share("Electronics", 8.5),
    share("Accessories", 12.3),
    share("Office", 6.7),
    share("Storage", 5.2),
    share("Wearables", 9.8),
];

pub const INVENTORY_VALUE: [MonthlyAmount; 6] = [
    monthly("Jan", 275_000.0),
    monthly("Feb", 282_000.0),
    monthly("Mar", 290_000.0),
    monthly("Apr", 285_000.0),
    monthly("May", 295_000.0),
    monthly("Jun", 300_000.0),
];

pub const SUPPLIER_SPEND: [Share; 5] = [
    share("TechGear Solutions", 125_000.0),
    share("OfficeSmart", 85_000.0),
    share("AudioTech Inc.", 65_000.0),
    share("CablePro Ltd.", 45_000.0),
    share("Other Suppliers", 80_000.0),
];

/// Lead time in days
pub const SUPPLIER_LEAD_TIMES: [Share; 8] = [
    share("TechGear Solutions", 4.0),
    share("OfficeSmart", 6.0),
    share("AudioTech Inc.", 3.0),
    share("CablePro Ltd.", 8.0),
    share("ConnectAll Inc.", 5.0),
    share("PowerUp Electronics", 7.0),
    share("TechWear Ltd.", 5.0),
    share("DataStore Inc.", 4.0),
];

/// Each share as a percentage of the breakdown total; all zeros when the total is zero
pub fn percent_of_total(shares: &[Share]) -> Vec<f64> {
    let total: f64 = shares.iter().map(|s| s.value).sum();
    shares
        .iter()
        .map(|s| if total > 0.0 { s.value * 100.0 / total } else { 0.0 })
        .collect()
}

/// Change from the first to the last month, in percent
pub fn growth_percent(series: &[MonthlyAmount]) -> Option<f64> {
    let first = series.first()?.amount;
    let last = series.last()?.amount;
    if first == 0.0 {
        return None;
    }
    Some((last - first) / first * 100.0)
}

/// Bar heights as a percentage of the largest month
pub fn series_heights(series: &[MonthlyAmount]) -> Vec<f64> {
    let max = series.iter().map(|m| m.amount).fold(0.0_f64, f64::max);
    series
        .iter()
        .map(|m| if max > 0.0 { m.amount.max(0.0) * 100.0 / max } else { 0.0 })
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub struct TopProductRow {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub sales: f64,
    pub units: i64,
    pub avg_price: f64,
}

impl ListRow for TopProductRow {
    fn row_id(&self) -> &str {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::text(self.id),
            "name" => FieldValue::text(self.name),
            "category" => FieldValue::text(self.category),
            "sales" => FieldValue::Number(self.sales),
            "units" => FieldValue::Number(self.units as f64),
            "avgPrice" => FieldValue::Number(self.avg_price),
            _ => FieldValue::Missing,
        }
    }
}

pub fn top_products() -> Vec<TopProductRow> {
    let row = |id, name, category, sales, units, avg_price| TopProductRow {
        id,
        name,
        category,
        sales,
        units,
        avg_price,
    };
    vec![
        row("PROD-001", "Wireless Headphones", "Electronics", 12_500.0, 139, 89.99),
        row("PROD-002", "USB-C Cables (3-pack)", "Accessories", 9_800.0, 490, 19.99),
        row("PROD-003", "Bluetooth Speaker", "Electronics", 8_500.0, 106, 79.99),
        row("PROD-004", "Wireless Keyboard", "Electronics", 7_200.0, 103, 69.99),
        row("PROD-005", "Smart Watch", "Wearables", 6_500.0, 33, 199.99),
    ]
}

/// Revenue, cost of goods sold and profit for one period or category
#[derive(Debug, Clone, PartialEq)]
pub struct MarginRow {
    /// Month or category name
    pub label: &'static str,
    pub revenue: f64,
    pub cogs: f64,
    pub profit: f64,
    pub margin: f64,
}

impl ListRow for MarginRow {
    fn row_id(&self) -> &str {
        self.label
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "label" => FieldValue::text(self.label),
            "revenue" => FieldValue::Number(self.revenue),
            "cogs" => FieldValue::Number(self.cogs),
            "profit" => FieldValue::Number(self.profit),
            "margin" => FieldValue::Number(self.margin),
            _ => FieldValue::Missing,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["label"]
    }
}

const fn margin(label: &'static str, revenue: f64, cogs: f64, profit: f64, margin: f64) -> MarginRow {
    MarginRow { label, revenue, cogs, profit, margin }
}

pub fn monthly_margins() -> Vec<MarginRow> {
    vec![
        margin("Jan", 65_000.0, 39_000.0, 26_000.0, 40.0),
        margin("Feb", 72_000.0, 42_500.0, 29_500.0, 41.0),
        margin("Mar", 68_000.0, 40_800.0, 27_200.0, 40.0),
        margin("Apr", 75_000.0, 43_500.0, 31_500.0, 42.0),
        margin("May", 82_000.0, 47_500.0, 34_500.0, 42.1),
        margin("Jun", 90_000.0, 51_300.0, 38_700.0, 43.0),
    ]
}

pub fn category_margins() -> Vec<MarginRow> {
    vec![
        margin("Electronics", 125_000.0, 68_750.0, 56_250.0, 45.0),
        margin("Accessories", 75_000.0, 41_250.0, 33_750.0, 45.0),
        margin("Office", 45_000.0, 27_000.0, 18_000.0, 40.0),
        margin("Storage", 30_000.0, 18_000.0, 12_000.0, 40.0),
        margin("Wearables", 25_000.0, 13_750.0, 11_250.0, 45.0),
    ]
}

/// Supplier rating derived from the quality score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityRating {
    Excellent,
    Good,
    Average,
    Poor,
}

impl QualityRating {
    pub fn from_score(score: f64) -> Self {
        if score >= 4.5 {
            QualityRating::Excellent
        } else if score >= 4.0 {
            QualityRating::Good
        } else if score >= 3.5 {
            QualityRating::Average
        } else {
            QualityRating::Poor
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            QualityRating::Excellent => "Excellent",
            QualityRating::Good => "Good",
            QualityRating::Average => "Average",
            QualityRating::Poor => "Poor",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            QualityRating::Excellent => BadgeTone::Success,
            QualityRating::Good => BadgeTone::Info,
            QualityRating::Average => BadgeTone::Warning,
            QualityRating::Poor => BadgeTone::Danger,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierPerformanceRow {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub orders: i64,
    /// Percent of orders delivered on time
    pub on_time_delivery: f64,
    pub quality_score: f64,
    /// Hours
    pub response_time: f64,
}

impl ListRow for SupplierPerformanceRow {
    fn row_id(&self) -> &str {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::text(self.id),
            "name" => FieldValue::text(self.name),
            "category" => FieldValue::text(self.category),
            "orders" => FieldValue::Number(self.orders as f64),
            "onTimeDelivery" => FieldValue::Number(self.on_time_delivery),
            "qualityScore" => FieldValue::Number(self.quality_score),
            "responseTime" => FieldValue::Number(self.response_time),
            _ => FieldValue::Missing,
        }
    }
}

pub fn supplier_performance() -> Vec<SupplierPerformanceRow> {
    let row = |id, name, category, orders, on_time_delivery, quality_score, response_time| {
        SupplierPerformanceRow {
            id,
            name,
            category,
            orders,
            on_time_delivery,
            quality_score,
            response_time,
        }
    };
    vec![
        row("SUP-001", "TechGear Solutions", "Electronics", 47, 95.0, 4.8, 4.0),
        row("SUP-002", "OfficeSmart", "Office Supplies", 32, 92.0, 4.5, 6.0),
        row("SUP-003", "AudioTech Inc.", "Electronics", 28, 98.0, 4.7, 3.0),
        row("SUP-004", "CablePro Ltd.", "Accessories", 25, 88.0, 3.9, 8.0),
        row("SUP-005", "ConnectAll Inc.", "Accessories", 22, 90.0, 4.2, 5.0),
    ]
}

/// Stock position of one product against its reorder point or optimal level
#[derive(Debug, Clone, PartialEq)]
pub struct StockLevelRow {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub quantity: i64,
    /// Reorder point for low stock rows, optimal stock for excess rows
    pub threshold: i64,
    pub supplier: Option<&'static str>,
    /// Value of the stock above the optimal level
    pub excess_value: Option<f64>,
}

impl ListRow for StockLevelRow {
    fn row_id(&self) -> &str {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::text(self.id),
            "name" => FieldValue::text(self.name),
            "category" => FieldValue::text(self.category),
            "quantity" => FieldValue::Number(self.quantity as f64),
            "threshold" => FieldValue::Number(self.threshold as f64),
            "supplier" => FieldValue::from_opt_text(self.supplier),
            "excessValue" => FieldValue::from_opt_number(self.excess_value),
            _ => FieldValue::Missing,
        }
    }
}

pub fn low_stock_items() -> Vec<StockLevelRow> {
    let row = |id, name, category, quantity, threshold, supplier| StockLevelRow {
        id,
        name,
        category,
        quantity,
        threshold,
        supplier: Some(supplier),
        excess_value: None,
    };
    vec![
        row("INV003", "Laptop Stand", "Office", 15, 20, "OfficeSmart"),
        row("INV005", "HDMI Adapter", "Accessories", 10, 15, "ConnectAll Inc."),
        row("INV010", "Smart Watch", "Electronics", 5, 10, "TechWear Ltd."),
        row("INV012", "Mechanical Keyboard", "Electronics", 8, 12, "TechGear Solutions"),
        row("INV015", "Wireless Earbuds", "Audio", 7, 15, "AudioTech Inc."),
    ]
}

pub fn excess_inventory() -> Vec<StockLevelRow> {
    let row = |id, name, category, quantity, threshold, value| StockLevelRow {
        id,
        name,
        category,
        quantity,
        threshold,
        supplier: None,
        excess_value: Some(value),
    };
    vec![
        row("INV002", "USB-C Cables (3-pack)", "Accessories", 120, 50, 2398.8),
        row("INV007", "Wireless Mouse", "Electronics", 40, 25, 1599.6),
        row("INV018", "Phone Chargers", "Accessories", 85, 40, 1274.85),
        row("INV022", "USB Flash Drives", "Storage", 95, 45, 1424.05),
        row("INV025", "Screen Protectors", "Accessories", 150, 60, 1499.5),
    ]
}

pub fn excess_total_value(rows: &[StockLevelRow]) -> f64 {
    rows.iter().filter_map(|r| r.excess_value).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::components::table::format_currency;
    use crate::shared::list_view::{ListViewController, SortSpec};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_channel_shares() {
        let shares = percent_of_total(&SALES_BY_CHANNEL);
        assert_eq!(shares, vec![45.0, 30.0, 15.0, 10.0]);
        assert_eq!(percent_of_total(&[share("none", 0.0)]), vec![0.0]);
    }

    #[test]
    fn test_sales_growth() {
        let growth = growth_percent(&SALES_TREND).unwrap_or_default();
        assert_eq!(format!("{:.1}", growth), "38.5");
        assert_eq!(growth_percent(&[]), None);
    }

    #[test]
    fn test_series_heights() {
        let heights = series_heights(&INVENTORY_VALUE);
        assert_eq!(heights.len(), 6);
        assert_eq!(heights[5], 100.0);
        assert!(heights.iter().all(|h| *h > 90.0 && *h <= 100.0));
        assert_eq!(series_heights(&[monthly("Jan", 0.0)]), vec![0.0]);
    }

    #[test]
    fn test_excess_total() {
        assert_eq!(format_currency(excess_total_value(&excess_inventory())), "$8,196.80");
        assert_eq!(excess_total_value(&low_stock_items()), 0.0);
    }

    #[test]
    fn test_quality_rating_bands() {
        assert_eq!(QualityRating::from_score(4.8), QualityRating::Excellent);
        assert_eq!(QualityRating::from_score(4.5), QualityRating::Excellent);
        assert_eq!(QualityRating::from_score(4.2), QualityRating::Good);
        assert_eq!(QualityRating::from_score(3.9), QualityRating::Average);
        assert_eq!(QualityRating::from_score(3.4), QualityRating::Poor);
    }

    #[test]
    fn test_top_products_sort_by_units() {
        let mut c = ListViewController::new(10).with_rows(top_products());
        c.set_sort(SortSpec::desc("units"));
        let ids: Vec<&str> = c.view().visible_rows.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec!["PROD-002", "PROD-001", "PROD-003", "PROD-004", "PROD-005"]);
    }

    #[test]
    fn test_supplier_performance_sorts_by_response_time() {
        let mut c = ListViewController::new(10).with_rows(supplier_performance());
        c.toggle_sort("responseTime");
        assert_eq!(c.view().visible_rows.first().map(|r| r.name), Some("AudioTech Inc."));
    }

    #[test]
    fn test_category_margins_text_sort() {
        let mut c = ListViewController::new(10).with_rows(category_margins());
        c.toggle_sort("label");
        let labels: Vec<&str> = c.view().visible_rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Accessories", "Electronics", "Office", "Storage", "Wearables"]);
    }
}
