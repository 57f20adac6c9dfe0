//! Saved report definitions with favorites and schedules

use crate::shared::list_view::{FieldValue, FilterValue, ListRow};

pub const DIM_CATEGORY: &str = "category";
pub const DIM_FAVORITE: &str = "favorite";

pub const CATEGORIES: [&str; 4] = ["Sales", "Inventory", "Suppliers", "Financial"];

#[derive(Debug, Clone, PartialEq)]
pub struct SavedReportRow {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// ISO dates, so text order is date order
    pub created: &'static str,
    pub last_run: &'static str,
    /// Run frequency; `None` when the report is not scheduled
    pub frequency: Option<&'static str>,
    pub favorite: bool,
}

impl SavedReportRow {
    pub fn schedule_label(&self) -> &'static str {
        self.frequency.unwrap_or("Not scheduled")
    }
}

impl ListRow for SavedReportRow {
    fn row_id(&self) -> &str {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::text(self.id),
            "name" => FieldValue::text(self.name),
            "category" => FieldValue::text(self.category),
            "created" => FieldValue::text(self.created),
            "lastRun" => FieldValue::text(self.last_run),
            "scheduled" => FieldValue::Number(if self.frequency.is_some() { 1.0 } else { 0.0 }),
            "frequency" => FieldValue::from_opt_text(self.frequency),
            "favorite" => FieldValue::Number(if self.favorite { 1.0 } else { 0.0 }),
            _ => FieldValue::Missing,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "category", "id"]
    }
}

pub fn saved_reports() -> Vec<SavedReportRow> {
    let row = |id, name, category, created, last_run, frequency, favorite| SavedReportRow {
        id,
        name,
        category,
        created,
        last_run,
        frequency,
        favorite,
    };
    vec![
        row("REP-001", "Monthly Sales Summary", "Sales", "2023-03-15", "2023-06-30", Some("Monthly"), true),
        row("REP-002", "Inventory Aging Analysis", "Inventory", "2023-02-10", "2023-06-28", Some("Weekly"), true),
        row("REP-003", "Supplier Performance Review", "Suppliers", "2023-04-05", "2023-06-25", Some("Monthly"), false),
        row("REP-004", "Product Profitability Analysis", "Financial", "2023-05-12", "2023-06-20", None, false),
        row("REP-005", "Low Stock Items Report", "Inventory", "2023-01-20", "2023-06-29", Some("Daily"), true),
        row("REP-006", "Sales by Channel", "Sales", "2023-03-28", "2023-06-15", None, false),
        row("REP-007", "Quarterly Financial Summary", "Financial", "2023-04-01", "2023-06-30", Some("Quarterly"), true),
    ]
}

/// Flips the favorite flag of one report; returns false when the id is unknown
pub fn toggle_favorite(rows: &mut [SavedReportRow], id: &str) -> bool {
    match rows.iter_mut().find(|r| r.id == id) {
        Some(row) => {
            row.favorite = !row.favorite;
            true
        }
        None => false,
    }
}

pub fn category_options() -> Vec<(FilterValue, String)> {
    CATEGORIES
        .iter()
        .map(|c| (FilterValue::from(*c), c.to_string()))
        .collect()
}
