//! Column layouts and cell formatting for the report tables

use crate::shared::components::table::{format_count, format_currency, format_number_with_decimals};
use crate::shared::config::page_sizes;
use crate::shared::list_view::{FieldValue, ListRow, ListViewController, SortSpec};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellFormat {
    Text,
    Count,
    Currency,
    Percent,
    /// One decimal place
    Decimal,
    Hours,
    /// Score out of five
    Rating,
}

impl CellFormat {
    pub fn align(self) -> &'static str {
        match self {
            CellFormat::Text => "left",
            _ => "right",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportColumn {
    pub label: &'static str,
    pub field: &'static str,
    pub format: CellFormat,
    pub sortable: bool,
}

const fn column(label: &'static str, field: &'static str, format: CellFormat, sortable: bool) -> ReportColumn {
    ReportColumn { label, field, format, sortable }
}

/// Renders a field for display; missing and opaque values show as `-`
pub fn format_cell(value: &FieldValue, format: CellFormat) -> String {
    let number = match value {
        FieldValue::Text(s) => return s.clone(),
        FieldValue::Number(n) => *n,
        FieldValue::Opaque | FieldValue::Missing => return "-".to_string(),
    };
    match format {
        CellFormat::Text => number.to_string(),
        CellFormat::Count => format_count(number.round() as i64),
        CellFormat::Currency => format_currency(number),
        CellFormat::Percent => format!("{}%", format_number_with_decimals(number, 1)),
        CellFormat::Decimal => format_number_with_decimals(number, 1),
        CellFormat::Hours => format!("{} hrs", format_number_with_decimals(number, 0)),
        CellFormat::Rating => format!("{}/5", format_number_with_decimals(number, 1)),
    }
}

pub const TOP_PRODUCT_COLUMNS: [ReportColumn; 6] = [
    column("Product ID", "id", CellFormat::Text, false),
    column("Product Name", "name", CellFormat::Text, true),
    column("Category", "category", CellFormat::Text, true),
    column("Sales", "sales", CellFormat::Currency, true),
    column("Units Sold", "units", CellFormat::Count, true),
    column("Avg. Price", "avgPrice", CellFormat::Currency, true),
];

pub const MONTHLY_MARGIN_COLUMNS: [ReportColumn; 5] = [
    column("Month", "label", CellFormat::Text, false),
    column("Revenue", "revenue", CellFormat::Currency, false),
    column("COGS", "cogs", CellFormat::Currency, false),
    column("Profit", "profit", CellFormat::Currency, false),
    column("Margin", "margin", CellFormat::Percent, false),
];

pub const CATEGORY_MARGIN_COLUMNS: [ReportColumn; 5] = [
    column("Category", "label", CellFormat::Text, true),
    column("Revenue", "revenue", CellFormat::Currency, true),
    column("COGS", "cogs", CellFormat::Currency, true),
    column("Profit", "profit", CellFormat::Currency, true),
    column("Margin", "margin", CellFormat::Percent, true),
];

pub const SUPPLIER_PERFORMANCE_COLUMNS: [ReportColumn; 7] = [
    column("Supplier ID", "id", CellFormat::Text, false),
    column("Supplier Name", "name", CellFormat::Text, true),
    column("Category", "category", CellFormat::Text, true),
    column("Orders", "orders", CellFormat::Count, true),
    column("On-Time Delivery", "onTimeDelivery", CellFormat::Percent, true),
    column("Quality Score", "qualityScore", CellFormat::Rating, true),
    column("Response Time", "responseTime", CellFormat::Hours, true),
];

pub const LOW_STOCK_COLUMNS: [ReportColumn; 6] = [
    column("ID", "id", CellFormat::Text, true),
    column("Product Name", "name", CellFormat::Text, true),
    column("Category", "category", CellFormat::Text, true),
    column("Quantity", "quantity", CellFormat::Count, true),
    column("Reorder Point", "threshold", CellFormat::Count, false),
    column("Supplier", "supplier", CellFormat::Text, false),
];

pub const EXCESS_INVENTORY_COLUMNS: [ReportColumn; 6] = [
    column("ID", "id", CellFormat::Text, false),
    column("Product Name", "name", CellFormat::Text, false),
    column("Category", "category", CellFormat::Text, false),
    column("Quantity", "quantity", CellFormat::Count, false),
    column("Optimal Stock", "threshold", CellFormat::Count, false),
    column("Excess Value", "excessValue", CellFormat::Currency, false),
];

/// Controller for one report table, pre-sorted and sized from config
pub fn report_controller<T: ListRow>(rows: Vec<T>, sort: SortSpec) -> ListViewController<T> {
    let mut controller = ListViewController::new(page_sizes().reports).with_rows(rows);
    controller.set_sort(sort);
    controller
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d401_reports::datasets::{category_margins, supplier_performance};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_cell() {
        assert_eq!(format_cell(&FieldValue::Number(12500.0), CellFormat::Currency), "$12,500.00");
        assert_eq!(format_cell(&FieldValue::Number(490.0), CellFormat::Count), "490");
        assert_eq!(format_cell(&FieldValue::Number(42.1), CellFormat::Percent), "42.1%");
        assert_eq!(format_cell(&FieldValue::Number(4.8), CellFormat::Rating), "4.8/5");
        assert_eq!(format_cell(&FieldValue::Number(4.0), CellFormat::Hours), "4 hrs");
        assert_eq!(format_cell(&FieldValue::text("Office"), CellFormat::Currency), "Office");
        assert_eq!(format_cell(&FieldValue::Missing, CellFormat::Count), "-");
    }

    #[test]
    fn test_column_fields_resolve() {
        let rows = supplier_performance();
        for column in SUPPLIER_PERFORMANCE_COLUMNS {
            assert_ne!(rows[0].field(column.field), FieldValue::Missing, "{}", column.field);
        }
        let margins = category_margins();
        for column in CATEGORY_MARGIN_COLUMNS {
            assert_ne!(margins[0].field(column.field), FieldValue::Missing, "{}", column.field);
        }
    }

    #[test]
    fn test_report_controller_applies_default_sort() {
        let c = report_controller(category_margins(), SortSpec::desc("revenue"));
        let labels: Vec<&str> = c.view().visible_rows.iter().map(|r| r.label).collect();
        assert_eq!(labels, vec!["Electronics", "Accessories", "Office", "Storage", "Wearables"]);
        assert_eq!(c.page_size(), page_sizes().reports);
    }

    #[test]
    fn test_alignment() {
        assert_eq!(CellFormat::Text.align(), "left");
        assert_eq!(CellFormat::Currency.align(), "right");
    }
}
