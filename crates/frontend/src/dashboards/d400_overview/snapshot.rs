//! Canned inventory rows shown on the overview dashboard

use crate::shared::list_view::{FieldValue, ListRow};
use contracts::enums::ProductStatus;

#[derive(Debug, Clone, PartialEq)]
pub struct InventorySnapshotRow {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub quantity: i64,
    pub price: f64,
    pub status: ProductStatus,
}

impl ListRow for InventorySnapshotRow {
    fn row_id(&self) -> &str {
        self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::text(self.id),
            "name" => FieldValue::text(self.name),
            "category" => FieldValue::text(self.category),
            "quantity" => FieldValue::Number(self.quantity as f64),
            "price" => FieldValue::Number(self.price),
            "status" => FieldValue::Number(self.status.code() as f64),
            _ => FieldValue::Missing,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "category", "id"]
    }
}

const fn snapshot_row(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    quantity: i64,
    price: f64,
    status: ProductStatus,
) -> InventorySnapshotRow {
    InventorySnapshotRow { id, name, category, quantity, price, status }
}

const ROWS: [InventorySnapshotRow; 10] = [
    snapshot_row("INV001", "Wireless Headphones", "Electronics", 45, 89.99, ProductStatus::InStock),
    snapshot_row("INV002", "USB-C Cables (3-pack)", "Accessories", 120, 19.99, ProductStatus::InStock),
    snapshot_row("INV003", "Laptop Stand", "Office", 15, 49.99, ProductStatus::LowStock),
    snapshot_row("INV004", "Wireless Keyboard", "Electronics", 30, 69.99, ProductStatus::InStock),
    snapshot_row("INV005", "HDMI Adapter", "Accessories", 10, 24.99, ProductStatus::LowStock),
    snapshot_row("INV006", "Bluetooth Speaker", "Electronics", 25, 79.99, ProductStatus::InStock),
    snapshot_row("INV007", "Wireless Mouse", "Electronics", 40, 39.99, ProductStatus::InStock),
    snapshot_row("INV008", "Monitor Stand", "Office", 0, 59.99, ProductStatus::OutOfStock),
    snapshot_row("INV009", "Wireless Charger", "Accessories", 18, 34.99, ProductStatus::InStock),
    snapshot_row("INV010", "Smart Watch", "Electronics", 5, 199.99, ProductStatus::LowStock),
];

pub fn inventory_snapshot() -> Vec<InventorySnapshotRow> {
    ROWS.to_vec()
}
