use crate::domain::a001_category::Category;
use crate::domain::a002_supplier::Supplier;
use crate::enums::ProductStatus;
use serde::{Deserialize, Serialize};

/// Product with its stock position
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub description: Option<String>,
    pub sku: Option<String>,
    pub price: Option<f64>,
    pub stock_quantity: Option<i64>,
    pub reorder_level: Option<i64>,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub supplier_id: String,
    #[serde(default)]
    pub supplier: Option<Supplier>,
    #[serde(default)]
    pub status: Option<ProductStatus>,
}

impl Product {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }

    pub fn category_name(&self) -> Option<&str> {
        self.category.as_ref().and_then(|c| c.name.as_deref())
    }

    pub fn supplier_name(&self) -> Option<&str> {
        self.supplier.as_ref().and_then(|s| s.name.as_deref())
    }

    /// Status reported by the API, or derived from stock vs reorder level.
    ///
    /// Returns `None` only when neither the status nor the stock quantity is known.
    pub fn effective_status(&self) -> Option<ProductStatus> {
        if self.status.is_some() {
            return self.status;
        }
        let stock = self.stock_quantity?;
        let status = if stock <= 0 {
            ProductStatus::OutOfStock
        } else if stock <= self.reorder_level.unwrap_or(0) {
            ProductStatus::LowStock
        } else {
            ProductStatus::InStock
        };
        Some(status)
    }

    /// Stock value at list price
    pub fn stock_value(&self) -> f64 {
        self.price.unwrap_or(0.0) * self.stock_quantity.unwrap_or(0) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn product(stock: Option<i64>, reorder: Option<i64>) -> Product {
        Product {
            id: "p-1".into(),
            stock_quantity: stock,
            reorder_level: reorder,
            ..Default::default()
        }
    }

    #[test]
    fn test_effective_status_derived_from_stock() {
        assert_eq!(product(Some(0), Some(5)).effective_status(), Some(ProductStatus::OutOfStock));
        assert_eq!(product(Some(5), Some(5)).effective_status(), Some(ProductStatus::LowStock));
        assert_eq!(product(Some(6), Some(5)).effective_status(), Some(ProductStatus::InStock));
        assert_eq!(product(None, Some(5)).effective_status(), None);
    }

    #[test]
    fn test_reported_status_wins() {
        let mut p = product(Some(100), Some(5));
        p.status = Some(ProductStatus::Discontinued);
        assert_eq!(p.effective_status(), Some(ProductStatus::Discontinued));
    }

    #[test]
    fn test_deserialize_api_payload() {
        let json = r#"{
            "id": "8f1c",
            "name": "Laptop Stand",
            "description": null,
            "sku": "LS-01",
            "price": 49.99,
            "stockQuantity": 15,
            "reorderLevel": 20,
            "categoryId": "c-1",
            "category": { "id": "c-1", "name": "Office", "description": null },
            "supplierId": "s-1",
            "status": 1
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.category_name(), Some("Office"));
        assert_eq!(p.status, Some(ProductStatus::LowStock));
        assert_eq!(p.supplier, None);
        assert!((p.stock_value() - 749.85).abs() < 1e-9);
    }
}
