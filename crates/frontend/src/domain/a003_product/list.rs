//! List-view binding for products

use crate::shared::list_view::{FieldValue, FilterSpec, FilterValue, ListRow};
use contracts::domain::a001_category::Category;
use contracts::domain::a003_product::Product;
use contracts::enums::ProductStatus;

pub const DIM_CATEGORY: &str = "category";
pub const DIM_STATUS: &str = "status";
pub const DIM_PRICE: &str = "price";

/// Price slider bounds
pub const PRICE_BOUNDS: (f64, f64) = (0.0, 500.0);

impl ListRow for Product {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::text(self.id.as_str()),
            "name" => FieldValue::from_opt_text(self.name.as_deref()),
            "sku" => FieldValue::from_opt_text(self.sku.as_deref()),
            "description" => FieldValue::from_opt_text(self.description.as_deref()),
            "category" => FieldValue::from_opt_text(self.category_name()),
            "supplier" => FieldValue::from_opt_text(self.supplier_name()),
            "price" => FieldValue::from_opt_number(self.price),
            "quantity" | "stockQuantity" => {
                FieldValue::from_opt_number(self.stock_quantity.map(|q| q as f64))
            }
            "reorderLevel" => FieldValue::from_opt_number(self.reorder_level.map(|q| q as f64)),
            "status" => {
                FieldValue::from_opt_number(self.effective_status().map(|s| s.code() as f64))
            }
            "value" => FieldValue::Number(self.stock_value()),
            _ => FieldValue::Missing,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "category", "id"]
    }
}

/// Status filter options as (value, label)
pub fn status_options() -> Vec<(FilterValue, String)> {
    ProductStatus::all()
        .into_iter()
        .map(|s| (FilterValue::from(s.code()), s.label().to_string()))
        .collect()
}

/// Category filter options: catalog categories first, then any other
/// category names found on the products, without duplicates
pub fn category_options(categories: &[Category], products: &[Product]) -> Vec<(FilterValue, String)> {
    let mut names: Vec<&str> = Vec::new();
    let catalog = categories.iter().filter_map(|c| c.name.as_deref());
    for name in catalog.chain(products.iter().filter_map(Product::category_name)) {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    names
        .into_iter()
        .map(|n| (FilterValue::from(n), n.to_string()))
        .collect()
}

/// Current price constraint, or the full slider range when none is set
pub fn price_range(filter: &FilterSpec) -> (f64, f64) {
    filter.range(DIM_PRICE).unwrap_or(PRICE_BOUNDS)
}

/// Apply a price range; the full slider range removes the constraint
pub fn set_price_range(filter: &mut FilterSpec, min: f64, max: f64) {
    if (min, max) == PRICE_BOUNDS {
        filter.clear_dimension(DIM_PRICE);
    } else {
        filter.set_range(DIM_PRICE, min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{filter_rows, sort_rows, SortSpec};
    use pretty_assertions::assert_eq;

    fn product(id: &str, name: &str, category: &str, price: f64, stock: i64) -> Product {
        Product {
            id: id.to_string(),
            name: Some(name.to_string()),
            price: Some(price),
            stock_quantity: Some(stock),
            reorder_level: Some(10),
            category: Some(Category {
                id: format!("c-{}", category),
                name: Some(category.to_string()),
                description: None,
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_status_field_uses_effective_status() {
        let p = product("p1", "Mouse", "Peripherals", 20.0, 5);
        assert_eq!(p.field(DIM_STATUS), FieldValue::Number(1.0));
        let unknown = Product {
            id: "p2".into(),
            ..Default::default()
        };
        assert_eq!(unknown.field(DIM_STATUS), FieldValue::Missing);
    }

    #[test]
    fn test_quantity_aliases() {
        let p = product("p1", "Mouse", "Peripherals", 20.0, 5);
        assert_eq!(p.field("quantity"), p.field("stockQuantity"));
        assert_eq!(p.field("unknown"), FieldValue::Missing);
    }

    #[test]
    fn test_low_stock_under_100() {
        let rows = vec![
            product("p1", "Mouse", "Peripherals", 50.0, 5),
            product("p2", "Monitor", "Displays", 500.0, 40),
        ];
        let mut filter = FilterSpec::new().with_values(DIM_STATUS, [ProductStatus::LowStock.code()]);
        set_price_range(&mut filter, 0.0, 100.0);
        let ids: Vec<&str> = filter_rows(&rows, &filter).iter().map(|p| p.row_id()).collect();
        assert_eq!(ids, vec!["p1"]);
    }

    #[test]
    fn test_full_price_range_clears_constraint() {
        let mut filter = FilterSpec::new();
        set_price_range(&mut filter, 10.0, 200.0);
        assert_eq!(price_range(&filter), (10.0, 200.0));
        set_price_range(&mut filter, 0.0, 500.0);
        assert!(filter.is_unconstrained());
        assert_eq!(price_range(&filter), PRICE_BOUNDS);
    }

    #[test]
    fn test_category_options_distinct() {
        let rows = vec![
            product("p1", "Mouse", "Peripherals", 20.0, 50),
            product("p2", "Monitor", "Displays", 200.0, 50),
            product("p3", "Keyboard", "Peripherals", 40.0, 50),
        ];
        let labels: Vec<String> = category_options(&[], &rows).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["Peripherals", "Displays"]);

        let catalog = vec![Category {
            id: "c-audio".into(),
            name: Some("Audio".into()),
            description: None,
        }];
        let labels: Vec<String> = category_options(&catalog, &rows).into_iter().map(|(_, l)| l).collect();
        assert_eq!(labels, vec!["Audio", "Peripherals", "Displays"]);
    }

    #[test]
    fn test_search_by_category_and_sort_by_price() {
        let rows = vec![
            product("p1", "Mouse", "Peripherals", 20.0, 50),
            product("p2", "Monitor", "Displays", 200.0, 50),
            product("p3", "Keyboard", "Peripherals", 40.0, 50),
        ];
        let filter = FilterSpec::new().with_search("periph");
        let filtered: Vec<Product> = filter_rows(&rows, &filter).into_iter().cloned().collect();
        let sorted: Vec<&str> = sort_rows(&filtered, &SortSpec::desc("price"))
            .iter()
            .map(|p| p.row_id())
            .collect();
        assert_eq!(sorted, vec!["p3", "p1"]);
    }
}
