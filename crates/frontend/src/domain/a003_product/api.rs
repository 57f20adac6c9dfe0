use contracts::domain::a003_product::Product;

use crate::shared::api_utils::{delete, get_json, id_segment, post_json, put_json, ApiError};

const BASE: &str = "/api/products";

pub async fn fetch_products() -> Result<Vec<Product>, ApiError> {
    get_json(BASE).await
}

pub async fn fetch_product(id: &str) -> Result<Product, ApiError> {
    get_json(&format!("{}/{}", BASE, id_segment(id))).await
}

/// Products supplied by one supplier
pub async fn fetch_products_by_supplier(supplier_id: &str) -> Result<Vec<Product>, ApiError> {
    get_json(&format!("/api/SuppliersPage/Products/{}", id_segment(supplier_id))).await
}

/// Returns the stored record as echoed by the API
pub async fn create_product(item: &Product) -> Result<Product, ApiError> {
    post_json(BASE, item).await
}

pub async fn update_product(item: &Product) -> Result<(), ApiError> {
    put_json(&format!("{}/{}", BASE, id_segment(&item.id)), item).await
}

pub async fn delete_product(id: &str) -> Result<(), ApiError> {
    delete(&format!("{}/{}", BASE, id_segment(id))).await
}
