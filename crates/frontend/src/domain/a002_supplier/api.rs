use contracts::domain::a002_supplier::Supplier;

use crate::shared::api_utils::{delete, get_json, id_segment, post_json, put_json, ApiError};

const BASE: &str = "/api/suppliers";

pub async fn fetch_suppliers() -> Result<Vec<Supplier>, ApiError> {
    get_json(BASE).await
}

pub async fn fetch_supplier(id: &str) -> Result<Supplier, ApiError> {
    get_json(&format!("{}/{}", BASE, id_segment(id))).await
}

/// Returns the stored record as echoed by the API
pub async fn create_supplier(item: &Supplier) -> Result<Supplier, ApiError> {
    post_json(BASE, item).await
}

pub async fn update_supplier(item: &Supplier) -> Result<(), ApiError> {
    put_json(&format!("{}/{}", BASE, id_segment(&item.id)), item).await
}

pub async fn delete_supplier(id: &str) -> Result<(), ApiError> {
    delete(&format!("{}/{}", BASE, id_segment(id))).await
}
