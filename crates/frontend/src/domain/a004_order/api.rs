use contracts::domain::a004_order::Order;

use crate::shared::api_utils::{delete, get_json, id_segment, post_json, put_json, ApiError};

const BASE: &str = "/api/orders";

pub async fn fetch_orders() -> Result<Vec<Order>, ApiError> {
    get_json(BASE).await
}

pub async fn fetch_order(id: &str) -> Result<Order, ApiError> {
    get_json(&format!("{}/{}", BASE, id_segment(id))).await
}

/// Orders supplied by one supplier
pub async fn fetch_orders_by_supplier(supplier_id: &str) -> Result<Vec<Order>, ApiError> {
    get_json(&format!("/api/SuppliersPage/Orders/{}", id_segment(supplier_id))).await
}

/// Returns the stored record as echoed by the API
pub async fn create_order(item: &Order) -> Result<Order, ApiError> {
    post_json(BASE, item).await
}

pub async fn update_order(item: &Order) -> Result<(), ApiError> {
    put_json(&format!("{}/{}", BASE, id_segment(&item.id)), item).await
}

pub async fn delete_order(id: &str) -> Result<(), ApiError> {
    delete(&format!("{}/{}", BASE, id_segment(id))).await
}
