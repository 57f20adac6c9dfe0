use contracts::domain::a001_category::Category;

use crate::shared::api_utils::{delete, get_json, id_segment, post_json, put_json, ApiError};

const BASE: &str = "/api/categories";

pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    get_json(BASE).await
}

pub async fn fetch_category(id: &str) -> Result<Category, ApiError> {
    get_json(&format!("{}/{}", BASE, id_segment(id))).await
}

pub async fn create_category(item: &Category) -> Result<Category, ApiError> {
    post_json(BASE, item).await
}

pub async fn update_category(item: &Category) -> Result<(), ApiError> {
    put_json(&format!("{}/{}", BASE, id_segment(&item.id)), item).await
}

pub async fn delete_category(id: &str) -> Result<(), ApiError> {
    delete(&format!("{}/{}", BASE, id_segment(id))).await
}
