//! Minimal row type shared by the list-view unit tests.

use super::row::{FieldValue, ListRow};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TestRow {
    pub id: String,
    pub name: Option<String>,
    pub category: Option<String>,
    pub status: Option<i32>,
    pub price: Option<f64>,
    /// Free-form value for mixed-kind sorting
    pub tag: Option<FieldValue>,
}

pub fn row(id: &str) -> TestRow {
    TestRow {
        id: id.to_string(),
        ..Default::default()
    }
}

impl TestRow {
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn category(mut self, category: &str) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn status(mut self, status: i32) -> Self {
        self.status = Some(status);
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    pub fn tag(mut self, value: FieldValue) -> Self {
        self.tag = Some(value);
        self
    }
}

impl ListRow for TestRow {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::text(self.id.as_str()),
            "name" => FieldValue::from_opt_text(self.name.as_deref()),
            "category" => FieldValue::from_opt_text(self.category.as_deref()),
            "status" => FieldValue::from_opt_number(self.status.map(f64::from)),
            "price" => FieldValue::from_opt_number(self.price),
            "tag" => self.tag.clone().unwrap_or(FieldValue::Missing),
            _ => FieldValue::Missing,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "category", "id"]
    }
}

pub fn ids<'a>(rows: &[&'a TestRow]) -> Vec<&'a str> {
    rows.iter().map(|r| r.id.as_str()).collect()
}
