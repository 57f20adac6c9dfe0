//! Field access over list rows.
//!
//! Each entity exposes its columns by name so one generic pipeline can sort
//! and filter products, orders and suppliers alike.

use super::filter::FilterValue;

/// Value of a named field, as seen by sort and filter stages
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Numbers, including enum-like status codes
    Number(f64),
    Text(String),
    /// Present but neither numeric nor textual (nested objects, flags)
    Opaque,
    Missing,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    pub fn from_opt_text(value: Option<&str>) -> Self {
        value.map(FieldValue::text).unwrap_or(FieldValue::Missing)
    }

    pub fn from_opt_number(value: Option<f64>) -> Self {
        value.map(FieldValue::Number).unwrap_or(FieldValue::Missing)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Key used for categorical membership tests.
    /// Only text and integral numbers can be members of a value set.
    pub fn as_filter_value(&self) -> Option<FilterValue> {
        match self {
            FieldValue::Text(s) => Some(FilterValue::Text(s.clone())),
            FieldValue::Number(n) if n.fract() == 0.0 && n.is_finite() => {
                Some(FilterValue::Code(*n as i64))
            }
            _ => None,
        }
    }

    /// Text a search term is matched against
    pub fn search_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(s) => Some(s.to_lowercase()),
            FieldValue::Number(n) => Some(n.to_string()),
            FieldValue::Opaque | FieldValue::Missing => None,
        }
    }
}

/// A record that can be shown in a list view
pub trait ListRow {
    /// Stable unique identifier, used for selection
    fn row_id(&self) -> &str;

    /// Value of the named field; unknown names yield `FieldValue::Missing`
    fn field(&self, name: &str) -> FieldValue;

    /// Fields the free-text search looks into
    fn search_fields() -> &'static [&'static str] {
        &[]
    }
}
