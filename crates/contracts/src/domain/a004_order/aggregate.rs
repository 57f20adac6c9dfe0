use crate::domain::a003_product::Product;
use crate::enums::{OrderStatus, PaymentMethod, PaymentStatus};
use crate::system::users::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Line of an order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub id: String,
    pub quantity: Option<i64>,
    pub unit_price: Option<f64>,
    #[serde(default)]
    pub order_id: String,
    #[serde(default)]
    pub product_id: String,
    #[serde(default)]
    pub product: Option<Product>,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.quantity.unwrap_or(0) as f64 * self.unit_price.unwrap_or(0.0)
    }
}

/// Customer order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(default)]
    pub id: String,
    pub order_date: Option<DateTime<Utc>>,
    pub delivery_date: Option<DateTime<Utc>>,
    pub total_amount: Option<f64>,
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default)]
    pub payment_status: Option<PaymentStatus>,
    pub user_id: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

impl Order {
    pub fn customer_name(&self) -> Option<String> {
        self.user.as_ref().map(User::display_name)
    }

    /// Total reported by the API, falling back to the sum of the lines
    pub fn amount(&self) -> f64 {
        self.total_amount
            .unwrap_or_else(|| self.order_items.iter().map(OrderItem::line_total).sum())
    }

    pub fn item_count(&self) -> usize {
        self.order_items.len()
    }
}
