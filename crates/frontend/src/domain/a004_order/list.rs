//! List-view binding for orders

use crate::shared::list_view::{FieldValue, FilterValue, ListRow};
use contracts::domain::a004_order::Order;
use contracts::enums::{OrderStatus, PaymentStatus};

pub const DIM_STATUS: &str = "status";
pub const DIM_PAYMENT_STATUS: &str = "paymentStatus";

impl ListRow for Order {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::text(self.id.as_str()),
            "customer" => FieldValue::from_opt_text(self.customer_name().as_deref()),
            // RFC 3339 text sorts chronologically
            "orderDate" => {
                FieldValue::from_opt_text(self.order_date.map(|d| d.to_rfc3339()).as_deref())
            }
            "deliveryDate" => {
                FieldValue::from_opt_text(self.delivery_date.map(|d| d.to_rfc3339()).as_deref())
            }
            "totalAmount" => FieldValue::Number(self.amount()),
            "status" => FieldValue::from_opt_number(self.status.map(|s| s.code() as f64)),
            "paymentStatus" => {
                FieldValue::from_opt_number(self.payment_status.map(|s| s.code() as f64))
            }
            "paymentMethod" => FieldValue::Number(self.payment_method.code() as f64),
            "items" => FieldValue::Number(self.item_count() as f64),
            _ => FieldValue::Missing,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["id", "customer"]
    }
}

pub fn status_options() -> Vec<(FilterValue, String)> {
    OrderStatus::all()
        .into_iter()
        .map(|s| (FilterValue::from(s.code()), s.label().to_string()))
        .collect()
}

pub fn payment_status_options() -> Vec<(FilterValue, String)> {
    PaymentStatus::all()
        .into_iter()
        .map(|s| (FilterValue::from(s.code()), s.label().to_string()))
        .collect()
}

/// Orders that still need handling
pub fn active_count(orders: &[Order]) -> usize {
    orders
        .iter()
        .filter(|o| o.status.map_or(false, |s| s.is_active()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{FilterSpec, ListViewController, SortSpec};
    use chrono::{TimeZone, Utc};
    use contracts::enums::PaymentMethod;
    use contracts::system::users::User;
    use pretty_assertions::assert_eq;

    fn order(id: &str, day: u32, status: OrderStatus, paid: PaymentStatus) -> Order {
        Order {
            id: id.to_string(),
            order_date: Some(Utc.with_ymd_and_hms(2025, 3, day, 9, 0, 0).unwrap()),
            delivery_date: None,
            total_amount: Some(day as f64 * 10.0),
            payment_method: PaymentMethod::CreditCard,
            status: Some(status),
            payment_status: Some(paid),
            user_id: None,
            user: Some(User {
                first_name: Some(format!("Customer{}", id)),
                ..Default::default()
            }),
            order_items: Vec::new(),
        }
    }

    #[test]
    fn test_fields() {
        let o = order("o1", 3, OrderStatus::Shipped, PaymentStatus::Paid);
        assert_eq!(o.field("customer"), FieldValue::text("Customero1"));
        assert_eq!(o.field("totalAmount"), FieldValue::Number(30.0));
        assert_eq!(o.field("deliveryDate"), FieldValue::Missing);
        assert_eq!(o.field("items"), FieldValue::Number(0.0));
    }

    #[test]
    fn test_sort_by_order_date_desc() {
        let rows = vec![
            order("o1", 3, OrderStatus::Pending, PaymentStatus::Pending),
            order("o2", 12, OrderStatus::Delivered, PaymentStatus::Paid),
            order("o3", 7, OrderStatus::Shipped, PaymentStatus::Paid),
        ];
        let mut controller = ListViewController::new(10).with_rows(rows);
        controller.set_sort(SortSpec::desc("orderDate"));
        let ids: Vec<String> = controller.visible_ids();
        assert_eq!(ids, vec!["o2", "o3", "o1"]);
    }

    #[test]
    fn test_filter_by_status_and_payment() {
        let rows = vec![
            order("o1", 3, OrderStatus::Pending, PaymentStatus::Pending),
            order("o2", 12, OrderStatus::Delivered, PaymentStatus::Paid),
            order("o3", 7, OrderStatus::Shipped, PaymentStatus::Paid),
        ];
        let mut controller = ListViewController::new(10).with_rows(rows);
        controller.set_filter(
            FilterSpec::new()
                .with_values(DIM_STATUS, [OrderStatus::Shipped.code(), OrderStatus::Pending.code()])
                .with_values(DIM_PAYMENT_STATUS, [PaymentStatus::Paid.code()]),
        );
        assert_eq!(controller.visible_ids(), vec!["o3"]);
    }

    #[test]
    fn test_active_count() {
        let rows = vec![
            order("o1", 3, OrderStatus::Pending, PaymentStatus::Pending),
            order("o2", 12, OrderStatus::Delivered, PaymentStatus::Paid),
            order("o3", 7, OrderStatus::Processing, PaymentStatus::Paid),
        ];
        assert_eq!(active_count(&rows), 2);
    }
}
