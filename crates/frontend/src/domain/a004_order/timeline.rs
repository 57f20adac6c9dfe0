//! Fulfilment timeline of an order, derived from its status and dates

use crate::shared::components::table::format_currency;
use crate::shared::date_utils::format_date_time;
use chrono::{DateTime, Duration, Utc};
use contracts::domain::a004_order::Order;
use contracts::enums::{OrderStatus, PaymentStatus};

#[derive(Debug, Clone, PartialEq)]
pub struct TimelineStep {
    pub title: &'static str,
    /// Formatted timestamp; `None` when the order has no date
    pub at: Option<String>,
    pub description: String,
    /// Last step reached so far
    pub current: bool,
}

/// How far along fulfilment a status is. Canceled orders never left placement.
fn progress(status: Option<OrderStatus>) -> u8 {
    match status {
        None | Some(OrderStatus::Pending) | Some(OrderStatus::Canceled) => 0,
        Some(OrderStatus::Processing) => 1,
        Some(OrderStatus::Shipped) => 2,
        Some(OrderStatus::Delivered) => 3,
        Some(OrderStatus::Returned) => 4,
    }
}

/// Steps reached by the order. Intermediate timestamps are estimated from the
/// order date; delivery uses the delivery date, or `now` when there is none.
pub fn timeline(order: &Order, now: DateTime<Utc>) -> Vec<TimelineStep> {
    let placed = order.order_date;
    let after = |offset: Duration| placed.map(|d| format_date_time(&(d + offset)));
    let delivered_at = format_date_time(&order.delivery_date.unwrap_or(now));
    let rank = progress(order.status);

    let mut steps = vec![TimelineStep {
        title: "Order Placed",
        at: placed.as_ref().map(format_date_time),
        description: format!(
            "Order #{} was placed by {}",
            order.id,
            order.customer_name().unwrap_or_else(|| "a guest".to_string())
        ),
        current: false,
    }];

    if order.payment_status == Some(PaymentStatus::Paid) {
        steps.push(TimelineStep {
            title: "Payment Confirmed",
            at: after(Duration::minutes(2)),
            description: format!(
                "Payment of {} was confirmed via {}",
                format_currency(order.amount()),
                order.payment_method.label()
            ),
            current: false,
        });
    }
    if rank >= 1 {
        steps.push(TimelineStep {
            title: "Processing",
            at: after(Duration::hours(7)),
            description: "Order is being prepared for shipping".to_string(),
            current: false,
        });
    }
    if rank >= 2 {
        steps.push(TimelineStep {
            title: "Shipped",
            at: after(Duration::hours(15)),
            description: "Order will be shipped via Express Delivery".to_string(),
            current: false,
        });
    }
    if rank >= 3 {
        steps.push(TimelineStep {
            title: "Delivered",
            at: Some(delivered_at.clone()),
            description: "Order delivered".to_string(),
            current: false,
        });
    }
    if rank >= 4 {
        steps.push(TimelineStep {
            title: "Returned",
            at: Some(delivered_at),
            description: "Order returned".to_string(),
            current: false,
        });
    }

    if let Some(last) = steps.last_mut() {
        last.current = true;
    }
    steps
}
