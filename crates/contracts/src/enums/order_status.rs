use super::BadgeTone;
use serde::{Deserialize, Serialize};

/// Fulfilment state of an order
///
/// `Processing` was added after the original five codes, hence code 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Canceled,
    Returned,
}

impl OrderStatus {
    pub fn code(&self) -> i32 {
        match self {
            OrderStatus::Pending => 0,
            OrderStatus::Shipped => 1,
            OrderStatus::Delivered => 2,
            OrderStatus::Canceled => 3,
            OrderStatus::Returned => 4,
            OrderStatus::Processing => 5,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(OrderStatus::Pending),
            1 => Some(OrderStatus::Shipped),
            2 => Some(OrderStatus::Delivered),
            3 => Some(OrderStatus::Canceled),
            4 => Some(OrderStatus::Returned),
            5 => Some(OrderStatus::Processing),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Canceled => "Canceled",
            OrderStatus::Returned => "Returned",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            OrderStatus::Pending => BadgeTone::Warning,
            OrderStatus::Processing => BadgeTone::Info,
            OrderStatus::Shipped => BadgeTone::Accent,
            OrderStatus::Delivered => BadgeTone::Success,
            OrderStatus::Canceled => BadgeTone::Danger,
            OrderStatus::Returned => BadgeTone::Info,
        }
    }

    /// Orders still moving through fulfilment
    pub fn is_active(&self) -> bool {
        match self {
            OrderStatus::Pending | OrderStatus::Processing | OrderStatus::Shipped => true,
            OrderStatus::Delivered | OrderStatus::Canceled | OrderStatus::Returned => false,
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![
            OrderStatus::Pending,
            OrderStatus::Processing,
            OrderStatus::Shipped,
            OrderStatus::Delivered,
            OrderStatus::Canceled,
            OrderStatus::Returned,
        ]
    }
}

impl TryFrom<i32> for OrderStatus {
    type Error = anyhow::Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| anyhow::anyhow!("unknown order status code: {}", code))
    }
}

impl From<OrderStatus> for i32 {
    fn from(status: OrderStatus) -> Self {
        status.code()
    }
}
