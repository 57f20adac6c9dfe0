use super::BadgeTone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Refunded,
}

impl PaymentStatus {
    pub fn code(&self) -> i32 {
        match self {
            PaymentStatus::Pending => 0,
            PaymentStatus::Paid => 1,
            PaymentStatus::Refunded => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(PaymentStatus::Pending),
            1 => Some(PaymentStatus::Paid),
            2 => Some(PaymentStatus::Refunded),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Pending => "Pending",
            PaymentStatus::Paid => "Paid",
            PaymentStatus::Refunded => "Refunded",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            PaymentStatus::Pending => BadgeTone::Warning,
            PaymentStatus::Paid => BadgeTone::Success,
            PaymentStatus::Refunded => BadgeTone::Info,
        }
    }

    /// Filter order: Paid first, as on the orders page
    pub fn all() -> Vec<PaymentStatus> {
        vec![PaymentStatus::Paid, PaymentStatus::Pending, PaymentStatus::Refunded]
    }
}

impl TryFrom<i32> for PaymentStatus {
    type Error = anyhow::Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| anyhow::anyhow!("unknown payment status code: {}", code))
    }
}

impl From<PaymentStatus> for i32 {
    fn from(status: PaymentStatus) -> Self {
        status.code()
    }
}
