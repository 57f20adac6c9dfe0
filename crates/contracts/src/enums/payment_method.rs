use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum PaymentMethod {
    Cash,
    CreditCard,
    Bitcoin,
}

impl PaymentMethod {
    pub fn code(&self) -> i32 {
        match self {
            PaymentMethod::Cash => 0,
            PaymentMethod::CreditCard => 1,
            PaymentMethod::Bitcoin => 2,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(PaymentMethod::Cash),
            1 => Some(PaymentMethod::CreditCard),
            2 => Some(PaymentMethod::Bitcoin),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "Cash",
            PaymentMethod::CreditCard => "Credit card",
            PaymentMethod::Bitcoin => "Bitcoin",
        }
    }

    pub fn all() -> Vec<PaymentMethod> {
        vec![PaymentMethod::Cash, PaymentMethod::CreditCard, PaymentMethod::Bitcoin]
    }
}

impl TryFrom<i32> for PaymentMethod {
    type Error = anyhow::Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| anyhow::anyhow!("unknown payment method code: {}", code))
    }
}

impl From<PaymentMethod> for i32 {
    fn from(method: PaymentMethod) -> Self {
        method.code()
    }
}
