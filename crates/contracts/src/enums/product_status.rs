use super::BadgeTone;
use serde::{Deserialize, Serialize};

/// Stock state of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum ProductStatus {
    InStock,
    LowStock,
    OutOfStock,
    Discontinued,
}

impl ProductStatus {
    /// Wire code used by the inventory API
    pub fn code(&self) -> i32 {
        match self {
            ProductStatus::InStock => 0,
            ProductStatus::LowStock => 1,
            ProductStatus::OutOfStock => 2,
            ProductStatus::Discontinued => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(ProductStatus::InStock),
            1 => Some(ProductStatus::LowStock),
            2 => Some(ProductStatus::OutOfStock),
            3 => Some(ProductStatus::Discontinued),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::InStock => "In stock",
            ProductStatus::LowStock => "Low stock",
            ProductStatus::OutOfStock => "Out of stock",
            ProductStatus::Discontinued => "Discontinued",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            ProductStatus::InStock => BadgeTone::Success,
            ProductStatus::LowStock => BadgeTone::Warning,
            ProductStatus::OutOfStock => BadgeTone::Danger,
            ProductStatus::Discontinued => BadgeTone::Neutral,
        }
    }

    /// Options in the order the status filter lists them
    pub fn all() -> Vec<ProductStatus> {
        vec![
            ProductStatus::InStock,
            ProductStatus::LowStock,
            ProductStatus::OutOfStock,
            ProductStatus::Discontinued,
        ]
    }
}

impl TryFrom<i32> for ProductStatus {
    type Error = anyhow::Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| anyhow::anyhow!("unknown product status code: {}", code))
    }
}

impl From<ProductStatus> for i32 {
    fn from(status: ProductStatus) -> Self {
        status.code()
    }
}
