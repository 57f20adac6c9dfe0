use super::BadgeTone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum SupplierStatus {
    Active,
    Inactive,
    OnHold,
    New,
}

impl SupplierStatus {
    pub fn code(&self) -> i32 {
        match self {
            SupplierStatus::Active => 0,
            SupplierStatus::Inactive => 1,
            SupplierStatus::OnHold => 2,
            SupplierStatus::New => 3,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(SupplierStatus::Active),
            1 => Some(SupplierStatus::Inactive),
            2 => Some(SupplierStatus::OnHold),
            3 => Some(SupplierStatus::New),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SupplierStatus::Active => "Active",
            SupplierStatus::Inactive => "Inactive",
            SupplierStatus::OnHold => "On Hold",
            SupplierStatus::New => "New",
        }
    }

    pub fn tone(&self) -> BadgeTone {
        match self {
            SupplierStatus::Active => BadgeTone::Success,
            SupplierStatus::Inactive => BadgeTone::Danger,
            SupplierStatus::OnHold => BadgeTone::Warning,
            SupplierStatus::New => BadgeTone::Info,
        }
    }

    pub fn all() -> Vec<SupplierStatus> {
        vec![
            SupplierStatus::Active,
            SupplierStatus::Inactive,
            SupplierStatus::OnHold,
            SupplierStatus::New,
        ]
    }
}

impl TryFrom<i32> for SupplierStatus {
    type Error = anyhow::Error;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        Self::from_code(code).ok_or_else(|| anyhow::anyhow!("unknown supplier status code: {}", code))
    }
}

impl From<SupplierStatus> for i32 {
    fn from(status: SupplierStatus) -> Self {
        status.code()
    }
}
