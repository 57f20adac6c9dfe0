use crate::enums::SupplierStatus;
use serde::{Deserialize, Serialize};

/// Supplier of products
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Supplier {
    #[serde(default)]
    pub id: String,
    pub name: Option<String>,
    pub contact_email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub status: Option<SupplierStatus>,
}

impl Supplier {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}
