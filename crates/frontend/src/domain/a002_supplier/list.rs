use crate::shared::list_view::{FieldValue, FilterValue, ListRow};
use contracts::domain::a002_supplier::Supplier;
use contracts::enums::SupplierStatus;

pub const DIM_STATUS: &str = "status";

impl ListRow for Supplier {
    fn row_id(&self) -> &str {
        &self.id
    }

    fn field(&self, name: &str) -> FieldValue {
        match name {
            "id" => FieldValue::text(self.id.as_str()),
            "name" => FieldValue::from_opt_text(self.name.as_deref()),
            "contactEmail" => FieldValue::from_opt_text(self.contact_email.as_deref()),
            "phone" => FieldValue::from_opt_text(self.phone.as_deref()),
            "address" => FieldValue::from_opt_text(self.address.as_deref()),
            "status" => FieldValue::from_opt_number(self.status.map(|s| s.code() as f64)),
            _ => FieldValue::Missing,
        }
    }

    fn search_fields() -> &'static [&'static str] {
        &["name", "contactEmail", "id"]
    }
}

pub fn status_options() -> Vec<(FilterValue, String)> {
    SupplierStatus::all()
        .into_iter()
        .map(|s| (FilterValue::from(s.code()), s.label().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::{FilterSpec, ListViewController};
    use pretty_assertions::assert_eq;

    fn supplier(id: &str, name: &str, email: &str, status: SupplierStatus) -> Supplier {
        Supplier {
            id: id.to_string(),
            name: Some(name.to_string()),
            contact_email: Some(email.to_string()),
            phone: None,
            address: None,
            status: Some(status),
        }
    }

    #[test]
    fn test_search_matches_email() {
        let rows = vec![
            supplier("s1", "Acme", "sales@acme.io", SupplierStatus::Active),
            supplier("s2", "Globex", "hello@globex.com", SupplierStatus::OnHold),
        ];
        let mut controller = ListViewController::new(8).with_rows(rows);
        controller.set_search("GLOBEX.COM");
        assert_eq!(controller.visible_ids(), vec!["s2"]);
    }

    #[test]
    fn test_status_filter() {
        let rows = vec![
            supplier("s1", "Acme", "sales@acme.io", SupplierStatus::Active),
            supplier("s2", "Globex", "hello@globex.com", SupplierStatus::OnHold),
            supplier("s3", "Initech", "ops@initech.com", SupplierStatus::Active),
        ];
        let mut controller = ListViewController::new(8).with_rows(rows);
        controller.set_filter(
            FilterSpec::new().with_values(DIM_STATUS, [SupplierStatus::Active.code()]),
        );
        assert_eq!(controller.visible_ids(), vec!["s1", "s3"]);
    }
}
