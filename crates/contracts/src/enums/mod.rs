//! Closed status enums of the inventory API.
//!
//! Every enum travels over the wire as its integer code and carries
//! exhaustive label / tone lookups for badges.

pub mod badge_tone;
pub mod order_status;
pub mod payment_method;
pub mod payment_status;
pub mod product_status;
pub mod supplier_status;

pub use badge_tone::BadgeTone;
pub use order_status::OrderStatus;
pub use payment_method::PaymentMethod;
pub use payment_status::PaymentStatus;
pub use product_status::ProductStatus;
pub use supplier_status::SupplierStatus;

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_codes_roundtrip_through_from_code() {
        for status in ProductStatus::all() {
            assert_eq!(ProductStatus::from_code(status.code()), Some(status));
        }
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::from_code(status.code()), Some(status));
        }
        for status in SupplierStatus::all() {
            assert_eq!(SupplierStatus::from_code(status.code()), Some(status));
        }
    }

    #[test]
    fn test_status_serializes_as_code() {
        let json = serde_json::to_string(&OrderStatus::Delivered).unwrap();
        assert_eq!(json, "2");
        let status: PaymentStatus = serde_json::from_str("2").unwrap();
        assert_eq!(status, PaymentStatus::Refunded);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = serde_json::from_str::<ProductStatus>("9").unwrap_err();
        assert!(err.to_string().contains("unknown product status code: 9"));
    }

    #[test]
    fn test_labels_and_tones() {
        assert_eq!(ProductStatus::LowStock.label(), "Low stock");
        assert_eq!(ProductStatus::OutOfStock.tone(), BadgeTone::Danger);
        assert_eq!(SupplierStatus::OnHold.label(), "On Hold");
        assert_eq!(OrderStatus::Shipped.tone().css_class(), "badge--accent");
        assert_eq!(PaymentMethod::CreditCard.label(), "Credit card");
    }

    #[test]
    fn test_active_orders() {
        assert!(OrderStatus::Pending.is_active());
        assert!(OrderStatus::Shipped.is_active());
        assert!(!OrderStatus::Returned.is_active());
    }
}
