use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Medicine, Timestamp};

/// One line of the shopping cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartItem {
    pub id: i64,
    pub medicine_id: i64,
    pub quantity: i64,
    #[serde(default)]
    pub prescription_id: Option<i64>,
    pub medicine: Medicine,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

impl CartItem {
    /// Price of the line at the current catalog price.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.medicine.price * Decimal::from(self.quantity)
    }
}

/// Cart snapshot returned by `GET /cart/`. Replaced wholesale after every mutation.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    #[serde(default)]
    pub items: Vec<CartItem>,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub prescription_required_items: u32,
}

impl Cart {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Body for `POST /cart/items`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddCartItemRequest {
    pub medicine_id: i64,
    pub quantity: i64,
    pub prescription_id: Option<i64>,
}

/// Body for `PUT /cart/items/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCartItemRequest {
    pub quantity: i64,
}

/// Pricing breakdown from `GET /cart/summary`, used for the header badge.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub subtotal: Decimal,
    #[serde(default)]
    pub tax_amount: Decimal,
    #[serde(default)]
    pub total_amount: Decimal,
    #[serde(default)]
    pub prescription_required_items: u32,
    #[serde(default)]
    pub out_of_stock_items: u32,
}

/// Per-line result of `POST /cart/validate-prescriptions`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItemValidation {
    pub cart_item_id: i64,
    pub medicine_name: String,
    pub quantity: i64,
    pub requires_prescription: bool,
    pub has_prescription: bool,
    #[serde(default)]
    pub prescription_status: Option<String>,
    #[serde(default)]
    pub issues: Vec<String>,
}

/// Checkout readiness report.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CheckoutValidation {
    #[serde(default)]
    pub validation_results: Vec<CartItemValidation>,
    #[serde(default)]
    pub total_items: u32,
    #[serde(default)]
    pub total_issues: u32,
    #[serde(default)]
    pub can_proceed_to_checkout: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cart_json() -> serde_json::Value {
        json!({
            "items": [{
                "id": 11,
                "medicine_id": 3,
                "quantity": 2,
                "prescription_id": null,
                "medicine": {
                    "id": 3,
                    "name": "Paracetamol",
                    "price": 4.5,
                    "prescription_required": false,
                    "stock_quantity": 40
                },
                "created_at": "2025-02-01T09:00:00"
            }],
            "total_amount": 9.0,
            "prescription_required_items": 0
        })
    }

    #[test]
    fn test_cart_snapshot() {
        let cart: Cart = serde_json::from_value(cart_json()).unwrap();

        assert!(!cart.is_empty());
        assert_eq!(cart.items[0].line_total(), Decimal::new(9, 0));
        assert_eq!(cart.total_amount, Decimal::new(9, 0));
    }

    #[test]
    fn test_empty_cart_defaults() {
        let cart: Cart = serde_json::from_value(json!({})).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.total_amount, Decimal::ZERO);
    }

    #[test]
    fn test_add_request_serializes_null_prescription() {
        let request = AddCartItemRequest {
            medicine_id: 3,
            quantity: 1,
            prescription_id: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"medicine_id": 3, "quantity": 1, "prescription_id": null})
        );
    }

    #[test]
    fn test_checkout_validation() {
        let report: CheckoutValidation = serde_json::from_value(json!({
            "validation_results": [{
                "cart_item_id": 11,
                "medicine_name": "Insulin",
                "quantity": 1,
                "requires_prescription": true,
                "has_prescription": false,
                "prescription_status": null,
                "issues": ["Prescription required but not provided"]
            }],
            "total_items": 1,
            "total_issues": 1,
            "can_proceed_to_checkout": false
        }))
        .unwrap();

        assert!(!report.can_proceed_to_checkout);
        assert_eq!(report.total_issues, 1);
        assert_eq!(report.validation_results[0].issues.len(), 1);
    }

    #[test]
    fn test_summary() {
        let summary: CartSummary = serde_json::from_value(json!({
            "total_items": 2,
            "subtotal": 10.0,
            "tax_amount": 0.5,
            "total_amount": 10.5,
            "prescription_required_items": 1,
            "out_of_stock_items": 0
        }))
        .unwrap();
        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.total_amount, Decimal::new(105, 1));
    }
}
