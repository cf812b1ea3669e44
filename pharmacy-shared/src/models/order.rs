use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Medicine, Timestamp};

/// Lifecycle of an order as reported by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Processing,
    Ready,
    OutForDelivery,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Processing => "processing",
            Self::Ready => "ready",
            Self::OutForDelivery => "out_for_delivery",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment options offered at checkout.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethod {
    #[default]
    CashOnDelivery,
    Card,
}

impl PaymentMethod {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "cash_on_delivery",
            Self::Card => "card",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CashOnDelivery => "Cash on Delivery",
            Self::Card => "Credit/Debit Card",
        }
    }

    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "cash_on_delivery" => Some(Self::CashOnDelivery),
            "card" => Some(Self::Card),
            _ => None,
        }
    }
}

/// One line of a placed order, priced at order time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderItem {
    pub id: i64,
    pub medicine_id: i64,
    pub quantity: i64,
    pub price: Decimal,
    #[serde(default)]
    pub prescription_id: Option<i64>,
    pub medicine: Medicine,
}

/// Order as returned by `/orders/` and `/orders/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: i64,
    pub order_number: String,
    pub total_amount: Decimal,
    #[serde(default)]
    pub delivery_fee: Decimal,
    #[serde(default)]
    pub tax_amount: Decimal,
    #[serde(default)]
    pub discount_amount: Decimal,
    pub status: OrderStatus,
    #[serde(default)]
    pub delivery_address: String,
    #[serde(default)]
    pub delivery_phone: String,
    #[serde(default)]
    pub estimated_delivery_time: Option<Timestamp>,
    #[serde(default)]
    pub actual_delivery_time: Option<Timestamp>,
    #[serde(default)]
    pub is_emergency: bool,
    #[serde(default)]
    pub payment_method: String,
    #[serde(default)]
    pub payment_status: String,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub delivery_notes: Option<String>,
    pub created_at: Timestamp,
    #[serde(default)]
    pub updated_at: Option<Timestamp>,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
}

/// Checkout form body for `POST /orders/`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct CreateOrderRequest {
    pub delivery_address: String,
    pub delivery_phone: String,
    pub payment_method: PaymentMethod,
    pub is_emergency: bool,
    pub delivery_notes: Option<String>,
}

/// Courier assigned to an order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliveryPartnerContact {
    pub name: String,
    pub phone: String,
}

/// Live tracking view from `GET /orders/{id}/track`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderTracking {
    pub order_id: i64,
    pub order_number: String,
    pub status: OrderStatus,
    #[serde(default)]
    pub progress_percentage: u8,
    #[serde(default)]
    pub tracking_number: Option<String>,
    #[serde(default)]
    pub estimated_delivery_time: Option<Timestamp>,
    #[serde(default)]
    pub actual_delivery_time: Option<Timestamp>,
    #[serde(default)]
    pub delivery_partner: Option<DeliveryPartnerContact>,
    #[serde(default)]
    pub delivery_notes: Option<String>,
    #[serde(default)]
    pub is_emergency: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_order_from_backend() {
        let order: Order = serde_json::from_value(json!({
            "id": 5,
            "order_number": "ORD-20250201-0005",
            "total_amount": 19.45,
            "delivery_fee": 5.0,
            "tax_amount": 0.45,
            "discount_amount": 0.0,
            "status": "out_for_delivery",
            "delivery_address": "12 Elm St",
            "delivery_phone": "+15550100",
            "estimated_delivery_time": "2025-02-01T10:30:00",
            "actual_delivery_time": null,
            "is_emergency": false,
            "payment_method": "card",
            "payment_status": "pending",
            "tracking_number": "TRK123",
            "delivery_notes": null,
            "created_at": "2025-02-01T10:00:00",
            "updated_at": "2025-02-01T10:05:00",
            "order_items": [{
                "id": 1,
                "medicine_id": 3,
                "quantity": 2,
                "price": 7.0,
                "prescription_id": null,
                "medicine": {"id": 3, "name": "Paracetamol", "price": 7.0}
            }]
        }))
        .unwrap();

        assert_eq!(order.status, OrderStatus::OutForDelivery);
        assert_eq!(order.total_amount, Decimal::new(1945, 2));
        assert_eq!(order.order_items.len(), 1);
        assert!(order.estimated_delivery_time.is_some());
    }

    #[test]
    fn test_create_order_request_wire_format() {
        let request = CreateOrderRequest {
            delivery_address: "12 Elm St".to_string(),
            delivery_phone: "+15550100".to_string(),
            payment_method: PaymentMethod::CashOnDelivery,
            is_emergency: true,
            delivery_notes: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "delivery_address": "12 Elm St",
                "delivery_phone": "+15550100",
                "payment_method": "cash_on_delivery",
                "is_emergency": true,
                "delivery_notes": null
            })
        );
    }

    #[test]
    fn test_tracking_with_partner() {
        let tracking: OrderTracking = serde_json::from_value(json!({
            "order_id": 5,
            "order_number": "ORD-5",
            "status": "processing",
            "progress_percentage": 50,
            "tracking_number": "TRK123",
            "estimated_delivery_time": null,
            "actual_delivery_time": null,
            "delivery_partner": {"name": "Ravi", "phone": "+15550199"},
            "delivery_notes": "Leave at door",
            "is_emergency": false
        }))
        .unwrap();

        assert_eq!(tracking.progress_percentage, 50);
        assert_eq!(tracking.delivery_partner.unwrap().name, "Ravi");
    }

    #[test]
    fn test_payment_method_values() {
        for method in [PaymentMethod::CashOnDelivery, PaymentMethod::Card] {
            assert_eq!(PaymentMethod::from_value(method.as_str()), Some(method));
        }
        assert_eq!(PaymentMethod::from_value("bitcoin"), None);
        assert_eq!(OrderStatus::OutForDelivery.to_string(), "out_for_delivery");
    }
}
