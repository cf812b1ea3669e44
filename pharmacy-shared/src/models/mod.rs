pub mod cart;
pub mod catalog;
pub mod delivery;
pub mod errors;
pub mod order;
pub mod prescription;
pub mod timestamp;
pub mod user;

pub use cart::{
    AddCartItemRequest, Cart, CartItem, CartItemValidation, CartSummary, CheckoutValidation,
    UpdateCartItemRequest,
};
pub use catalog::{Category, Medicine, MedicineQuery};
pub use delivery::{EmergencyDeliveryRequest, EmergencyDeliveryResponse};
pub use errors::ErrorResponse;
pub use order::{
    CreateOrderRequest, DeliveryPartnerContact, Order, OrderItem, OrderStatus, OrderTracking,
    PaymentMethod,
};
pub use prescription::{Prescription, PrescriptionStatus};
pub use timestamp::Timestamp;
pub use user::{LoginRequest, ProfileUpdate, RegisterRequest, TokenResponse, User, UserRole};

/// Format an amount the way every price in the storefront is shown.
#[must_use]
pub fn format_price(amount: rust_decimal::Decimal) -> String {
    format!("${:.2}", amount.round_dp(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(Decimal::new(45, 1)), "$4.50");
        assert_eq!(format_price(Decimal::new(10, 0)), "$10.00");
        assert_eq!(format_price(Decimal::new(19999, 3)), "$20.00");
    }
}
