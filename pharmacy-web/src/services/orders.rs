//! Order history, checkout and tracking.

use shared::models::{Order, OrderTracking};
use tracing::info;

use super::read_json;
use crate::api::{PharmacyClient, RequestOptions};
use crate::containers::form_validation::CheckoutForm;
use crate::error::ClientError;
use crate::routes::Route;
use crate::shell::NoticeLevel;

pub async fn list_orders(client: &PharmacyClient) -> Result<Vec<Order>, ClientError> {
    let response = client.request("/orders/", RequestOptions::get()).await;
    read_json(client, response, "Failed to load orders")
}

/// Turn the current cart into an order, then show the order history.
pub async fn place_order(client: &PharmacyClient, form: &CheckoutForm) -> Result<Order, ClientError> {
    let request = form.validate().map_err(|err| client.surface(err.into()))?;
    let options = RequestOptions::post()
        .json(&request)
        .map_err(|err| client.surface(err))?;
    let response = client.request("/orders/", options).await;
    let order: Order = read_json(client, response, "Order failed")?;

    info!(order_number = %order.order_number, "order placed");
    client.notify(
        NoticeLevel::Success,
        &format!("Order placed successfully! Order #{}", order.order_number),
    );
    client.cart_changed(0);
    client.redirect(Route::Orders);
    Ok(order)
}

pub async fn order_details(client: &PharmacyClient, order_id: i64) -> Result<Order, ClientError> {
    let response = client
        .request(&format!("/orders/{order_id}"), RequestOptions::get())
        .await;
    read_json(client, response, "Failed to load order")
}

pub async fn track_order(client: &PharmacyClient, order_id: i64) -> Result<OrderTracking, ClientError> {
    let response = client
        .request(&format!("/orders/{order_id}/track"), RequestOptions::get())
        .await;
    read_json(client, response, "Failed to load tracking")
}
