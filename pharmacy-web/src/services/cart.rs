//! Shopping cart calls. Every mutation is followed by a full reload.

use shared::models::{
    AddCartItemRequest, Cart, CartSummary, CheckoutValidation, Medicine, UpdateCartItemRequest,
};
use tracing::debug;

use super::{expect_success, read_json};
use crate::api::{PharmacyClient, RequestOptions};
use crate::error::ClientError;
use crate::routes::Route;
use crate::shell::NoticeLevel;

const LOGIN_REQUIRED: &str = "Please login to add items to cart";
const PRESCRIPTION_REQUIRED: &str = "Prescription required for this medicine";

fn item_endpoint(item_id: i64) -> String {
    format!("/cart/items/{item_id}")
}

fn count_items(cart: &Cart) -> u32 {
    u32::try_from(cart.items.len()).unwrap_or(u32::MAX)
}

pub async fn load_cart(client: &PharmacyClient) -> Result<Cart, ClientError> {
    let response = client.request("/cart/", RequestOptions::get()).await;
    let cart: Cart = read_json(client, response, "Failed to load cart")?;
    client.cart_changed(count_items(&cart));
    Ok(cart)
}

/// Put one unit of `medicine` in the cart.
///
/// Requires a signed-in user, and a prescription for prescription-only
/// medicines; both are checked before any request is made.
pub async fn add_to_cart(
    client: &PharmacyClient,
    medicine: &Medicine,
    prescription_id: Option<i64>,
) -> Result<(), ClientError> {
    if !client.session().is_authenticated() {
        client.notify(NoticeLevel::Warning, LOGIN_REQUIRED);
        client.redirect(Route::Login);
        return Err(ClientError::Validation(LOGIN_REQUIRED.into()));
    }
    if medicine.prescription_required && prescription_id.is_none() {
        return Err(client.surface(ClientError::Validation(PRESCRIPTION_REQUIRED.into())));
    }

    let request = AddCartItemRequest {
        medicine_id: medicine.id,
        quantity: 1,
        prescription_id,
    };
    let options = RequestOptions::post()
        .json(&request)
        .map_err(|err| client.surface(err))?;
    let response = client.request("/cart/items", options).await;
    expect_success(client, response, "Failed to add to cart")?;

    client.notify(NoticeLevel::Success, &format!("{} added to cart!", medicine.name));
    refresh_badge(client).await;
    Ok(())
}

/// Set the quantity of a line; zero or less removes it.
pub async fn update_quantity(
    client: &PharmacyClient,
    item_id: i64,
    quantity: i64,
) -> Result<Cart, ClientError> {
    if quantity <= 0 {
        return remove_item(client, item_id).await;
    }

    let options = RequestOptions::put()
        .json(&UpdateCartItemRequest { quantity })
        .map_err(|err| client.surface(err))?;
    let response = client.request(&item_endpoint(item_id), options).await;
    expect_success(client, response, "Failed to update cart")?;
    load_cart(client).await
}

pub async fn remove_item(client: &PharmacyClient, item_id: i64) -> Result<Cart, ClientError> {
    let response = client
        .request(&item_endpoint(item_id), RequestOptions::delete())
        .await;
    expect_success(client, response, "Failed to remove item")?;

    let cart = load_cart(client).await?;
    client.notify(NoticeLevel::Success, "Item removed from cart");
    Ok(cart)
}

/// Ask the backend whether the cart can be checked out.
///
/// A blocked checkout is reported to the user; the caller only needs to look
/// at `can_proceed_to_checkout`.
pub async fn validate_for_checkout(client: &PharmacyClient) -> Result<CheckoutValidation, ClientError> {
    let response = client
        .request("/cart/validate-prescriptions", RequestOptions::post())
        .await;
    let validation: CheckoutValidation = read_json(client, response, "Failed to validate cart")?;
    if !validation.can_proceed_to_checkout {
        client.notify(
            NoticeLevel::Error,
            &format!("Cannot proceed: {} issues found", validation.total_issues),
        );
    }
    Ok(validation)
}

pub async fn summary(client: &PharmacyClient) -> Result<CartSummary, ClientError> {
    let response = client.request("/cart/summary", RequestOptions::get()).await;
    let response = response.ok_or(ClientError::Handled)?;
    if !response.is_success() {
        return Err(response.into_error("Failed to load cart summary"));
    }
    response.json()
}

/// Update the header badge from the cart summary. Quiet on failure.
pub async fn refresh_badge(client: &PharmacyClient) {
    if !client.session().is_authenticated() {
        return;
    }
    match summary(client).await {
        Ok(summary) => client.cart_changed(summary.total_items),
        Err(err) => debug!(error = %err, "cart badge not refreshed"),
    }
}
