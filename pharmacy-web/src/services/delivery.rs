//! Emergency delivery requests.

use shared::models::EmergencyDeliveryResponse;
use tracing::info;

use super::read_json;
use crate::api::{PharmacyClient, RequestOptions};
use crate::containers::form_validation::EmergencyForm;
use crate::error::ClientError;
use crate::routes::Route;
use crate::shell::NoticeLevel;

const LOGIN_REQUIRED: &str = "Please login to request emergency delivery";

/// Check that an emergency order can be started; sends anonymous users to login.
pub fn can_request_emergency(client: &PharmacyClient) -> bool {
    if client.session().is_authenticated() {
        return true;
    }
    client.notify(NoticeLevel::Warning, LOGIN_REQUIRED);
    client.redirect(Route::Login);
    false
}

pub async fn request_emergency(
    client: &PharmacyClient,
    form: &EmergencyForm,
) -> Result<EmergencyDeliveryResponse, ClientError> {
    if !can_request_emergency(client) {
        return Err(ClientError::Validation(LOGIN_REQUIRED.into()));
    }
    let request = form.validate().map_err(|err| client.surface(err.into()))?;
    let options = RequestOptions::post()
        .json(&request)
        .map_err(|err| client.surface(err))?;
    let response = client.request("/delivery/emergency", options).await;
    let created: EmergencyDeliveryResponse = read_json(client, response, "Emergency order failed")?;

    info!(order_number = %created.order_number, "emergency order created");
    let eta = created
        .estimated_delivery_time
        .as_ref()
        .map_or_else(|| "soon".to_string(), |time| time.display());
    client.notify(
        NoticeLevel::Success,
        &format!(
            "Emergency order created! Order #{}. Estimated delivery: {eta}",
            created.order_number
        ),
    );
    client.redirect(Route::Orders);
    Ok(created)
}
