//! Login, registration, session validation and profile updates.

use shared::models::{LoginRequest, ProfileUpdate, TokenResponse, User};
use tracing::{info, warn};

use super::read_json;
use crate::api::{PharmacyClient, RequestOptions};
use crate::containers::form_validation::{ProfileForm, RegistrationForm};
use crate::error::ClientError;
use crate::routes::Route;
use crate::services::cart;
use crate::shell::NoticeLevel;

/// Exchange credentials for a session.
pub async fn login(client: &PharmacyClient, username: &str, password: &str) -> Result<User, ClientError> {
    let credentials = LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
    };
    let options = RequestOptions::post()
        .form(credentials.form_pairs())
        .credentials();
    establish(client, "/auth/login", options, "Login failed", "Login successful!").await
}

/// Create an account and sign in with it.
///
/// The form is validated first; an invalid form never reaches the network.
pub async fn register(client: &PharmacyClient, form: &RegistrationForm) -> Result<User, ClientError> {
    let request = form.validate().map_err(|err| client.surface(err.into()))?;
    let options = RequestOptions::post()
        .json(&request)
        .map_err(|err| client.surface(err))?
        .credentials();
    establish(
        client,
        "/auth/register",
        options,
        "Registration failed",
        "Registration successful!",
    )
    .await
}

async fn establish(
    client: &PharmacyClient,
    endpoint: &str,
    options: RequestOptions,
    fallback: &str,
    success: &str,
) -> Result<User, ClientError> {
    let session = client.session();
    session.begin_authentication();

    let response = client.request(endpoint, options).await;
    let token: TokenResponse = match read_json(client, response, fallback) {
        Ok(token) => token,
        Err(err) => {
            session.abort_authentication();
            return Err(err);
        }
    };

    let user = token.user.clone();
    session.set(token.access_token, token.user);
    client.notify(NoticeLevel::Success, success);
    client.redirect(Route::Dashboard);
    cart::refresh_badge(client).await;
    Ok(user)
}

/// Validate the held token and populate the session user.
///
/// Any failure ends the session exactly once; there is no retry.
pub async fn fetch_current_user(client: &PharmacyClient) -> Option<User> {
    client.session().token()?;

    let Some(response) = client.request("/auth/me", RequestOptions::get()).await else {
        // A 401 was already handled by the gateway; a network failure was not.
        if client.session().token().is_some() {
            client.end_session();
        }
        return None;
    };

    if !response.is_success() {
        warn!(status = response.status.as_u16(), "session validation failed");
        client.end_session();
        return None;
    }

    match response.json::<User>() {
        Ok(user) => {
            info!(username = %user.username, "session validated");
            client.session().set_user(user.clone());
            Some(user)
        }
        Err(err) => {
            warn!(error = %err, "undecodable user profile");
            client.end_session();
            None
        }
    }
}

/// Restore a persisted session at startup and validate it before anything routes.
pub async fn restore_session(client: &PharmacyClient) -> Option<User> {
    client.session().restore()?;
    let user = fetch_current_user(client).await?;
    cart::refresh_badge(client).await;
    Some(user)
}

pub fn logout(client: &PharmacyClient) {
    client.end_session();
}

/// Save profile changes and replace the session user with the result.
pub async fn update_profile(client: &PharmacyClient, form: &ProfileForm) -> Result<User, ClientError> {
    let update: ProfileUpdate = form.validate().map_err(|err| client.surface(err.into()))?;
    let options = RequestOptions::put()
        .json(&update)
        .map_err(|err| client.surface(err))?;
    let response = client.request("/auth/profile", options).await;
    let user: User = read_json(client, response, "Update failed")?;

    client.session().set_user(user.clone());
    client.notify(NoticeLevel::Success, "Profile updated successfully!");
    Ok(user)
}
