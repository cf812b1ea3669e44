//! Per-entity backend calls built on the request gateway.
//!
//! Services surface their own notices; callers only branch on the result.

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod delivery;
pub mod orders;
pub mod prescriptions;

use serde::de::DeserializeOwned;

use crate::api::PharmacyClient;
use crate::error::ClientError;
use crate::transport::ApiResponse;

/// Turn a gateway result into a 2xx response, surfacing anything else.
pub(crate) fn expect_success(
    client: &PharmacyClient,
    response: Option<ApiResponse>,
    fallback: &str,
) -> Result<ApiResponse, ClientError> {
    let response = response.ok_or(ClientError::Handled)?;
    if response.is_success() {
        Ok(response)
    } else {
        Err(client.surface(response.into_error(fallback)))
    }
}

/// Like [`expect_success`], then decode the body as `T`.
pub(crate) fn read_json<T: DeserializeOwned>(
    client: &PharmacyClient,
    response: Option<ApiResponse>,
    fallback: &str,
) -> Result<T, ClientError> {
    expect_success(client, response, fallback)?
        .json()
        .map_err(|err| client.surface(err))
}
