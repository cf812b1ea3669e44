//! Public catalog: categories and medicine search.

use shared::models::{Category, Medicine, MedicineQuery};

use super::read_json;
use crate::api::{PharmacyClient, RequestOptions};
use crate::error::ClientError;

pub async fn load_categories(client: &PharmacyClient) -> Result<Vec<Category>, ClientError> {
    let response = client.request("/categories/", RequestOptions::get()).await;
    read_json(client, response, "Failed to load categories")
}

/// Search the catalog; only the filters set on `query` are sent.
pub async fn search_medicines(
    client: &PharmacyClient,
    query: &MedicineQuery,
) -> Result<Vec<Medicine>, ClientError> {
    let options = RequestOptions::get().query(query.to_pairs());
    let response = client.request("/medicines/search", options).await;
    read_json(client, response, "Failed to load medicines")
}
