//! Prescription listing and upload.

use shared::models::Prescription;
use tracing::debug;

use super::read_json;
use crate::api::{PharmacyClient, RequestOptions};
use crate::containers::form_validation::PrescriptionUpload;
use crate::error::ClientError;
use crate::shell::NoticeLevel;

pub async fn list_prescriptions(client: &PharmacyClient) -> Result<Vec<Prescription>, ClientError> {
    let response = client.request("/prescriptions/", RequestOptions::get()).await;
    read_json(client, response, "Failed to load prescriptions")
}

/// Prescriptions for the add-to-cart picker on the catalog.
///
/// The picker is optional, so a failed load leaves it empty without a notice.
pub async fn picker_options(client: &PharmacyClient) -> Vec<Prescription> {
    let Some(response) = client.request("/prescriptions/", RequestOptions::get()).await else {
        return Vec::new();
    };
    if !response.is_success() {
        debug!(status = %response.status, "prescription picker not loaded");
        return Vec::new();
    }
    response.json().unwrap_or_else(|err| {
        debug!(error = %err, "prescription picker not decoded");
        Vec::new()
    })
}

/// Upload a prescription scan as multipart form data.
///
/// File type and size are checked locally first. The request goes through
/// the gateway like any other, so an expired session ends here as well.
pub async fn upload_prescription(
    client: &PharmacyClient,
    upload: &PrescriptionUpload,
) -> Result<Prescription, ClientError> {
    let form = upload.validate().map_err(|err| client.surface(err.into()))?;
    let response = client
        .request("/prescriptions/upload", RequestOptions::post().multipart(form))
        .await;
    let prescription: Prescription = read_json(client, response, "Upload failed")?;

    client.notify(NoticeLevel::Success, "Prescription uploaded successfully!");
    Ok(prescription)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::Route;
    use crate::testing::{Harness, prescription_json};
    use crate::transport::{FilePart, RequestBody};
    use reqwest::StatusCode;
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
    use serde_json::json;
    use shared::models::PrescriptionStatus;

    fn upload(file_name: &str, size: usize) -> PrescriptionUpload {
        PrescriptionUpload {
            doctor_name: "Dr. Mehta".into(),
            hospital_name: "City Hospital".into(),
            prescription_date: "2025-01-05".into(),
            file: Some(FilePart {
                field: String::new(),
                file_name: file_name.into(),
                mime: "image/png".into(),
                bytes: vec![7; size],
            }),
        }
    }

    #[tokio::test]
    async fn test_upload_is_multipart_with_bearer_only() {
        let harness = Harness::signed_in();
        harness.transport.respond(StatusCode::OK, prescription_json(4, "pending"));

        let prescription = upload_prescription(&harness.client, &upload("rx.png", 32))
            .await
            .unwrap();

        assert_eq!(prescription.status, PrescriptionStatus::Pending);
        let sent = harness.transport.last_request();
        assert_eq!(sent.url, "http://pharmacy.test/prescriptions/upload");
        assert_eq!(sent.headers[AUTHORIZATION], "Bearer tok-123");
        assert!(sent.headers.get(CONTENT_TYPE).is_none());
        let RequestBody::Multipart(form) = sent.body else {
            panic!("upload must be multipart");
        };
        assert_eq!(
            form.fields,
            vec![
                ("doctor_name".to_string(), "Dr. Mehta".to_string()),
                ("hospital_name".to_string(), "City Hospital".to_string()),
                ("prescription_date".to_string(), "2025-01-05".to_string()),
            ]
        );
        assert_eq!(form.files[0].field, "file");
        assert_eq!(form.files[0].bytes.len(), 32);
        assert_eq!(harness.shell.messages(), vec!["Prescription uploaded successfully!"]);
    }

    #[tokio::test]
    async fn test_upload_rejects_bad_file_locally() {
        let harness = Harness::signed_in();

        assert!(upload_prescription(&harness.client, &upload("rx.gif", 32)).await.is_err());

        assert_eq!(harness.transport.calls(), 0);
        assert_eq!(
            harness.shell.messages(),
            vec!["Prescription must be a JPG, PNG or PDF file"]
        );
    }

    #[tokio::test]
    async fn test_upload_failure_fallback() {
        let harness = Harness::signed_in();
        harness.transport.respond_text(StatusCode::INTERNAL_SERVER_ERROR, "");

        assert!(upload_prescription(&harness.client, &upload("rx.pdf", 8)).await.is_err());
        assert_eq!(harness.shell.messages(), vec!["Upload failed"]);
    }

    #[tokio::test]
    async fn test_upload_with_expired_session_logs_out() {
        let harness = Harness::signed_in();
        harness.transport.respond(StatusCode::UNAUTHORIZED, json!({}));

        let result = upload_prescription(&harness.client, &upload("rx.pdf", 8)).await;

        assert_eq!(result, Err(ClientError::Handled));
        assert!(!harness.session().is_authenticated());
        assert_eq!(harness.shell.redirects(), vec![Route::Home]);
    }

    #[tokio::test]
    async fn test_list_prescriptions() {
        let harness = Harness::signed_in();
        harness.transport.respond(
            StatusCode::OK,
            json!([prescription_json(1, "verified"), prescription_json(2, "rejected")]),
        );

        let prescriptions = list_prescriptions(&harness.client).await.unwrap();

        assert_eq!(prescriptions.len(), 2);
        assert!(prescriptions[0].is_selectable());
        assert!(!prescriptions[1].is_selectable());
    }

    #[tokio::test]
    async fn test_picker_options_quiet_on_error() {
        let harness = Harness::signed_in();
        harness
            .transport
            .respond(StatusCode::INTERNAL_SERVER_ERROR, json!({"detail": "boom"}));

        assert!(picker_options(&harness.client).await.is_empty());
        assert!(harness.shell.messages().is_empty());
        assert!(harness.session().is_authenticated());
    }

    #[tokio::test]
    async fn test_picker_options_loads_list() {
        let harness = Harness::signed_in();
        harness
            .transport
            .respond(StatusCode::OK, json!([prescription_json(1, "verified")]));

        let options = picker_options(&harness.client).await;

        assert_eq!(options.len(), 1);
        assert_eq!(
            harness.transport.last_request().url,
            "http://pharmacy.test/prescriptions/"
        );
    }
}
