//! The HTTP leg underneath the request gateway.

use async_trait::async_trait;
use reqwest::header::HeaderMap;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use shared::models::ErrorResponse;
use thiserror::Error;

use crate::error::ClientError;

/// A failure before any HTTP status was received.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    #[error("failed to build request: {0}")]
    Build(String),
    #[error("request failed: {0}")]
    Send(String),
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// One file attached to a multipart body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart {
    pub field: String,
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MultipartForm {
    pub fields: Vec<(String, String)>,
    pub files: Vec<FilePart>,
}

impl MultipartForm {
    #[must_use]
    pub fn text(mut self, name: &str, value: impl Into<String>) -> Self {
        self.fields.push((name.to_string(), value.into()));
        self
    }

    #[must_use]
    pub fn file(mut self, part: FilePart) -> Self {
        self.files.push(part);
        self
    }

    fn into_reqwest(self) -> Result<Form, TransportError> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }
        for file in self.files {
            let part = Part::bytes(file.bytes)
                .file_name(file.file_name)
                .mime_str(&file.mime)
                .map_err(|e| TransportError::Build(e.to_string()))?;
            form = form.part(file.field, part);
        }
        Ok(form)
    }
}

/// Request payloads the backend accepts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Pre-serialized JSON text.
    Json(String),
    /// `application/x-www-form-urlencoded` pairs.
    Form(Vec<(String, String)>),
    Multipart(MultipartForm),
}

impl RequestBody {
    /// Whether the gateway should default the content type to JSON.
    ///
    /// Form and multipart bodies carry their own content type (multipart
    /// needs the boundary the transport generates).
    #[must_use]
    pub fn takes_json_content_type(&self) -> bool {
        matches!(self, Self::Empty | Self::Json(_))
    }
}

/// A fully resolved outbound request.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: HeaderMap,
    pub body: RequestBody,
}

/// Status and body text of a completed round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: StatusCode,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// Decode the body into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Decode`] when the body does not match `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ClientError> {
        serde_json::from_str(&self.body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// The server's `detail` message, or `fallback` when there is none.
    #[must_use]
    pub fn error_message(&self, fallback: &str) -> String {
        ErrorResponse::message_or(&self.body, fallback)
    }

    /// Convert a non-2xx response into an application error.
    #[must_use]
    pub fn into_error(self, fallback: &str) -> ClientError {
        ClientError::Application {
            status: self.status.as_u16(),
            message: self.error_message(fallback),
        }
    }
}

/// Sends one request and reports what came back.
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, TransportError>;
}

/// Browser `fetch` (or native hyper) through reqwest.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<ApiResponse, TransportError> {
        let mut builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers);
        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        builder = match request.body {
            RequestBody::Empty => builder,
            RequestBody::Json(text) => builder.body(text),
            RequestBody::Form(pairs) => builder.form(&pairs),
            RequestBody::Multipart(form) => builder.multipart(form.into_reqwest()?),
        };

        let response = builder
            .send()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Body(e.to_string()))?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Probe {
        id: i64,
    }

    #[test]
    fn test_json_content_type_only_for_json_bodies() {
        assert!(RequestBody::Empty.takes_json_content_type());
        assert!(RequestBody::Json("{}".into()).takes_json_content_type());
        assert!(!RequestBody::Form(vec![]).takes_json_content_type());
        assert!(!RequestBody::Multipart(MultipartForm::default()).takes_json_content_type());
    }

    #[test]
    fn test_response_decoding() {
        let response = ApiResponse::new(StatusCode::OK, r#"{"id": 7}"#);
        assert!(response.is_success());
        assert_eq!(response.json::<Probe>().unwrap(), Probe { id: 7 });

        let broken = ApiResponse::new(StatusCode::OK, "<html>");
        assert!(matches!(broken.json::<Probe>(), Err(ClientError::Decode(_))));
    }

    #[test]
    fn test_into_error_prefers_server_detail() {
        let response = ApiResponse::new(
            StatusCode::BAD_REQUEST,
            r#"{"detail": "Insufficient stock"}"#,
        );
        assert_eq!(
            response.into_error("Failed to add to cart"),
            ClientError::Application {
                status: 400,
                message: "Insufficient stock".into()
            }
        );

        let response = ApiResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "oops");
        assert_eq!(
            response.into_error("Order failed"),
            ClientError::Application {
                status: 500,
                message: "Order failed".into()
            }
        );
    }

    #[test]
    fn test_multipart_builder() {
        let form = MultipartForm::default()
            .text("doctor_name", "Dr. Rao")
            .file(FilePart {
                field: "file".into(),
                file_name: "rx.pdf".into(),
                mime: "application/pdf".into(),
                bytes: vec![1, 2, 3],
            });
        assert_eq!(form.fields, vec![("doctor_name".to_string(), "Dr. Rao".to_string())]);
        assert_eq!(form.files.len(), 1);
        assert!(form.into_reqwest().is_ok());
    }
}
