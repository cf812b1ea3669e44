//! Tests for the request gateway
//!
//! Validates header injection, the right-biased header merge, and the
//! centralized handling of network failures and rejected sessions.

#[cfg(test)]
mod tests {
    use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
    use reqwest::{Method, StatusCode};
    use serde_json::json;

    use crate::api::{AuthMode, RequestOptions, merge_headers};
    use crate::routes::Route;
    use crate::session::Session;
    use crate::shell::NoticeLevel;
    use crate::storage::TokenStorage;
    use crate::testing::Harness;
    use crate::transport::{MultipartForm, RequestBody};

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        pairs
            .iter()
            .map(|(name, value)| (HeaderName::from_static(name), HeaderValue::from_static(value)))
            .collect()
    }

    /// Tests the right-biased merge from the gateway contract
    #[test]
    fn test_merge_headers_caller_wins() {
        let merged = merge_headers(
            headers(&[("a", "1"), ("b", "2")]),
            &headers(&[("b", "3"), ("c", "4")]),
        );
        assert_eq!(merged, headers(&[("a", "1"), ("b", "3"), ("c", "4")]));
    }

    /// Tests that an empty override leaves the defaults alone
    #[test]
    fn test_merge_headers_empty_override() {
        let defaults = headers(&[("a", "1")]);
        assert_eq!(merge_headers(defaults.clone(), &HeaderMap::new()), defaults);
    }

    /// Tests URL joining against the configured base
    #[test]
    fn test_api_url() {
        let harness = Harness::new();
        assert_eq!(
            harness.client.api_url("/cart/"),
            "http://pharmacy.test/cart/"
        );
        assert_eq!(
            harness.client.api_url("orders/7/track"),
            "http://pharmacy.test/orders/7/track"
        );
    }

    /// Tests that no authorization header is sent without a token
    #[tokio::test]
    async fn test_no_token_no_authorization_header() {
        let harness = Harness::new();
        harness.transport.respond(StatusCode::OK, json!([]));

        let response = harness.client.request("/categories/", RequestOptions::get()).await;

        assert!(response.is_some());
        let sent = harness.transport.last_request();
        assert!(sent.headers.get(AUTHORIZATION).is_none());
        assert_eq!(sent.headers[CONTENT_TYPE], "application/json");
        assert_eq!(sent.method, Method::GET);
        assert_eq!(sent.url, "http://pharmacy.test/categories/");
    }

    /// Tests that a held token is always attached as a bearer credential
    #[tokio::test]
    async fn test_token_adds_bearer_header() {
        let harness = Harness::signed_in();
        harness.transport.respond(StatusCode::OK, json!({"items": []}));

        harness.client.request("/cart/", RequestOptions::get()).await;

        let sent = harness.transport.last_request();
        assert_eq!(sent.headers[AUTHORIZATION], "Bearer tok-123");
    }

    /// Tests that credential exchanges never carry the bearer token
    #[tokio::test]
    async fn test_credentials_mode_skips_bearer() {
        let harness = Harness::signed_in();
        harness.transport.respond(StatusCode::OK, json!({}));

        harness
            .client
            .request("/auth/login", RequestOptions::post().credentials())
            .await;

        assert!(harness.transport.last_request().headers.get(AUTHORIZATION).is_none());
    }

    /// Tests that caller headers override the defaults
    #[tokio::test]
    async fn test_caller_headers_override_defaults() {
        let harness = Harness::signed_in();
        harness.transport.respond(StatusCode::OK, json!({}));

        let options = RequestOptions::get()
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .header(HeaderName::from_static("x-trace"), HeaderValue::from_static("1"));
        harness.client.request("/orders/", options).await;

        let sent = harness.transport.last_request();
        assert_eq!(sent.headers[CONTENT_TYPE], "text/plain");
        assert_eq!(sent.headers["x-trace"], "1");
        assert_eq!(sent.headers[AUTHORIZATION], "Bearer tok-123");
    }

    /// Tests that form and multipart bodies keep their own content type
    #[test]
    fn test_default_headers_by_body() {
        let harness = Harness::signed_in();
        let form = harness
            .client
            .default_headers(&RequestBody::Form(vec![]), AuthMode::Session);
        assert!(form.get(CONTENT_TYPE).is_none());
        assert!(form.get(AUTHORIZATION).is_some());

        let multipart = harness.client.default_headers(
            &RequestBody::Multipart(MultipartForm::default()),
            AuthMode::Session,
        );
        assert!(multipart.get(CONTENT_TYPE).is_none());
        assert_eq!(multipart[AUTHORIZATION], "Bearer tok-123");
    }

    /// Tests that a JSON body is serialized into the request
    #[tokio::test]
    async fn test_json_body() {
        let harness = Harness::signed_in();
        harness.transport.respond(StatusCode::OK, json!({}));

        let options = RequestOptions::put().json(&json!({"quantity": 2})).unwrap();
        harness.client.request("/cart/items/5", options).await;

        let sent = harness.transport.last_request();
        assert_eq!(sent.method, Method::PUT);
        assert_eq!(sent.body, RequestBody::Json(r#"{"quantity":2}"#.into()));
    }

    /// Tests that a 401 ends the session and yields no response
    #[tokio::test]
    async fn test_unauthorized_clears_session() {
        let harness = Harness::signed_in();
        harness
            .transport
            .respond(StatusCode::UNAUTHORIZED, json!({"detail": "Could not validate credentials"}));

        let response = harness.client.request("/orders/", RequestOptions::get()).await;

        assert!(response.is_none());
        assert_eq!(harness.session().snapshot(), Session::default());
        assert_eq!(harness.storage.load(), None);
        assert_eq!(harness.shell.redirects(), vec![Route::Home]);
        assert_eq!(harness.transport.calls(), 1);
    }

    /// Tests that a 401 during a credential exchange goes back to the caller
    #[tokio::test]
    async fn test_unauthorized_credentials_returned() {
        let harness = Harness::new();
        harness
            .transport
            .respond(StatusCode::UNAUTHORIZED, json!({"detail": "Incorrect username or password"}));

        let response = harness
            .client
            .request("/auth/login", RequestOptions::post().credentials())
            .await
            .expect("response returned to caller");

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert!(harness.shell.redirects().is_empty());
    }

    /// Tests that a network failure shows one notice and returns nothing
    #[tokio::test]
    async fn test_network_failure_notice() {
        let harness = Harness::signed_in();
        harness.transport.fail();

        let response = harness.client.request("/cart/", RequestOptions::get()).await;

        assert!(response.is_none());
        assert_eq!(
            harness.shell.last_notice(),
            Some((NoticeLevel::Error, "Network error".to_string()))
        );
        assert!(harness.session().is_authenticated());
        assert_eq!(harness.transport.calls(), 1);
    }

    /// Tests that non-2xx responses other than 401 pass through untouched
    #[tokio::test]
    async fn test_application_errors_pass_through() {
        let harness = Harness::signed_in();
        harness
            .transport
            .respond(StatusCode::BAD_REQUEST, json!({"detail": "Cart is empty"}));

        let response = harness
            .client
            .request("/orders/", RequestOptions::post())
            .await
            .expect("response");

        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.error_message("Order failed"), "Cart is empty");
        assert!(harness.shell.notices.borrow().is_empty());
        assert!(harness.session().is_authenticated());
    }

    /// Tests that query pairs are forwarded to the transport
    #[tokio::test]
    async fn test_query_pairs() {
        let harness = Harness::new();
        harness.transport.respond(StatusCode::OK, json!([]));

        let options = RequestOptions::get().query([("q", "para"), ("category", "2")]);
        harness.client.request("/medicines/search", options).await;

        assert_eq!(
            harness.transport.last_request().query,
            vec![
                ("q".to_string(), "para".to_string()),
                ("category".to_string(), "2".to_string())
            ]
        );
    }

    /// Tests the terminal handler directly
    #[test]
    fn test_end_session() {
        let harness = Harness::signed_in();
        harness.client.end_session();
        harness.client.end_session();

        assert_eq!(harness.session().snapshot(), Session::default());
        assert_eq!(harness.shell.redirects(), vec![Route::Home, Route::Home]);
    }
}
