//! Request gateway for the pharmacy backend.
//!
//! Every backend call goes through [`PharmacyClient::request`]. The gateway
//! injects the JSON content type and the bearer token, sends exactly one
//! request, and reacts to the two failures no caller should handle itself: a
//! network failure (notice) and a rejected session (forced logout).

use std::fmt;
use std::rc::Rc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::{debug, error, info, warn};

use crate::error::{ClientError, GatewayFailure};
use crate::routes::Route;
use crate::session::SessionStore;
use crate::shell::{NoticeLevel, Shell};
use crate::transport::{ApiResponse, HttpRequest, MultipartForm, RequestBody, Transport};

const JSON_CONTENT_TYPE: &str = "application/json";
const NETWORK_ERROR: &str = "Network error";

/// Whether a request carries the session or is itself a credential exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// Bearer token attached when held; a 401 ends the session.
    #[default]
    Session,
    /// Login and registration: no bearer, and a 401 goes back to the caller
    /// because it means bad credentials rather than an expired session.
    Credentials,
}

/// Per-call options; everything not set falls back to the defaults.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub method: Method,
    pub headers: HeaderMap,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub auth: AuthMode,
}

impl RequestOptions {
    pub fn get() -> Self {
        Self::default()
    }

    pub fn post() -> Self {
        Self::with_method(Method::POST)
    }

    pub fn put() -> Self {
        Self::with_method(Method::PUT)
    }

    pub fn delete() -> Self {
        Self::with_method(Method::DELETE)
    }

    pub fn with_method(method: Method) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    #[must_use]
    pub fn query<K, V, I>(mut self, pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Serialize `payload` as the JSON body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Encode`] if `payload` cannot be serialized.
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> Result<Self, ClientError> {
        let text = serde_json::to_string(payload).map_err(|e| ClientError::Encode(e.to_string()))?;
        self.body = RequestBody::Json(text);
        Ok(self)
    }

    #[must_use]
    pub fn form(mut self, pairs: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(pairs);
        self
    }

    #[must_use]
    pub fn multipart(mut self, form: MultipartForm) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    #[must_use]
    pub fn credentials(mut self) -> Self {
        self.auth = AuthMode::Credentials;
        self
    }
}

/// Overlay `overrides` on `defaults`, one header name at a time.
///
/// A name present in `overrides` replaces every default value for that name;
/// names only in `defaults` survive untouched.
pub fn merge_headers(mut defaults: HeaderMap, overrides: &HeaderMap) -> HeaderMap {
    for name in overrides.keys() {
        defaults.remove(name);
        for value in overrides.get_all(name) {
            defaults.append(name.clone(), value.clone());
        }
    }
    defaults
}

/// Client for the pharmacy backend, shared by every page.
#[derive(Clone)]
pub struct PharmacyClient {
    base_url: String,
    transport: Rc<dyn Transport>,
    session: SessionStore,
    shell: Rc<dyn Shell>,
}

impl fmt::Debug for PharmacyClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PharmacyClient")
            .field("base_url", &self.base_url)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl PartialEq for PharmacyClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url
            && self.session == other.session
            && Rc::ptr_eq(&self.transport, &other.transport)
    }
}

impl PharmacyClient {
    pub fn new(
        base_url: &str,
        transport: Rc<dyn Transport>,
        session: SessionStore,
        shell: Rc<dyn Shell>,
    ) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
            session,
            shell,
        }
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn api_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    pub fn notify(&self, level: NoticeLevel, message: &str) {
        self.shell.notify(level, message);
    }

    pub fn redirect(&self, route: Route) {
        self.shell.redirect(route);
    }

    pub fn cart_changed(&self, items: u32) {
        self.shell.cart_changed(items);
    }

    /// Show `error` to the user unless the gateway already did, and hand it back.
    pub fn surface(&self, error: ClientError) -> ClientError {
        if let Some(level) = error.notice_level() {
            self.shell.notify(level, &error.to_string());
        }
        error
    }

    /// Headers every request starts from before caller overrides.
    pub fn default_headers(&self, body: &RequestBody, auth: AuthMode) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if body.takes_json_content_type() {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        }
        if auth == AuthMode::Session {
            let bearer = self
                .session
                .token()
                .filter(|token| !token.is_empty())
                .and_then(|token| HeaderValue::from_str(&format!("Bearer {token}")).ok());
            if let Some(mut value) = bearer {
                value.set_sensitive(true);
                headers.insert(AUTHORIZATION, value);
            }
        }
        headers
    }

    /// Send one request to `endpoint`.
    ///
    /// Returns `None` when the request failed at the network level or the
    /// session was rejected; both cases have already been handled and the
    /// caller must not react further. Any other response is returned as-is.
    pub async fn request(&self, endpoint: &str, options: RequestOptions) -> Option<ApiResponse> {
        match self.dispatch(endpoint, options).await {
            Ok(response) => Some(response),
            Err(GatewayFailure::Network(err)) => {
                error!(endpoint, error = %err, "request failed");
                self.notify(NoticeLevel::Error, NETWORK_ERROR);
                None
            }
            Err(GatewayFailure::AuthRejected) => {
                warn!(endpoint, "session rejected by server");
                self.end_session();
                None
            }
        }
    }

    async fn dispatch(
        &self,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<ApiResponse, GatewayFailure> {
        let RequestOptions {
            method,
            headers,
            query,
            body,
            auth,
        } = options;
        let headers = merge_headers(self.default_headers(&body, auth), &headers);
        let request = HttpRequest {
            method: method.clone(),
            url: self.api_url(endpoint),
            query,
            headers,
            body,
        };

        debug!(%method, endpoint, "sending request");
        let response = self.transport.send(request).await?;
        debug!(%method, endpoint, status = response.status.as_u16(), "received response");

        if auth == AuthMode::Session && response.status == StatusCode::UNAUTHORIZED {
            return Err(GatewayFailure::AuthRejected);
        }
        Ok(response)
    }

    /// Terminal handler for an invalid session: clear it and go home.
    ///
    /// Logout, a rejected token and a failed startup validation all end here.
    pub fn end_session(&self) {
        info!("ending session");
        self.session.clear();
        self.redirect(Route::Home);
    }
}
