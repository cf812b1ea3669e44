//! Frontend configuration module
//!
//! Values are fixed at build time through environment variables read with
//! `option_env!`; the bundle has no runtime configuration source.

pub const DEFAULT_TOKEN_KEY: &str = "authToken";
pub const DEFAULT_NOTICE_TIMEOUT_MS: u32 = 5_000;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Frontend configuration for the backend location and client behaviour
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Base URL prefixed to every endpoint; empty means same origin
    pub api_base: String,
    /// Local storage key holding the bearer token
    pub token_key: String,
    /// How long a notice stays on screen
    pub notice_timeout_ms: u32,
    /// `tracing` filter directive
    pub log_level: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("PHARMACY_API_BASE"),
            option_env!("PHARMACY_TOKEN_KEY"),
            option_env!("PHARMACY_NOTICE_TIMEOUT_MS"),
            option_env!("PHARMACY_LOG_LEVEL"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    fn from_values(
        api_base: Option<&str>,
        token_key: Option<&str>,
        notice_timeout_ms: Option<&str>,
        log_level: Option<&str>,
    ) -> Self {
        Self {
            api_base: api_base.unwrap_or_default().trim_end_matches('/').to_string(),
            token_key: token_key
                .filter(|key| !key.is_empty())
                .unwrap_or(DEFAULT_TOKEN_KEY)
                .to_string(),
            notice_timeout_ms: notice_timeout_ms
                .and_then(|value| value.parse().ok())
                .unwrap_or(DEFAULT_NOTICE_TIMEOUT_MS),
            log_level: log_level
                .filter(|level| !level.is_empty())
                .unwrap_or(DEFAULT_LOG_LEVEL)
                .to_string(),
        }
    }

    /// The API base as an absolute URL when the page origin is known.
    ///
    /// reqwest only accepts absolute URLs, so a relative base is anchored to
    /// `window.location.origin` in the browser.
    pub fn resolved_api_base(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        let origin = web_sys::window().and_then(|window| window.location().origin().ok());
        #[cfg(not(target_arch = "wasm32"))]
        let origin: Option<String> = None;

        anchor_base(origin.as_deref(), &self.api_base)
    }
}

fn anchor_base(origin: Option<&str>, base: &str) -> String {
    if base.starts_with("http://") || base.starts_with("https://") {
        return base.to_string();
    }
    match origin {
        Some(origin) => {
            let origin = origin.trim_end_matches('/');
            if base.is_empty() {
                origin.to_string()
            } else {
                format!("{origin}/{}", base.trim_start_matches('/'))
            }
        }
        None => base.to_string(),
    }
}
