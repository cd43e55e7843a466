//! Startup configuration for the assistant frontend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SSR host renders the backend base URL into a `<meta>` tag. The
//! hydrating client reads it back into a [`ClientConfig`] and hands that value
//! to `App`, which provides it to components via context. Nothing reads the
//! URL from ambient global state.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend used when no URL is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// `name` attribute of the `<meta>` tag carrying the backend URL from SSR
/// to hydration.
pub const BACKEND_URL_META: &str = "shopwise-backend-url";

/// Resolved client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    backend_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(None)
    }
}

impl ClientConfig {
    /// Build a config from an optional raw backend URL. Blank or missing
    /// values fall back to [`DEFAULT_BACKEND_URL`].
    pub fn new(backend_url: Option<&str>) -> Self {
        Self { backend_url: normalize_backend_url(backend_url) }
    }

    /// Backend base URL without a trailing slash.
    pub fn backend_url(&self) -> &str {
        &self.backend_url
    }

    /// Absolute URL for a backend path such as `/api/assist`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.backend_url, path.trim_start_matches('/'))
    }

    /// Read the config rendered into the document head by the SSR shell.
    #[cfg(feature = "hydrate")]
    pub fn from_document() -> Self {
        let selector = format!("meta[name=\"{BACKEND_URL_META}\"]");
        let content = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| match doc.query_selector(&selector) {
                Ok(Some(el)) => el.get_attribute("content"),
                _ => None,
            });
        Self::new(content.as_deref())
    }
}

fn normalize_backend_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_BACKEND_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
