//! Build-time API endpoint selection.
//!
//! SYSTEM CONTEXT
//! ==============
//! The blog REST API lives on a separate origin. Which origin is baked into
//! the bundle when it is compiled; nothing here reads runtime environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Base URL of the locally running API.
pub const LOCAL_API_BASE_URL: &str = "http://localhost:3000/api";

/// Hosted API base URL, if one was supplied when the bundle was compiled.
const HOSTED_API_BASE_URL: Option<&str> = option_env!("INKPOST_API_BASE_URL");

/// Deployment environment the bundle was compiled for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiEnvironment {
    Local,
    Hosted(&'static str),
}

impl ApiEnvironment {
    /// The environment selected at compile time.
    #[must_use]
    pub fn current() -> Self {
        Self::from_override(HOSTED_API_BASE_URL)
    }

    fn from_override(value: Option<&'static str>) -> Self {
        match value.map(str::trim) {
            Some(url) if !url.is_empty() => Self::Hosted(url),
            _ => Self::Local,
        }
    }

    /// Base URL requests are resolved against, without a trailing slash.
    #[must_use]
    pub fn base_url(self) -> &'static str {
        match self {
            Self::Local => LOCAL_API_BASE_URL,
            Self::Hosted(url) => url.trim_end_matches('/'),
        }
    }
}

/// Base URL of the API for this build.
#[must_use]
pub fn api_base_url() -> &'static str {
    ApiEnvironment::current().base_url()
}
