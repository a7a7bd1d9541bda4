//! API key handling for the Gemini API.
//!
//! Gemini authenticates with a `key` query parameter rather than a header, so the
//! key ends up inside request URLs. This module keeps it out of logs and error
//! messages.

use std::fmt;

/// # Gemini API Key
///
/// Wraps the secret so that `Debug` output and log lines only ever show a short
/// preview. Use [`ApiKey::expose`] when building the request URL.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn expose(&self) -> &str {
        &self.0
    }

    /// First four characters followed by `...`, safe to log.
    pub fn preview(&self) -> String {
        let head: String = self.0.chars().take(4).collect();
        format!("{}...", head)
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ApiKey").field(&self.preview()).finish()
    }
}
