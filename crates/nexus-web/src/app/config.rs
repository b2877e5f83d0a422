//! Client configuration.
//!
//! The API base URL is baked in at build time from `NEXUS_API_BASE_URL` and can
//! be overridden per browser through local storage, which lets a single bundle
//! talk to a staging backend without a rebuild.

use crate::app::storage::StorageBackend;

/// Used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";

/// Local storage key holding an API base URL override.
pub const API_BASE_URL_KEY: &str = "nexus_api_base_url";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebConfig {
    /// Base URL of the REST API, without a trailing slash.
    pub api_base_url: String,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self::new(option_env!("NEXUS_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }
}

impl WebConfig {
    pub fn new(api_base_url: &str) -> Self {
        let trimmed = api_base_url.trim().trim_end_matches('/');
        let api_base_url = if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed };
        Self {
            api_base_url: api_base_url.to_string(),
        }
    }

    /// Build-time defaults with any stored override applied.
    pub fn load(storage: &impl StorageBackend) -> Self {
        match storage.get(API_BASE_URL_KEY) {
            Some(url) if !url.trim().is_empty() => {
                tracing::info!(url = %url, "using stored API base URL override");
                Self::new(&url)
            }
            _ => Self::default(),
        }
    }

    /// Absolute URL of an API path such as `/events` or `events/42`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base_url, path.trim_start_matches('/'))
    }

    pub fn certificate_url(&self, event_id: &str) -> String {
        self.endpoint(&format!("/certificates/download/{event_id}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::storage::MemoryStorage;

    #[test]
    fn endpoint_joins_with_single_slash() {
        let config = WebConfig::new("https://api.example.com/api/");
        assert_eq!(config.endpoint("/events"), "https://api.example.com/api/events");
        assert_eq!(config.endpoint("events/1"), "https://api.example.com/api/events/1");
        assert_eq!(
            config.certificate_url("e1"),
            "https://api.example.com/api/certificates/download/e1"
        );
    }

    #[test]
    fn blank_base_falls_back_to_default() {
        assert_eq!(WebConfig::new("  ").api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn stored_override_wins() {
        let storage = MemoryStorage::new();
        storage.set(API_BASE_URL_KEY, "http://staging:8080/api///").unwrap();
        assert_eq!(WebConfig::load(&storage).api_base_url, "http://staging:8080/api");
    }

    #[test]
    fn blank_override_is_ignored() {
        let storage = MemoryStorage::new();
        storage.set(API_BASE_URL_KEY, "   ").unwrap();
        assert_eq!(WebConfig::load(&storage), WebConfig::default());
    }
}
