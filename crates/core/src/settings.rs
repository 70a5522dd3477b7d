use serde::{Deserialize, Serialize};

/// Provider configuration handed down by the host. This crate reads it,
/// it never loads it from files or the environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProviderSettings {
    pub enabled: bool,
    /// Providers are consulted in ascending priority order.
    pub priority: i32,
    /// Minimum delay between requests, enforced by the host scheduler.
    pub request_interval_ms: u64,
    /// Base URL a VN id is appended to for `provider_data_url`.
    pub vn_url_base: String,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            priority: 20,
            request_interval_ms: 1000,
            vn_url_base: "https://vndb.org/".to_string(),
        }
    }
}
