//! API endpoint configuration.

use std::env;

/// Default general API endpoint (local placeholder).
pub const DEFAULT_API_URL: &str = "http://localhost:3001/api";

/// Default payments API endpoint (local placeholder).
pub const DEFAULT_PAYMENTS_API_URL: &str = "http://localhost:3002/api";

/// Path prefix the payments backend mounts its routes under.
pub const PAYMENTS_PREFIX: &str = "/payment/v1";

/// Base URLs for the two backends, each independently overridable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// General API (companies, members, invitations).
    pub api_url: String,
    /// Payments API (account, expenses, income).
    pub payments_api_url: String,
}

impl ApiConfig {
    /// Read configuration from `ATRIUM_API_URL` / `ATRIUM_PAYMENTS_API_URL`,
    /// falling back to the local placeholder endpoints.
    pub fn from_env() -> Self {
        Self {
            api_url: env::var("ATRIUM_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            payments_api_url: env::var("ATRIUM_PAYMENTS_API_URL")
                .unwrap_or_else(|_| DEFAULT_PAYMENTS_API_URL.to_string()),
        }
    }

    /// Fully-qualified payments base (endpoint plus mount prefix).
    pub fn payments_base(&self) -> String {
        format!("{}{}", self.payments_api_url, PAYMENTS_PREFIX)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            payments_api_url: DEFAULT_PAYMENTS_API_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payments_base_includes_mount_prefix() {
        let config = ApiConfig {
            api_url: "http://api.test".to_string(),
            payments_api_url: "http://pay.test".to_string(),
        };
        assert_eq!(config.payments_base(), "http://pay.test/payment/v1");
    }

    #[test]
    fn defaults_point_at_local_placeholders() {
        let config = ApiConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.payments_api_url, DEFAULT_PAYMENTS_API_URL);
    }
}
