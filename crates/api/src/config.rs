//! API server configuration.

use std::env;

use common::ServiceConfig;
use customer_service_lib::CustomerServiceConfig;

/// Default bind port of the HTTP API
pub const DEFAULT_API_PORT: u16 = 8000;

/// API server configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Bind address, service name and log level
    pub service: ServiceConfig,
    /// Repository backend selection
    pub customers: CustomerServiceConfig,
}

impl ApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();

        Self {
            service: ServiceConfig {
                service_name: "customer-api".to_string(),
                host: env::var("API_HOST").unwrap_or(defaults.host),
                port: env::var("API_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_API_PORT),
                log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            },
            customers: CustomerServiceConfig::from_env(),
        }
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "customer-api".to_string(),
                port: DEFAULT_API_PORT,
                ..ServiceConfig::default()
            },
            customers: CustomerServiceConfig::default(),
        }
    }
}
