//! Shared configuration structures.

use std::env;

use serde::{Deserialize, Serialize};

/// Base service configuration shared by all services.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Service name for logging and tracing
    pub service_name: String,
    /// Host address to bind
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            service_name: "service".to_string(),
            host: "0.0.0.0".to_string(),
            port: 8000,
            log_level: "info".to_string(),
        }
    }
}

impl ServiceConfig {
    /// Full bind address (`host:port`).
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Read a boolean flag from the environment.
///
/// Only the exact value `true` (any case, no surrounding whitespace) enables
/// the flag; an unset variable falls back to `default`.
pub fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => parse_flag(&value),
        Err(_) => default,
    }
}

/// Parse a flag value the same way as [`env_flag`].
pub fn parse_flag(value: &str) -> bool {
    value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("true"));
        assert!(parse_flag("TRUE"));
        assert!(!parse_flag(" true "));
        assert!(!parse_flag("false"));
        assert!(!parse_flag("1"));
        assert!(!parse_flag(""));
    }

    #[test]
    fn test_env_flag_default_when_unset() {
        assert!(env_flag("COMMON_TEST_FLAG_THAT_IS_NEVER_SET", true));
        assert!(!env_flag("COMMON_TEST_FLAG_THAT_IS_NEVER_SET", false));
    }

    #[test]
    fn test_bind_addr() {
        let config = ServiceConfig {
            host: "127.0.0.1".to_string(),
            port: 9000,
            ..ServiceConfig::default()
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }
}
