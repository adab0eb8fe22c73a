//! Customer service configuration.

use std::fmt;

use common::env_flag;

/// Environment variable selecting the in-memory mock store
pub const USE_MOCK_DB_ENV: &str = "USE_MOCK_DB";

/// Storage backend behind the customer repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryBackend {
    /// In-memory store seeded with sample customers
    Mock,
    /// Relational database (not implemented)
    Database,
}

impl RepositoryBackend {
    /// Map the `USE_MOCK_DB` flag to a backend.
    pub fn from_use_mock(use_mock: bool) -> Self {
        if use_mock {
            RepositoryBackend::Mock
        } else {
            RepositoryBackend::Database
        }
    }
}

impl fmt::Display for RepositoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RepositoryBackend::Mock => write!(f, "mock"),
            RepositoryBackend::Database => write!(f, "database"),
        }
    }
}

/// Customer service configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerServiceConfig {
    /// Backend the repository factory constructs
    pub backend: RepositoryBackend,
}

impl CustomerServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            backend: RepositoryBackend::from_use_mock(env_flag(USE_MOCK_DB_ENV, true)),
        }
    }
}

impl Default for CustomerServiceConfig {
    fn default() -> Self {
        Self {
            backend: RepositoryBackend::Mock,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_from_flag() {
        assert_eq!(RepositoryBackend::from_use_mock(true), RepositoryBackend::Mock);
        assert_eq!(
            RepositoryBackend::from_use_mock(false),
            RepositoryBackend::Database
        );
    }

    // The only test in this crate that touches USE_MOCK_DB
    #[test]
    fn test_from_env_reads_use_mock_db() {
        std::env::set_var(USE_MOCK_DB_ENV, "false");
        assert_eq!(
            CustomerServiceConfig::from_env().backend,
            RepositoryBackend::Database
        );

        std::env::set_var(USE_MOCK_DB_ENV, "True");
        assert_eq!(CustomerServiceConfig::from_env().backend, RepositoryBackend::Mock);

        std::env::remove_var(USE_MOCK_DB_ENV);
        assert_eq!(CustomerServiceConfig::from_env().backend, RepositoryBackend::Mock);
    }

    #[test]
    fn test_default_is_mock() {
        assert_eq!(CustomerServiceConfig::default().backend, RepositoryBackend::Mock);
    }
}
