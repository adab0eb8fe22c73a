//! Repository construction and the shared per-process instance.
//!
//! [`RepositoryFactory`] decides which backend to build from configuration.
//! [`RepositoryProvider`] builds it lazily, at most once, and hands out the
//! same instance until [`RepositoryProvider::reset`] is called.

use std::sync::{Arc, PoisonError, RwLock};

use common::{AppError, AppResult};

use crate::config::{CustomerServiceConfig, RepositoryBackend};
use crate::repository::{CustomerRepository, InMemoryCustomerRepository};

/// Builds customer repositories for the configured backend.
#[derive(Debug, Clone, Copy)]
pub struct RepositoryFactory {
    backend: RepositoryBackend,
}

impl RepositoryFactory {
    pub fn new(backend: RepositoryBackend) -> Self {
        Self { backend }
    }

    pub fn from_config(config: &CustomerServiceConfig) -> Self {
        Self::new(config.backend)
    }

    pub fn backend(&self) -> RepositoryBackend {
        self.backend
    }

    /// Construct a fresh repository.
    ///
    /// The database backend has no implementation yet and always fails with
    /// [`AppError::NotImplemented`].
    pub fn create_customer_repository(&self) -> AppResult<Arc<dyn CustomerRepository>> {
        match self.backend {
            RepositoryBackend::Mock => {
                tracing::info!("Using in-memory customer repository");
                Ok(Arc::new(InMemoryCustomerRepository::new()))
            }
            RepositoryBackend::Database => Err(AppError::not_implemented(
                "database customer repository has not been written yet; set USE_MOCK_DB=true",
            )),
        }
    }
}

/// Lazily constructed, shared customer repository.
///
/// Meant to be created once at startup and injected into request handling
/// state. `reset` exists for test isolation.
pub struct RepositoryProvider {
    factory: RepositoryFactory,
    instance: RwLock<Option<Arc<dyn CustomerRepository>>>,
}

impl RepositoryProvider {
    pub fn new(factory: RepositoryFactory) -> Self {
        Self {
            factory,
            instance: RwLock::new(None),
        }
    }

    pub fn from_config(config: &CustomerServiceConfig) -> Self {
        Self::new(RepositoryFactory::from_config(config))
    }

    /// Get the shared repository, constructing it on first access.
    pub fn customers(&self) -> AppResult<Arc<dyn CustomerRepository>> {
        if let Some(repo) = self
            .instance
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(repo.clone());
        }

        let mut slot = self
            .instance
            .write()
            .unwrap_or_else(PoisonError::into_inner);

        // Another caller may have won the race for the write lock
        if let Some(repo) = slot.as_ref() {
            return Ok(repo.clone());
        }

        let repo = self.factory.create_customer_repository()?;
        *slot = Some(repo.clone());
        Ok(repo)
    }

    /// Drop the cached instance so the next access builds a fresh one.
    pub fn reset(&self) {
        let mut slot = self
            .instance
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if slot.take().is_some() {
            tracing::debug!("Customer repository instance reset");
        }
    }

    /// Whether an instance has been constructed since creation or the last reset
    pub fn is_initialized(&self) -> bool {
        self.instance
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub fn backend(&self) -> RepositoryBackend {
        self.factory.backend()
    }
}

impl std::fmt::Debug for RepositoryProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepositoryProvider")
            .field("backend", &self.factory.backend())
            .field("initialized", &self.is_initialized())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_backend_builds_repository() {
        let factory = RepositoryFactory::new(RepositoryBackend::Mock);
        assert!(factory.create_customer_repository().is_ok());
    }

    #[test]
    fn test_database_backend_is_not_implemented() {
        let factory = RepositoryFactory::new(RepositoryBackend::Database);
        let result = factory.create_customer_repository();
        assert!(matches!(result, Err(AppError::NotImplemented(_))));
    }

    #[test]
    fn test_provider_is_lazy() {
        let provider = RepositoryProvider::new(RepositoryFactory::new(RepositoryBackend::Mock));
        assert!(!provider.is_initialized());

        provider.customers().unwrap();
        assert!(provider.is_initialized());
    }

    #[test]
    fn test_provider_does_not_cache_failures() {
        let provider =
            RepositoryProvider::new(RepositoryFactory::new(RepositoryBackend::Database));

        assert!(provider.customers().is_err());
        assert!(!provider.is_initialized());
        assert!(provider.customers().is_err());
    }
}
