//! Application state for dependency injection.

use std::sync::Arc;

use common::AppResult;
use customer_service_lib::{CustomerManager, CustomerServiceConfig, RepositoryProvider};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Shared customer repository, built on first use
    pub repositories: Arc<RepositoryProvider>,
}

impl AppState {
    /// Create new app state.
    pub fn new(repositories: Arc<RepositoryProvider>) -> Self {
        Self { repositories }
    }

    /// Create app state with a provider for the configured backend.
    pub fn from_config(config: &CustomerServiceConfig) -> Self {
        Self::new(Arc::new(RepositoryProvider::from_config(config)))
    }

    /// Customer use cases backed by the shared repository.
    pub fn customers(&self) -> AppResult<CustomerManager> {
        Ok(CustomerManager::new(self.repositories.customers()?))
    }
}
