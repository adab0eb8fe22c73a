//! Customer Service Library
//!
//! Data access and use cases for customer accounts:
//! - `repository`: the storage-agnostic [`CustomerRepository`] contract and
//!   its in-memory [`InMemoryCustomerRepository`] implementation
//! - `factory`: backend selection and the lazily constructed shared instance
//! - `service`: use cases consumed by the HTTP layer

pub mod config;
pub mod factory;
pub mod repository;
pub mod service;

pub use config::{CustomerServiceConfig, RepositoryBackend};
pub use factory::{RepositoryFactory, RepositoryProvider};
pub use repository::{CustomerRepository, InMemoryCustomerRepository};
pub use service::{CustomerManager, CustomerService};

#[cfg(any(test, feature = "test-utils"))]
pub use repository::MockCustomerRepository;
