//! Repository layer for data access.

mod customer_repository;
mod in_memory;

pub use customer_repository::CustomerRepository;
pub use in_memory::InMemoryCustomerRepository;

// Export mock for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use customer_repository::MockCustomerRepository;
