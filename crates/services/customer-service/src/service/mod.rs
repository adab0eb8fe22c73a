//! Application services layer - Customer use cases.
//!
//! Services depend on the repository trait, not on a concrete backend.

mod customer_service;

pub use customer_service::{CustomerManager, CustomerService};
