//! Domain layer - Core business entities and value objects.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! The customer entity and its patch/response shapes are shared by the
//! repository layer and the HTTP API.

pub mod constants;
pub mod customer;
pub mod error;
pub mod pagination;

pub use constants::*;
pub use customer::{
    Customer, CustomerId, CustomerPatch, CustomerPrivate, CustomerPublic, NewCustomer,
};
pub use error::{DomainError, DomainResult};
pub use pagination::PaginationParams;
