//! HTTP handlers.

pub mod customer_handler;
pub mod health_handler;

pub use customer_handler::customer_routes;
pub use health_handler::{health_routes, welcome};
