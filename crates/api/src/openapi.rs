//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::customer_handler::{CreateCustomerRequest, UpdateCustomerRequest};
use crate::handlers::health_handler::{HealthResponse, RepositoryHealth, WelcomeResponse};
use domain::{CustomerPrivate, CustomerPublic};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health_handler::welcome,
        crate::handlers::health_handler::health_check,
        crate::handlers::customer_handler::list_customers,
        crate::handlers::customer_handler::create_customer,
        crate::handlers::customer_handler::lookup_customer,
        crate::handlers::customer_handler::get_customer,
        crate::handlers::customer_handler::get_customer_private,
        crate::handlers::customer_handler::update_customer,
        crate::handlers::customer_handler::delete_customer,
        crate::handlers::customer_handler::activate_customer,
        crate::handlers::customer_handler::deactivate_customer,
    ),
    components(
        schemas(
            CustomerPublic,
            CustomerPrivate,
            CreateCustomerRequest,
            UpdateCustomerRequest,
            WelcomeResponse,
            HealthResponse,
            RepositoryHealth,
        )
    ),
    tags(
        (name = "Customers", description = "Customer account management"),
        (name = "Health", description = "Service status"),
    )
)]
pub struct ApiDoc;
