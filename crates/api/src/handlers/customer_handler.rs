//! Customer handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use common::{AppError, AppResult};
use customer_service_lib::CustomerService;
use domain::{
    CustomerId, CustomerPatch, CustomerPrivate, CustomerPublic, NewCustomer, PaginationParams,
    CPF_PATTERN, MAX_NAME_LENGTH, MAX_NUMBER_LENGTH,
};

use crate::extractors::{ApiPath, ApiQuery, ValidatedJson};
use crate::state::AppState;

static CPF_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(CPF_PATTERN).expect("CPF pattern is a valid regex"));

fn default_true() -> bool {
    true
}

/// Customer creation request with validation
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCustomerRequest {
    /// National tax ID
    #[validate(regex(path = *CPF_REGEX, message = "CPF must be formatted as 000.000.000-00"))]
    #[schema(example = "321.654.987-00")]
    pub cpf: String,
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "ana.costa@email.com")]
    pub email: String,
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Full name must be 1-255 characters"))]
    #[schema(example = "Ana Costa")]
    pub full_name: String,
    #[schema(example = "1995-01-20")]
    pub birthday: NaiveDate,
    #[validate(length(min = 1, max = MAX_NUMBER_LENGTH, message = "Phone number must be 1-20 characters"))]
    #[schema(example = "+55 21 91234-5678")]
    pub phone_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    #[schema(value_type = f64, example = 100.0)]
    pub balance: Decimal,
    #[validate(length(equal = 3, message = "Currency must be a 3-letter code"))]
    #[schema(example = "BRL")]
    pub currency: String,
    #[validate(length(min = 1, max = MAX_NUMBER_LENGTH, message = "Account number must be 1-20 characters"))]
    #[schema(example = "11111-1")]
    pub account_number: String,
    /// Defaults to true
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Defaults to false
    #[serde(default)]
    pub is_verified: bool,
}

impl From<CreateCustomerRequest> for NewCustomer {
    fn from(req: CreateCustomerRequest) -> Self {
        Self {
            cpf: req.cpf,
            email: req.email,
            full_name: req.full_name,
            birthday: req.birthday,
            phone_number: req.phone_number,
            balance: req.balance,
            currency: req.currency,
            account_number: req.account_number,
            is_active: req.is_active,
            is_verified: req.is_verified,
        }
    }
}

/// Partial customer update. Omitted fields are left unchanged and unknown
/// fields are ignored.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCustomerRequest {
    #[validate(regex(path = *CPF_REGEX, message = "CPF must be formatted as 000.000.000-00"))]
    pub cpf: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Full name must be 1-255 characters"))]
    pub full_name: Option<String>,
    pub birthday: Option<NaiveDate>,
    #[validate(length(min = 1, max = MAX_NUMBER_LENGTH, message = "Phone number must be 1-20 characters"))]
    pub phone_number: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    #[schema(value_type = Option<f64>)]
    pub balance: Option<Decimal>,
    #[validate(length(equal = 3, message = "Currency must be a 3-letter code"))]
    pub currency: Option<String>,
    #[validate(length(min = 1, max = MAX_NUMBER_LENGTH, message = "Account number must be 1-20 characters"))]
    pub account_number: Option<String>,
    pub is_active: Option<bool>,
    pub is_verified: Option<bool>,
}

impl From<UpdateCustomerRequest> for CustomerPatch {
    fn from(req: UpdateCustomerRequest) -> Self {
        Self {
            cpf: req.cpf,
            email: req.email,
            full_name: req.full_name,
            birthday: req.birthday,
            phone_number: req.phone_number,
            balance: req.balance,
            currency: req.currency,
            account_number: req.account_number,
            is_active: req.is_active,
            is_verified: req.is_verified,
        }
    }
}

/// Lookup by exactly one unique attribute
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct LookupQuery {
    /// National tax ID
    pub cpf: Option<String>,
    /// Email address
    pub email: Option<String>,
}

/// Create customer routes
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_customers).post(create_customer))
        .route("/lookup", get(lookup_customer))
        .route(
            "/:id",
            get(get_customer)
                .patch(update_customer)
                .delete(delete_customer),
        )
        .route("/:id/private", get(get_customer_private))
        .route("/:id/activate", post(activate_customer))
        .route("/:id/deactivate", post(deactivate_customer))
}

/// List customers (public data)
#[utoipa::path(
    get,
    path = "/api/v1/customers",
    tag = "Customers",
    params(PaginationParams),
    responses(
        (status = 200, description = "Window of customers", body = Vec<CustomerPublic>)
    )
)]
pub async fn list_customers(
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<PaginationParams>,
) -> AppResult<Json<Vec<CustomerPublic>>> {
    let customers = state.customers()?.list_customers(params).await?;
    Ok(Json(customers.into_iter().map(CustomerPublic::from).collect()))
}

/// Create a customer
#[utoipa::path(
    post,
    path = "/api/v1/customers",
    tag = "Customers",
    request_body = CreateCustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = CustomerPrivate),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_customer(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateCustomerRequest>,
) -> AppResult<(StatusCode, Json<CustomerPrivate>)> {
    let customer = state
        .customers()?
        .create_customer(NewCustomer::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(CustomerPrivate::from(customer))))
}

/// Find a customer by CPF or email (private data)
#[utoipa::path(
    get,
    path = "/api/v1/customers/lookup",
    tag = "Customers",
    params(LookupQuery),
    responses(
        (status = 200, description = "Matching customer", body = CustomerPrivate),
        (status = 400, description = "Neither or both of cpf and email given"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn lookup_customer(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<LookupQuery>,
) -> AppResult<Json<CustomerPrivate>> {
    let service = state.customers()?;

    let customer = match (query.cpf, query.email) {
        (Some(cpf), None) => service.find_by_cpf(&cpf).await?,
        (None, Some(email)) => service.find_by_email(&email).await?,
        _ => {
            return Err(AppError::bad_request(
                "Provide exactly one of 'cpf' or 'email'",
            ))
        }
    };

    Ok(Json(CustomerPrivate::from(customer)))
}

/// Get customer by ID (public data)
#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer", body = CustomerPublic),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
) -> AppResult<Json<CustomerPublic>> {
    let customer = state.customers()?.get_customer(id).await?;
    Ok(Json(CustomerPublic::from(customer)))
}

/// Get customer by ID (private data)
#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}/private",
    tag = "Customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer with account details", body = CustomerPrivate),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn get_customer_private(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
) -> AppResult<Json<CustomerPrivate>> {
    let customer = state.customers()?.get_customer(id).await?;
    Ok(Json(CustomerPrivate::from(customer)))
}

/// Partially update a customer
#[utoipa::path(
    patch,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    request_body = UpdateCustomerRequest,
    responses(
        (status = 200, description = "Customer updated", body = CustomerPrivate),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn update_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
    ValidatedJson(payload): ValidatedJson<UpdateCustomerRequest>,
) -> AppResult<Json<CustomerPrivate>> {
    let customer = state
        .customers()?
        .update_customer(id, CustomerPatch::from(payload))
        .await?;

    Ok(Json(CustomerPrivate::from(customer)))
}

/// Permanently delete a customer
#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    tag = "Customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 204, description = "Customer deleted"),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
) -> AppResult<StatusCode> {
    state.customers()?.delete_customer(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Activate a customer
#[utoipa::path(
    post,
    path = "/api/v1/customers/{id}/activate",
    tag = "Customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer activated", body = CustomerPublic),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn activate_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
) -> AppResult<Json<CustomerPublic>> {
    let customer = state.customers()?.activate_customer(id).await?;
    Ok(Json(CustomerPublic::from(customer)))
}

/// Deactivate a customer
#[utoipa::path(
    post,
    path = "/api/v1/customers/{id}/deactivate",
    tag = "Customers",
    params(
        ("id" = i64, Path, description = "Customer ID")
    ),
    responses(
        (status = 200, description = "Customer deactivated", body = CustomerPublic),
        (status = 404, description = "Customer not found")
    )
)]
pub async fn deactivate_customer(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
) -> AppResult<Json<CustomerPublic>> {
    let customer = state.customers()?.deactivate_customer(id).await?;
    Ok(Json(CustomerPublic::from(customer)))
}
