//! Customer repository contract.

use async_trait::async_trait;

use common::AppResult;
use domain::{Customer, CustomerId, CustomerPatch, NewCustomer};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage-agnostic customer repository.
///
/// Absence is reported as `Ok(None)` (or `Ok(false)` for deletes), never as
/// an error. `Err` is reserved for backend failures.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Store a new customer with a backend-assigned identifier.
    ///
    /// Uniqueness of cpf and email is not checked here.
    async fn create_customer(&self, data: NewCustomer) -> AppResult<Customer>;

    /// Find customer by identifier
    async fn get_customer_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>>;

    /// Find customer by national tax ID
    async fn get_customer_by_cpf(&self, cpf: &str) -> AppResult<Option<Customer>>;

    /// Find customer by email address
    async fn get_customer_by_email(&self, email: &str) -> AppResult<Option<Customer>>;

    /// List customers in natural order, skipping `skip` and returning at most `limit`.
    async fn get_all_customers(&self, skip: usize, limit: usize) -> AppResult<Vec<Customer>>;

    /// Apply the present patch fields and refresh `updated_at`.
    async fn update_customer(
        &self,
        id: CustomerId,
        patch: CustomerPatch,
    ) -> AppResult<Option<Customer>>;

    /// Remove a customer permanently. Returns whether a record was removed.
    async fn delete_customer(&self, id: CustomerId) -> AppResult<bool>;

    /// Mark a customer active
    async fn activate_customer(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        self.update_customer(id, CustomerPatch::activation(true)).await
    }

    /// Mark a customer inactive
    async fn deactivate_customer(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        self.update_customer(id, CustomerPatch::activation(false)).await
    }
}
