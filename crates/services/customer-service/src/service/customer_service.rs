//! Customer service - Handles customer account use cases.
//!
//! SOLID (SRP): Handles customer-related use cases only.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{Customer, CustomerId, CustomerPatch, NewCustomer, PaginationParams};

use crate::repository::CustomerRepository;

/// Customer service trait for dependency injection.
///
/// Unlike the repository, missing customers surface as `AppError::NotFound`.
#[async_trait]
pub trait CustomerService: Send + Sync {
    /// List customers in the given window
    async fn list_customers(&self, params: PaginationParams) -> AppResult<Vec<Customer>>;

    /// Get customer by ID
    async fn get_customer(&self, id: CustomerId) -> AppResult<Customer>;

    /// Get customer by national tax ID
    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Customer>;

    /// Get customer by email
    async fn find_by_email(&self, email: &str) -> AppResult<Customer>;

    /// Create a new customer
    async fn create_customer(&self, data: NewCustomer) -> AppResult<Customer>;

    /// Apply a partial update
    async fn update_customer(&self, id: CustomerId, patch: CustomerPatch) -> AppResult<Customer>;

    /// Permanently delete a customer
    async fn delete_customer(&self, id: CustomerId) -> AppResult<()>;

    /// Activate a customer account
    async fn activate_customer(&self, id: CustomerId) -> AppResult<Customer>;

    /// Deactivate a customer account
    async fn deactivate_customer(&self, id: CustomerId) -> AppResult<Customer>;
}

/// Concrete implementation of CustomerService using a repository.
pub struct CustomerManager {
    repo: Arc<dyn CustomerRepository>,
}

impl CustomerManager {
    /// Create new customer service instance with repository
    pub fn new(repo: Arc<dyn CustomerRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CustomerService for CustomerManager {
    async fn list_customers(&self, params: PaginationParams) -> AppResult<Vec<Customer>> {
        self.repo.get_all_customers(params.skip, params.limit).await
    }

    async fn get_customer(&self, id: CustomerId) -> AppResult<Customer> {
        self.repo.get_customer_by_id(id).await?.ok_or_not_found()
    }

    async fn find_by_cpf(&self, cpf: &str) -> AppResult<Customer> {
        self.repo.get_customer_by_cpf(cpf).await?.ok_or_not_found()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Customer> {
        self.repo.get_customer_by_email(email).await?.ok_or_not_found()
    }

    async fn create_customer(&self, data: NewCustomer) -> AppResult<Customer> {
        data.validate()?;

        let customer = self.repo.create_customer(data).await?;
        tracing::info!(customer_id = customer.id, "Customer created");
        Ok(customer)
    }

    async fn update_customer(&self, id: CustomerId, patch: CustomerPatch) -> AppResult<Customer> {
        patch.validate()?;

        self.repo.update_customer(id, patch).await?.ok_or_not_found()
    }

    async fn delete_customer(&self, id: CustomerId) -> AppResult<()> {
        if self.repo.delete_customer(id).await? {
            tracing::info!(customer_id = id, "Customer deleted");
            Ok(())
        } else {
            Err(AppError::NotFound)
        }
    }

    async fn activate_customer(&self, id: CustomerId) -> AppResult<Customer> {
        let customer = self.repo.activate_customer(id).await?.ok_or_not_found()?;
        tracing::info!(customer_id = id, "Customer activated");
        Ok(customer)
    }

    async fn deactivate_customer(&self, id: CustomerId) -> AppResult<Customer> {
        let customer = self.repo.deactivate_customer(id).await?.ok_or_not_found()?;
        tracing::info!(customer_id = id, "Customer deactivated");
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::{NaiveDate, Utc};
    use mockall::predicate::eq;
    use rust_decimal::Decimal;

    use crate::repository::MockCustomerRepository;

    fn test_customer(id: CustomerId) -> Customer {
        Customer {
            id,
            cpf: "123.456.789-00".to_string(),
            email: "test@email.com".to_string(),
            full_name: "Test Customer".to_string(),
            birthday: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
            phone_number: "+55 11 90000-0000".to_string(),
            balance: Decimal::new(100, 2),
            currency: "BRL".to_string(),
            account_number: "00000-0".to_string(),
            is_active: true,
            is_verified: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_get_customer_success() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_id()
            .with(eq(5))
            .returning(|id| Ok(Some(test_customer(id))));

        let service = CustomerManager::new(Arc::new(repo));
        let customer = service.get_customer(5).await.unwrap();

        assert_eq!(customer.id, 5);
    }

    #[tokio::test]
    async fn test_get_customer_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_get_customer_by_id().returning(|_| Ok(None));

        let service = CustomerManager::new(Arc::new(repo));
        let result = service.get_customer(5).await;

        assert!(matches!(result, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_list_passes_window_through() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_get_all_customers()
            .with(eq(10), eq(20))
            .times(1)
            .returning(|_, _| Ok(vec![test_customer(11)]));

        let service = CustomerManager::new(Arc::new(repo));
        let customers = service
            .list_customers(PaginationParams::new(10, 20))
            .await
            .unwrap();

        assert_eq!(customers.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_missing_is_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_delete_customer().returning(|_| Ok(false));

        let service = CustomerManager::new(Arc::new(repo));
        assert!(matches!(
            service.delete_customer(9).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_activate_not_found() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_activate_customer().returning(|_| Ok(None));

        let service = CustomerManager::new(Arc::new(repo));
        assert!(matches!(
            service.activate_customer(9).await,
            Err(AppError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_update_rejects_bad_currency_before_repository() {
        let mut repo = MockCustomerRepository::new();
        repo.expect_update_customer().never();

        let service = CustomerManager::new(Arc::new(repo));
        let patch = CustomerPatch {
            currency: Some("usd".to_string()),
            ..CustomerPatch::default()
        };

        assert!(matches!(
            service.update_customer(1, patch).await,
            Err(AppError::Validation(_))
        ));
    }
}
