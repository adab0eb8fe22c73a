//! In-memory customer repository.
//!
//! Backs the `USE_MOCK_DB` development mode. Records live in a plain list for
//! the lifetime of the instance; nothing is persisted.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use common::AppResult;
use domain::{Customer, CustomerId, CustomerPatch, NewCustomer, DEFAULT_CURRENCY};

use super::CustomerRepository;

/// Identifier handed to the first customer created after the seed data
const FIRST_FREE_ID: CustomerId = 4;

struct Store {
    customers: Vec<Customer>,
    next_id: CustomerId,
}

/// List-backed repository seeded with three sample customers.
///
/// Lookups scan linearly. The lock only makes each operation atomic; there
/// are no transactions across operations.
pub struct InMemoryCustomerRepository {
    store: RwLock<Store>,
}

impl InMemoryCustomerRepository {
    /// Create a repository holding the sample customers (ids 1-3).
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                customers: seed_customers(),
                next_id: FIRST_FREE_ID,
            }),
        }
    }

    /// Create a repository with no records; the first id assigned is 1.
    pub fn empty() -> Self {
        Self {
            store: RwLock::new(Store {
                customers: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Identifier the next `create_customer` call will assign
    pub async fn next_id(&self) -> CustomerId {
        self.store.read().await.next_id
    }

    /// Number of stored customers
    pub async fn len(&self) -> usize {
        self.store.read().await.customers.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.store.read().await.customers.is_empty()
    }
}

impl Default for InMemoryCustomerRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn create_customer(&self, data: NewCustomer) -> AppResult<Customer> {
        let mut store = self.store.write().await;

        let customer = data.into_customer(store.next_id, Utc::now());
        store.next_id += 1;
        store.customers.push(customer.clone());

        tracing::debug!(customer_id = customer.id, "Customer stored in memory");
        Ok(customer)
    }

    async fn get_customer_by_id(&self, id: CustomerId) -> AppResult<Option<Customer>> {
        let store = self.store.read().await;
        Ok(store.customers.iter().find(|c| c.id == id).cloned())
    }

    async fn get_customer_by_cpf(&self, cpf: &str) -> AppResult<Option<Customer>> {
        let store = self.store.read().await;
        Ok(store.customers.iter().find(|c| c.cpf == cpf).cloned())
    }

    async fn get_customer_by_email(&self, email: &str) -> AppResult<Option<Customer>> {
        let store = self.store.read().await;
        Ok(store.customers.iter().find(|c| c.email == email).cloned())
    }

    async fn get_all_customers(&self, skip: usize, limit: usize) -> AppResult<Vec<Customer>> {
        let store = self.store.read().await;
        Ok(store
            .customers
            .iter()
            .skip(skip)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn update_customer(
        &self,
        id: CustomerId,
        patch: CustomerPatch,
    ) -> AppResult<Option<Customer>> {
        let mut store = self.store.write().await;

        let Some(customer) = store.customers.iter_mut().find(|c| c.id == id) else {
            return Ok(None);
        };

        customer.apply(patch);
        Ok(Some(customer.clone()))
    }

    async fn delete_customer(&self, id: CustomerId) -> AppResult<bool> {
        let mut store = self.store.write().await;

        match store.customers.iter().position(|c| c.id == id) {
            Some(index) => {
                store.customers.remove(index);
                tracing::debug!(customer_id = id, "Customer removed from memory");
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

fn seed_customers() -> Vec<Customer> {
    let now = Utc::now();
    let seed = |id,
                cpf: &str,
                email: &str,
                full_name: &str,
                birthday,
                phone: &str,
                cents,
                account: &str,
                is_active,
                is_verified| Customer {
        id,
        cpf: cpf.to_string(),
        email: email.to_string(),
        full_name: full_name.to_string(),
        birthday,
        phone_number: phone.to_string(),
        balance: Decimal::new(cents, 2),
        currency: DEFAULT_CURRENCY.to_string(),
        account_number: account.to_string(),
        is_active,
        is_verified,
        created_at: now,
        updated_at: now,
    };

    vec![
        seed(
            1,
            "123.456.789-00",
            "joao.silva@email.com",
            "João Silva",
            date(1990, 5, 15),
            "+55 11 98765-4321",
            150_050,
            "12345-6",
            true,
            true,
        ),
        seed(
            2,
            "987.654.321-00",
            "maria.santos@email.com",
            "Maria Santos",
            date(1985, 8, 22),
            "+55 11 87654-3210",
            230_075,
            "65432-1",
            true,
            false,
        ),
        seed(
            3,
            "456.789.123-00",
            "pedro.oliveira@email.com",
            "Pedro Oliveira",
            date(1992, 12, 3),
            "+55 11 76543-2109",
            85_025,
            "98765-4",
            false,
            true,
        ),
    ]
}

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}
