//! Customer domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::constants::{BALANCE_SCALE, CURRENCY_CODE_LENGTH};
use crate::error::{DomainError, DomainResult};

/// Store-assigned customer identifier
pub type CustomerId = i64;

/// Customer domain entity (one bank-account holder)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    /// National tax ID (CPF)
    pub cpf: String,
    pub email: String,
    pub full_name: String,
    pub birthday: NaiveDate,
    pub phone_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub currency: String,
    pub account_number: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Customer {
    /// Apply the present fields of a patch and refresh `updated_at`.
    ///
    /// The identifier and `created_at` are never touched.
    pub fn apply(&mut self, patch: CustomerPatch) {
        if let Some(cpf) = patch.cpf {
            self.cpf = cpf;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(birthday) = patch.birthday {
            self.birthday = birthday;
        }
        if let Some(phone_number) = patch.phone_number {
            self.phone_number = phone_number;
        }
        if let Some(balance) = patch.balance {
            self.balance = round_balance(balance);
        }
        if let Some(currency) = patch.currency {
            self.currency = currency;
        }
        if let Some(account_number) = patch.account_number {
            self.account_number = account_number;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
        if let Some(is_verified) = patch.is_verified {
            self.is_verified = is_verified;
        }
        self.updated_at = Utc::now();
    }
}

/// Customer creation data (everything except store-managed fields)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NewCustomer {
    pub cpf: String,
    pub email: String,
    pub full_name: String,
    pub birthday: NaiveDate,
    pub phone_number: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    pub currency: String,
    pub account_number: String,
    pub is_active: bool,
    pub is_verified: bool,
}

impl NewCustomer {
    /// Check business rules that request-level validation cannot express.
    pub fn validate(&self) -> DomainResult<()> {
        validate_currency(&self.currency)
    }

    /// Materialize a stored customer with the given identifier and timestamp.
    pub fn into_customer(self, id: CustomerId, now: DateTime<Utc>) -> Customer {
        Customer {
            id,
            cpf: self.cpf,
            email: self.email,
            full_name: self.full_name,
            birthday: self.birthday,
            phone_number: self.phone_number,
            balance: round_balance(self.balance),
            currency: self.currency,
            account_number: self.account_number,
            is_active: self.is_active,
            is_verified: self.is_verified,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial customer update. `None` leaves the attribute unchanged.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CustomerPatch {
    pub cpf: Option<String>,
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub birthday: Option<NaiveDate>,
    pub phone_number: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub balance: Option<Decimal>,
    pub currency: Option<String>,
    pub account_number: Option<String>,
    pub is_active: Option<bool>,
    pub is_verified: Option<bool>,
}

impl CustomerPatch {
    /// Patch that only toggles the active flag
    pub fn activation(is_active: bool) -> Self {
        Self {
            is_active: Some(is_active),
            ..Self::default()
        }
    }

    /// Check business rules on the fields that are present.
    pub fn validate(&self) -> DomainResult<()> {
        match &self.currency {
            Some(currency) => validate_currency(currency),
            None => Ok(()),
        }
    }
}

/// Round to cents, half away from zero.
fn round_balance(balance: Decimal) -> Decimal {
    balance.round_dp_with_strategy(BALANCE_SCALE, RoundingStrategy::MidpointAwayFromZero)
}

fn validate_currency(code: &str) -> DomainResult<()> {
    let well_formed = code.len() == CURRENCY_CODE_LENGTH
        && code.chars().all(|c| c.is_ascii_uppercase());

    if well_formed {
        Ok(())
    } else {
        Err(DomainError::validation(format!(
            "Currency must be a {}-letter uppercase code",
            CURRENCY_CODE_LENGTH
        )))
    }
}

/// Public customer view (safe to list without authentication)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CustomerPublic {
    /// Customer identifier
    pub id: CustomerId,
    /// Account holder name
    pub full_name: String,
    /// Date of birth
    pub birthday: NaiveDate,
    /// Whether the account is active
    pub is_active: bool,
    /// Whether the account holder has been verified
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerPublic {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            full_name: customer.full_name,
            birthday: customer.birthday,
            is_active: customer.is_active,
            is_verified: customer.is_verified,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
        }
    }
}

/// Private customer view including contact and account details
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CustomerPrivate {
    pub id: CustomerId,
    pub full_name: String,
    pub birthday: NaiveDate,
    pub is_active: bool,
    pub is_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// National tax ID (CPF)
    #[cfg_attr(feature = "openapi", schema(example = "123.456.789-00"))]
    pub cpf: String,
    pub email: String,
    pub phone_number: String,
    /// Account balance in `currency`
    #[serde(with = "rust_decimal::serde::float")]
    pub balance: Decimal,
    /// ISO 4217 currency code
    #[cfg_attr(feature = "openapi", schema(example = "BRL"))]
    pub currency: String,
    pub account_number: String,
}

impl From<Customer> for CustomerPrivate {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id,
            full_name: customer.full_name,
            birthday: customer.birthday,
            is_active: customer.is_active,
            is_verified: customer.is_verified,
            created_at: customer.created_at,
            updated_at: customer.updated_at,
            cpf: customer.cpf,
            email: customer.email,
            phone_number: customer.phone_number,
            balance: customer.balance,
            currency: customer.currency,
            account_number: customer.account_number,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewCustomer {
        NewCustomer {
            cpf: "111.222.333-44".to_string(),
            email: "ana.costa@email.com".to_string(),
            full_name: "Ana Costa".to_string(),
            birthday: NaiveDate::from_ymd_opt(1995, 1, 20).unwrap(),
            phone_number: "+55 21 91234-5678".to_string(),
            balance: Decimal::new(10_000, 2),
            currency: "BRL".to_string(),
            account_number: "11111-1".to_string(),
            is_active: true,
            is_verified: false,
        }
    }

    #[test]
    fn test_into_customer_stamps_both_timestamps() {
        let now = Utc::now();
        let customer = sample().into_customer(7, now);

        assert_eq!(customer.id, 7);
        assert_eq!(customer.created_at, now);
        assert_eq!(customer.updated_at, now);
    }

    #[test]
    fn test_into_customer_rounds_balance_to_cents() {
        let mut new = sample();
        new.balance = Decimal::new(12_3456, 4);

        let customer = new.into_customer(1, Utc::now());
        assert_eq!(customer.balance, Decimal::new(1235, 2));
    }

    #[test]
    fn test_half_cent_balances_round_away_from_zero() {
        let mut new = sample();
        new.balance = Decimal::new(125, 3);
        let mut customer = new.into_customer(1, Utc::now());
        assert_eq!(customer.balance, Decimal::new(13, 2));

        customer.apply(CustomerPatch {
            balance: Some(Decimal::new(-2_345, 3)),
            ..CustomerPatch::default()
        });
        assert_eq!(customer.balance, Decimal::new(-235, 2));
    }

    #[test]
    fn test_apply_only_touches_present_fields() {
        let created = Utc::now() - chrono::Duration::seconds(10);
        let mut customer = sample().into_customer(1, created);

        customer.apply(CustomerPatch {
            full_name: Some("Ana Maria Costa".to_string()),
            is_verified: Some(true),
            ..CustomerPatch::default()
        });

        assert_eq!(customer.full_name, "Ana Maria Costa");
        assert!(customer.is_verified);
        assert_eq!(customer.email, "ana.costa@email.com");
        assert!(customer.is_active);
        assert_eq!(customer.id, 1);
        assert_eq!(customer.created_at, created);
        assert!(customer.updated_at > created);
    }

    #[test]
    fn test_empty_patch_still_refreshes_updated_at() {
        let created = Utc::now() - chrono::Duration::seconds(10);
        let mut customer = sample().into_customer(1, created);
        let before = customer.clone();

        customer.apply(CustomerPatch::default());

        assert!(customer.updated_at > before.updated_at);
        assert_eq!(customer.full_name, before.full_name);
    }

    #[test]
    fn test_currency_must_be_three_uppercase_letters() {
        let mut new = sample();
        assert!(new.validate().is_ok());

        new.currency = "brl".to_string();
        assert!(matches!(new.validate(), Err(DomainError::Validation(_))));

        let patch = CustomerPatch {
            currency: Some("EURO".to_string()),
            ..CustomerPatch::default()
        };
        assert!(patch.validate().is_err());
        assert!(CustomerPatch::activation(true).validate().is_ok());
    }

    #[test]
    fn test_public_view_omits_private_fields() {
        let customer = sample().into_customer(2, Utc::now());
        let json = serde_json::to_value(CustomerPublic::from(customer)).unwrap();

        assert_eq!(json["id"], 2);
        assert!(json.get("cpf").is_none());
        assert!(json.get("balance").is_none());
    }

    #[test]
    fn test_private_view_serializes_balance_as_number() {
        let customer = sample().into_customer(2, Utc::now());
        let json = serde_json::to_value(CustomerPrivate::from(customer)).unwrap();

        assert_eq!(json["balance"], serde_json::json!(100.0));
        assert_eq!(json["currency"], "BRL");
    }
}
