//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Pagination
// =============================================================================

/// Default number of records skipped by list operations
pub const DEFAULT_SKIP: usize = 0;

/// Default maximum number of records returned by list operations
pub const DEFAULT_LIMIT: usize = 100;

// =============================================================================
// Customer fields
// =============================================================================

/// Length of an ISO 4217 currency code
pub const CURRENCY_CODE_LENGTH: usize = 3;

/// Currency assigned to the seeded sample accounts
pub const DEFAULT_CURRENCY: &str = "BRL";

/// Maximum length of a customer's full name or email
pub const MAX_NAME_LENGTH: u64 = 255;

/// Maximum length of phone and account numbers
pub const MAX_NUMBER_LENGTH: u64 = 20;

/// Formatted CPF (Brazilian tax ID) pattern, e.g. `123.456.789-00`
pub const CPF_PATTERN: &str = r"^\d{3}\.\d{3}\.\d{3}-\d{2}$";

/// Decimal places kept on account balances
pub const BALANCE_SCALE: u32 = 2;
