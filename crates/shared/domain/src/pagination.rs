//! Offset/limit window for list endpoints.

use serde::Deserialize;

use crate::constants::{DEFAULT_LIMIT, DEFAULT_SKIP};

/// Pagination query parameters (`?skip=0&limit=100`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::IntoParams))]
#[cfg_attr(feature = "openapi", into_params(parameter_in = Query))]
pub struct PaginationParams {
    /// Number of records to skip
    #[serde(default = "default_skip")]
    pub skip: usize,
    /// Maximum number of records to return
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_skip() -> usize {
    DEFAULT_SKIP
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl PaginationParams {
    pub fn new(skip: usize, limit: usize) -> Self {
        Self { skip, limit }
    }
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            skip: DEFAULT_SKIP,
            limit: DEFAULT_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_apply_to_missing_fields() {
        let params: PaginationParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params, PaginationParams::new(0, 100));

        let params: PaginationParams = serde_json::from_str(r#"{"limit": 5}"#).unwrap();
        assert_eq!(params, PaginationParams::new(0, 5));
    }
}
