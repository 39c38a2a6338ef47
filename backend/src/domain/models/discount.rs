use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The single active discount. Persisted as `{code, percentage}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Discount {
    pub code: Option<String>,
    /// In [0, 100]
    pub percentage: f64,
}

impl Discount {
    pub fn none() -> Self {
        Self {
            code: None,
            percentage: 0.0,
        }
    }

    pub fn new(code: impl Into<String>, percentage: u8) -> Self {
        Self {
            code: Some(code.into()),
            percentage: f64::from(percentage),
        }
    }
}

impl Default for Discount {
    fn default() -> Self {
        Self::none()
    }
}

/// Closed mapping of valid codes to percentages. Lookups are case-insensitive
/// and ignore surrounding whitespace.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscountTable {
    codes: BTreeMap<String, u8>,
}

impl DiscountTable {
    /// Keys are expected upper-cased already (see `CartConfig`)
    pub fn new(codes: BTreeMap<String, u8>) -> Self {
        Self { codes }
    }

    /// Trim and upper-case raw user input
    pub fn normalize(input: &str) -> String {
        input.trim().to_uppercase()
    }

    pub fn lookup(&self, input: &str) -> Option<u8> {
        self.codes.get(&Self::normalize(input)).copied()
    }
}

impl Default for DiscountTable {
    fn default() -> Self {
        crate::config::CartConfig::default().discount_table()
    }
}
