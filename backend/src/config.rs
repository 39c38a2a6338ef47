//! # Cart Configuration
//!
//! Settings for the cart widget, optionally read from a YAML file.
//!
//! ## YAML Format
//!
//! ```yaml
//! brand_name: "SkyWay Travels"
//! storage:
//!   cart_key: "skyway_travels_cart_v1"
//!   discount_key: "skyway_travels_discount_v1"
//! discount_codes:
//!   SKY10: 10
//!   WELCOME20: 20
//! notification_dismiss_ms: 2500
//! ```
//!
//! Every field is optional; missing fields take the built-in defaults.

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::discount::DiscountTable;

pub const DEFAULT_CART_KEY: &str = "skyway_travels_cart_v1";
pub const DEFAULT_DISCOUNT_KEY: &str = "skyway_travels_discount_v1";
pub const DEFAULT_DISMISS_MS: u32 = 2500;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("discount code {code} has percentage {percentage}, must be between 1 and 100")]
    PercentageOutOfRange { code: String, percentage: u8 },
    #[error("discount code cannot be empty")]
    EmptyCode,
    #[error("storage keys must be non-empty and distinct")]
    InvalidStorageKeys,
}

/// Keys under which the cart and the discount are persisted
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageKeys {
    pub cart_key: String,
    pub discount_key: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            cart_key: DEFAULT_CART_KEY.to_string(),
            discount_key: DEFAULT_DISCOUNT_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CartConfig {
    /// Shown in the contact artifact header and footer
    pub brand_name: String,
    pub storage: StorageKeys,
    /// Valid discount codes and their integer percentages
    pub discount_codes: BTreeMap<String, u8>,
    /// Delay before a toast hides itself
    pub notification_dismiss_ms: u32,
}

impl Default for CartConfig {
    fn default() -> Self {
        let mut discount_codes = BTreeMap::new();
        discount_codes.insert("SKY10".to_string(), 10);
        discount_codes.insert("WELCOME20".to_string(), 20);

        Self {
            brand_name: "SkyWay Travels".to_string(),
            storage: StorageKeys::default(),
            discount_codes,
            notification_dismiss_ms: DEFAULT_DISMISS_MS,
        }
    }
}

impl CartConfig {
    /// Parse a YAML document, normalizing and validating the result
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: CartConfig = serde_yaml::from_str(yaml).context("Invalid cart config YAML")?;
        let config = config.normalized()?;
        debug!("Parsed cart config with {} discount codes", config.discount_codes.len());
        Ok(config)
    }

    /// Load the config from `path`, falling back to defaults if the file is absent
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!("No cart config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let yaml = fs::read_to_string(path)
            .with_context(|| format!("Failed to read cart config {}", path.display()))?;
        let config = Self::from_yaml_str(&yaml)?;
        info!("Loaded cart config from {}", path.display());
        Ok(config)
    }

    /// Upper-case and trim every code, then check the table and keys
    fn normalized(self) -> Result<Self, ConfigError> {
        let mut codes = BTreeMap::new();
        for (code, percentage) in self.discount_codes {
            let code = code.trim().to_uppercase();
            if code.is_empty() {
                return Err(ConfigError::EmptyCode);
            }
            if percentage == 0 || percentage > 100 {
                return Err(ConfigError::PercentageOutOfRange { code, percentage });
            }
            codes.insert(code, percentage);
        }

        let keys = &self.storage;
        if keys.cart_key.is_empty() || keys.discount_key.is_empty() || keys.cart_key == keys.discount_key {
            return Err(ConfigError::InvalidStorageKeys);
        }

        Ok(Self {
            discount_codes: codes,
            ..self
        })
    }

    pub fn discount_table(&self) -> DiscountTable {
        DiscountTable::new(self.discount_codes.clone())
    }
}
