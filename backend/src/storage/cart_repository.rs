//! # Cart Repository
//!
//! Persists the cart lines and the active discount under two independent keys
//! of a [`KeyValueStore`].
//!
//! ## Record Formats
//!
//! ```text
//! skyway_travels_cart_v1     → [{"id":"p1","name":"Bali Escape","price":1000.0,"quantity":2}]
//! skyway_travels_discount_v1 → {"code":"SKY10","percentage":10.0}
//! ```
//!
//! Reads are permissive: anything missing or malformed falls back to the
//! empty cart / no discount and is logged, never returned as an error.

use log::{debug, error, warn};
use serde::Deserialize;
use serde_json::Value;

use super::traits::{KeyValueStore, StorageError};
use crate::config::StorageKeys;
use crate::domain::models::{CartItem, Discount};
use crate::domain::CartStore;

/// Lenient view of a stored discount; absent fields become defaults
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StoredDiscount {
    code: Option<String>,
    percentage: Option<f64>,
}

pub struct CartRepository<S: KeyValueStore> {
    store: S,
    keys: StorageKeys,
}

impl<S: KeyValueStore> CartRepository<S> {
    pub fn new(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn backend(&self) -> &S {
        &self.store
    }

    /// Write both records. Serialization happens before any write so a
    /// serialization failure leaves storage untouched.
    pub fn save(&self, items: &[CartItem], discount: &Discount) -> Result<(), StorageError> {
        let cart_json = serde_json::to_string(items).map_err(|source| StorageError::Serialize {
            key: self.keys.cart_key.clone(),
            source,
        })?;
        let discount_json = serde_json::to_string(discount).map_err(|source| StorageError::Serialize {
            key: self.keys.discount_key.clone(),
            source,
        })?;

        self.store.set(&self.keys.cart_key, &cart_json)?;
        self.store.set(&self.keys.discount_key, &discount_json)?;
        debug!("Persisted {} cart lines", items.len());
        Ok(())
    }

    /// Restore the last saved state, or defaults for whatever cannot be read
    pub fn load(&self) -> CartStore {
        let items = self.read(&self.keys.cart_key).map(parse_cart).unwrap_or_default();
        let discount = self
            .read(&self.keys.discount_key)
            .map(parse_discount)
            .unwrap_or_else(Discount::none);
        debug!("Loaded {} cart lines, discount {:?}", items.len(), discount.code);
        CartStore::from_parts(items, discount)
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value,
            Err(e) => {
                error!("Failed to load {} from storage: {}", key, e);
                None
            }
        }
    }
}

/// Accept a JSON array of line items. Entries that do not deserialize or
/// have a zero quantity are skipped; repeated ids are merged.
fn parse_cart(raw: String) -> Vec<CartItem> {
    let entries = match serde_json::from_str::<Value>(&raw) {
        Ok(Value::Array(entries)) => entries,
        Ok(_) => {
            warn!("Stored cart is not an array, starting with an empty cart");
            return Vec::new();
        }
        Err(e) => {
            warn!("Stored cart is not valid JSON ({}), starting with an empty cart", e);
            return Vec::new();
        }
    };

    let mut items: Vec<CartItem> = Vec::with_capacity(entries.len());
    for entry in entries {
        let item = match serde_json::from_value::<CartItem>(entry) {
            Ok(item) if item.quantity > 0 && item.price.is_finite() => item,
            Ok(item) => {
                warn!("Skipping stored cart line {} with invalid quantity or price", item.id);
                continue;
            }
            Err(e) => {
                warn!("Skipping malformed stored cart line: {}", e);
                continue;
            }
        };

        match items.iter_mut().find(|existing| existing.id == item.id) {
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => items.push(item),
        }
    }
    items
}

fn parse_discount(raw: String) -> Discount {
    let stored = match serde_json::from_str::<StoredDiscount>(&raw) {
        Ok(stored) => stored,
        Err(e) => {
            warn!("Stored discount is malformed ({}), ignoring it", e);
            return Discount::none();
        }
    };

    let code = stored.code.filter(|code| !code.trim().is_empty());
    let percentage = stored.percentage.unwrap_or(0.0);
    match code {
        Some(code) if percentage > 0.0 && percentage <= 100.0 => Discount {
            code: Some(code),
            percentage,
        },
        Some(code) => {
            warn!("Stored discount {} has out-of-range percentage {}", code, percentage);
            Discount::none()
        }
        None => Discount::none(),
    }
}
