//! # Cart Store
//!
//! The in-memory cart and active discount. Its methods are the only way the
//! state changes; persistence and rendering are sequenced by `CartSession`.

use log::{debug, info, warn};
use shared::Product;

use super::errors::CartError;
use super::models::{CartItem, Discount, DiscountTable, Totals};
use super::totals::calculate_totals;

/// Result of adjusting a line's quantity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityChange {
    /// The line is still in the cart with this quantity
    Updated(u32),
    /// The quantity reached zero or below and the line was dropped
    Removed,
    /// No line with that id
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CartStore {
    items: Vec<CartItem>,
    discount: Discount,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from previously persisted state
    pub fn from_parts(items: Vec<CartItem>, discount: Discount) -> Self {
        Self { items, discount }
    }

    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn discount(&self) -> &Discount {
        &self.discount
    }

    pub fn find(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of quantities across all lines, saturating at `u32::MAX`
    pub fn item_count(&self) -> u32 {
        self.items
            .iter()
            .fold(0u32, |count, item| count.saturating_add(item.quantity))
    }

    pub fn totals(&self) -> Totals {
        calculate_totals(&self.items, &self.discount)
    }

    /// Add one unit of `product`. An existing line only gains quantity; its
    /// stored name and price are kept since catalog prices are fixed per id.
    /// Returns the line's quantity after the add.
    pub fn add_item(&mut self, product: Product) -> u32 {
        if let Some(existing) = self.items.iter_mut().find(|item| item.id == product.id) {
            existing.quantity = existing.quantity.saturating_add(1);
            if existing.price != product.price {
                debug!(
                    "Ignoring price {} for {}, keeping carted price {}",
                    product.price, product.id, existing.price
                );
            }
            return existing.quantity;
        }

        info!("Adding {} ({}) to cart", product.name, product.id);
        self.items.push(CartItem::from_product(product));
        1
    }

    /// Drop the line with `id`; returns it if it was present
    pub fn remove_item(&mut self, id: &str) -> Option<CartItem> {
        let position = self.items.iter().position(|item| item.id == id)?;
        let removed = self.items.remove(position);
        info!("Removed {} from cart", id);
        Some(removed)
    }

    /// Add `delta` to a line's quantity, removing the line if the result is
    /// zero or less. There is no upper bound.
    pub fn change_quantity(&mut self, id: &str, delta: i64) -> QuantityChange {
        let Some(position) = self.items.iter().position(|item| item.id == id) else {
            warn!("Quantity change for unknown cart item {}", id);
            return QuantityChange::NotFound;
        };

        let next = i64::from(self.items[position].quantity).saturating_add(delta);
        if next <= 0 {
            self.items.remove(position);
            info!("Quantity of {} reached zero, removed from cart", id);
            return QuantityChange::Removed;
        }

        let quantity = u32::try_from(next).unwrap_or(u32::MAX);
        self.items[position].quantity = quantity;
        debug!("Quantity of {} is now {}", id, quantity);
        QuantityChange::Updated(quantity)
    }

    /// Apply a discount code from raw input.
    ///
    /// Blank input is rejected without touching the current discount. An
    /// unknown code clears whatever discount was active.
    pub fn set_discount(&mut self, input: &str, table: &DiscountTable) -> Result<u8, CartError> {
        let code = DiscountTable::normalize(input);
        if code.is_empty() {
            return Err(CartError::EmptyDiscountCode);
        }

        match table.lookup(&code) {
            Some(percentage) => {
                info!("Applied discount {} ({}%)", code, percentage);
                self.discount = Discount::new(code, percentage);
                Ok(percentage)
            }
            None => {
                warn!("Rejected discount code {}", code);
                self.discount = Discount::none();
                Err(CartError::InvalidDiscountCode(code))
            }
        }
    }

    pub fn clear_discount(&mut self) {
        self.discount = Discount::none();
    }

    pub fn clear_cart(&mut self) {
        self.items.clear();
    }
}
