use serde::{Deserialize, Serialize};
use shared::Product;

/// One line of the cart. The persisted shape is `{id, name, price, quantity}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Always at least 1; a line that would drop to zero is removed instead
    pub quantity: u32,
}

impl CartItem {
    /// A fresh line for a product added for the first time
    pub fn from_product(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            price: product.price,
            quantity: 1,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Derived figures; recomputed on every read and never persisted
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub subtotal: f64,
    pub discount_amount: f64,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_product_starts_at_one() {
        let item = CartItem::from_product(Product::new("p1", "Bali Escape", 1000.0));
        assert_eq!(item.quantity, 1);
        assert_eq!(item.id, "p1");
    }

    #[test]
    fn test_persisted_shape() {
        let item = CartItem {
            id: "p1".to_string(),
            name: "Bali Escape".to_string(),
            price: 1000.0,
            quantity: 2,
        };
        let json = serde_json::to_string(&item).unwrap();
        assert_eq!(json, r#"{"id":"p1","name":"Bali Escape","price":1000.0,"quantity":2}"#);
        assert_eq!(item.line_total(), 2000.0);
    }
}
