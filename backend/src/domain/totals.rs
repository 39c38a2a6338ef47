//! Subtotal, discount and total derivation.

use super::models::{CartItem, Discount, Totals};

/// Derive totals from the current lines and discount.
///
/// `subtotal = Σ price × quantity`, the discount is a percentage of the
/// subtotal, and the total is floored at zero. A stored percentage outside
/// [0, 100] is clamped before use.
pub fn calculate_totals(items: &[CartItem], discount: &Discount) -> Totals {
    let subtotal: f64 = items.iter().map(CartItem::line_total).sum();

    let percentage = if discount.percentage.is_finite() {
        discount.percentage.clamp(0.0, 100.0)
    } else {
        0.0
    };
    let discount_amount = if percentage > 0.0 {
        subtotal * percentage / 100.0
    } else {
        0.0
    };

    Totals {
        subtotal,
        discount_amount,
        total: (subtotal - discount_amount).max(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Package {}", id),
            price,
            quantity,
        }
    }

    #[test]
    fn test_sky10_example() {
        let items = vec![item("p1", 1000.0, 2)];
        let totals = calculate_totals(&items, &Discount::new("SKY10", 10));
        assert_eq!(totals.subtotal, 2000.0);
        assert_eq!(totals.discount_amount, 200.0);
        assert_eq!(totals.total, 1800.0);
    }

    #[test]
    fn test_empty_cart_is_zero() {
        let totals = calculate_totals(&[], &Discount::new("WELCOME20", 20));
        assert_eq!(totals, Totals::default());
    }

    #[test]
    fn test_no_discount() {
        let items = vec![item("p1", 499.5, 1), item("p2", 250.0, 3)];
        let totals = calculate_totals(&items, &Discount::none());
        assert_eq!(totals.subtotal, 1249.5);
        assert_eq!(totals.discount_amount, 0.0);
        assert_eq!(totals.total, 1249.5);
    }

    #[test]
    fn test_subtotal_is_linear_in_quantity() {
        let base = vec![item("p1", 750.0, 2), item("p2", 120.0, 1)];
        let mut bumped = base.clone();
        bumped[0].quantity = 4;

        let before = calculate_totals(&base, &Discount::none()).subtotal;
        let after = calculate_totals(&bumped, &Discount::none()).subtotal;
        assert_eq!(after - before, 750.0 * 2.0);
    }

    #[test]
    fn test_total_never_negative_across_percentages() {
        let items = vec![item("p1", 333.33, 3)];
        for percentage in 0..=100u8 {
            let discount = Discount {
                code: Some("X".to_string()),
                percentage: f64::from(percentage),
            };
            let totals = calculate_totals(&items, &discount);
            assert!(totals.total >= 0.0);
            let expected = (totals.subtotal - totals.discount_amount).max(0.0);
            assert_eq!(totals.total, expected);
        }
    }

    #[test]
    fn test_out_of_range_percentage_is_clamped() {
        let items = vec![item("p1", 100.0, 1)];
        let discount = Discount {
            code: Some("BROKEN".to_string()),
            percentage: 250.0,
        };
        let totals = calculate_totals(&items, &discount);
        assert_eq!(totals.discount_amount, 100.0);
        assert_eq!(totals.total, 0.0);
    }
}
