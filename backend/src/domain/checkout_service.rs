//! Simulated booking completion. No order record is created anywhere.

use log::info;
use shared::CheckoutReceipt;

use super::cart_store::CartStore;
use super::errors::CartError;

/// Finish the booking: compute the total, then empty the cart and drop the
/// discount. An empty cart is rejected and left untouched.
pub fn complete_checkout(store: &mut CartStore) -> Result<CheckoutReceipt, CartError> {
    if store.is_empty() {
        return Err(CartError::EmptyCart);
    }

    let receipt = CheckoutReceipt {
        total: store.totals().total,
        item_count: store.item_count(),
    };

    store.clear_cart();
    store.clear_discount();
    info!("Checkout completed: {} travelers, total {:.2}", receipt.item_count, receipt.total);

    Ok(receipt)
}
