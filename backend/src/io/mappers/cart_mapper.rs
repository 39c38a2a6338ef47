//! Maps the domain cart onto the `shared::CartView` DTO consumed by
//! projection layers.

use shared::{CartLineView, CartView};

use crate::domain::currency::{format_currency, format_deduction};
use crate::domain::models::CartItem;
use crate::domain::CartStore;

pub struct CartMapper;

impl CartMapper {
    pub fn to_view(store: &CartStore) -> CartView {
        let totals = store.totals();
        CartView {
            lines: store.items().iter().map(Self::to_line).collect(),
            item_count: store.item_count(),
            is_empty: store.is_empty(),
            subtotal: format_currency(totals.subtotal),
            discount: format_deduction(totals.discount_amount),
            total: format_currency(totals.total),
            discount_code: store.discount().code.clone(),
            raw_total: totals.total,
        }
    }

    pub fn to_line(item: &CartItem) -> CartLineView {
        let plural = if item.quantity > 1 { "s" } else { "" };
        CartLineView {
            id: item.id.clone(),
            name: item.name.clone(),
            quantity: item.quantity,
            meta: format!(
                "{} traveler{} • {} each",
                item.quantity,
                plural,
                format_currency(item.price)
            ),
            line_total: format_currency(item.line_total()),
        }
    }
}
