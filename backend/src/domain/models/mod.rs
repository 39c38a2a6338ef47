pub mod cart;
pub mod discount;

pub use cart::{CartItem, Totals};
pub use discount::{Discount, DiscountTable};
