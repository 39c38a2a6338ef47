//! # Domain Module
//!
//! Business rules of the cart, independent of any UI framework or storage
//! backend.
//!
//! ## Module Organization
//!
//! - **cart_store**: the cart lines and active discount, and every mutation on them
//! - **totals**: pure subtotal / discount / total derivation
//! - **currency**: the single money display rule
//! - **checkout_service**: simulated booking completion
//! - **contact_service**: contact form validation and the text artifact
//! - **notification**: toast tickets and supersede-on-show semantics
//! - **models**: cart items, discounts and the discount table
//!
//! ## Business Rules
//!
//! - One line per product id; adding again only bumps the quantity
//! - A line whose quantity would reach zero is removed
//! - Exactly one discount is active; an unknown code clears it
//! - The total is never negative

pub mod cart_store;
pub mod checkout_service;
pub mod contact_service;
pub mod currency;
pub mod errors;
pub mod models;
pub mod notification;
pub mod totals;

pub use cart_store::{CartStore, QuantityChange};
pub use checkout_service::complete_checkout;
pub use contact_service::ContactService;
pub use currency::{format_currency, format_deduction};
pub use errors::{CartError, ContactError};
pub use notification::NotificationCenter;
pub use totals::calculate_totals;
