use serde::{Deserialize, Serialize};
use std::fmt;

/// A bookable travel package as advertised on a package card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier, stable per package
    pub id: String,
    /// Display name of the package
    pub name: String,
    /// Price per traveler
    pub price: f64,
}

impl Product {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
        }
    }
}

/// One rendered line of the cart list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLineView {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// e.g. "2 travelers • ₹1,000.00 each"
    pub meta: String,
    /// Formatted price × quantity
    pub line_total: String,
}

/// Everything a projection layer needs to draw the cart and its totals.
///
/// All money values are already formatted; the raw figures are kept
/// alongside for projections that want to do their own formatting.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CartView {
    pub lines: Vec<CartLineView>,
    /// Sum of quantities, shown on the cart badge
    pub item_count: u32,
    pub is_empty: bool,
    pub subtotal: String,
    /// Discount line, rendered with a leading minus sign
    pub discount: String,
    pub total: String,
    pub discount_code: Option<String>,
    pub raw_total: f64,
}

/// Severity of a transient notification or inline message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Info,
    Success,
    Error,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotificationKind::Info => write!(f, "info"),
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
        }
    }
}

/// A short-lived toast message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Ticket issued by the notification center; only the latest ticket
    /// may dismiss the visible toast
    pub ticket: u64,
    pub message: String,
    pub kind: NotificationKind,
}

/// Inline message shown under the discount code field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountFeedback {
    pub message: String,
    pub kind: NotificationKind,
}

/// Raw contact form input as typed by the visitor
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Plain-text file produced from a valid contact submission.
/// Never uploaded; the projection offers it as a download.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactArtifact {
    pub file_name: String,
    pub content: String,
}

/// Summary of a simulated booking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutReceipt {
    pub total: f64,
    pub item_count: u32,
}
