use thiserror::Error;

/// Rejections raised by cart operations. The display text is the message
/// shown to the visitor.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CartError {
    #[error("Enter a discount code to apply.")]
    EmptyDiscountCode,
    #[error("This code is not valid for this demo checkout.")]
    InvalidDiscountCode(String),
    #[error("Add at least one trip before completing booking.")]
    EmptyCart,
}

/// Contact form validation failures
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingFields,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}
