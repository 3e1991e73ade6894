//! Contract-violation errors
//!
//! These fire only on malformed caller input — a negative price or an
//! out-of-range percent is an upstream data-integrity bug, not a user-facing
//! business condition. Business-rule failures are never errors; they are
//! reported through `DiscountResult`.

use thiserror::Error;

/// Error type for caller contract violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CouponError {
    /// Quantity must be positive and within bounds
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Monetary amount is negative or out of bounds
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Percent value outside (0, 100]
    #[error("invalid percent value: {0}")]
    InvalidPercent(String),

    /// Discount cap is negative or set on a non-percent coupon
    #[error("invalid discount cap: {0}")]
    InvalidCap(String),
}

/// Result type for coupon operations
pub type CouponResult<T> = Result<T, CouponError>;
