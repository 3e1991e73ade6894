//! Discount Calculator
//!
//! Computes the discount amount for a coupon against its scope subtotal.
//! Arithmetic stays in `Decimal`; rounding happens once on the final amount.

use coupon_core::models::{Coupon, DiscountType};
use coupon_core::money::round_money;
use rust_decimal::Decimal;

/// Compute the discount for a coupon against its scope subtotal
///
/// PERCENT: `scope_subtotal * value / 100`, capped by `max_discount_amount`
/// when set. FLAT: `min(value, scope_subtotal)`. The result never exceeds
/// the subtotal it is computed against.
pub fn calculate_discount(coupon: &Coupon, scope_subtotal: Decimal) -> Decimal {
    if scope_subtotal <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    match coupon.discount_type {
        DiscountType::Percent => {
            let mut raw = scope_subtotal * coupon.value / Decimal::ONE_HUNDRED;
            if let Some(cap) = coupon.max_discount_amount {
                raw = raw.min(cap);
            }
            round_money(raw).min(scope_subtotal)
        }
        DiscountType::Flat => round_money(coupon.value.min(scope_subtotal)),
    }
}
