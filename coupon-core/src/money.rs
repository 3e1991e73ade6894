//! Money helpers using rust_decimal for precision
//!
//! All monetary amounts stay `Decimal` end to end. Rounding is 2 decimal
//! places, half-up, applied once at final results — never at intermediate
//! steps.

use rust_decimal::prelude::*;

/// Rounding for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed unit price per line (₹1,000,000)
pub const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Maximum allowed quantity per line
pub const MAX_QUANTITY: i32 = 9999;

/// Round a monetary value to currency precision
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up() {
        // 0.005 rounds up to 0.01 (half-up rounding)
        assert_eq!(round_money(Decimal::new(5, 3)), Decimal::new(1, 2));
        assert_eq!(round_money(Decimal::new(10005, 3)), Decimal::new(1001, 2));
    }

    #[test]
    fn test_round_half_down_stays() {
        // 0.004 rounds down to 0.00
        assert_eq!(round_money(Decimal::new(4, 3)), Decimal::ZERO);
    }

    #[test]
    fn test_round_preserves_exact_values() {
        let exact = Decimal::new(12345, 2); // 123.45
        assert_eq!(round_money(exact), exact);
    }
}
