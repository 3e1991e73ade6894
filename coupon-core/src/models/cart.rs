//! Cart Line Model

use crate::error::CouponError;
use crate::money::{MAX_QUANTITY, MAX_UNIT_PRICE, round_money};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced quantity of a purchasable unit, snapshotted from the host cart
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub product_id: i64,
    /// Variant is optional but typically present
    pub variant_id: Option<i64>,
    /// Ancestor chain from the product's category up to the root
    #[serde(default)]
    pub category_ids: Vec<i64>,
    pub unit_price: Decimal,
    pub quantity: i32,
}

impl CartLine {
    /// Build a validated line
    pub fn new(
        product_id: i64,
        variant_id: Option<i64>,
        category_ids: Vec<i64>,
        unit_price: Decimal,
        quantity: i32,
    ) -> Result<Self, CouponError> {
        let line = Self {
            product_id,
            variant_id,
            category_ids,
            unit_price,
            quantity,
        };
        line.check()?;
        Ok(line)
    }

    /// Validate a line received as a plain struct (same rules as [`CartLine::new`])
    pub fn check(&self) -> Result<(), CouponError> {
        if self.unit_price < Decimal::ZERO {
            return Err(CouponError::InvalidAmount(format!(
                "unit_price must be non-negative, got {}",
                self.unit_price
            )));
        }
        if self.unit_price > MAX_UNIT_PRICE {
            return Err(CouponError::InvalidAmount(format!(
                "unit_price exceeds maximum allowed ({}), got {}",
                MAX_UNIT_PRICE, self.unit_price
            )));
        }
        if self.quantity <= 0 {
            return Err(CouponError::InvalidQuantity(format!(
                "quantity must be positive, got {}",
                self.quantity
            )));
        }
        if self.quantity > MAX_QUANTITY {
            return Err(CouponError::InvalidQuantity(format!(
                "quantity exceeds maximum allowed ({}), got {}",
                MAX_QUANTITY, self.quantity
            )));
        }
        Ok(())
    }

    /// Line subtotal, always recomputed from `unit_price * quantity`
    pub fn line_subtotal(&self) -> Decimal {
        round_money(self.unit_price * Decimal::from(self.quantity))
    }
}

/// Full cart subtotal: per-line subtotals summed, no additional rounding
pub fn cart_subtotal(lines: &[CartLine]) -> Decimal {
    lines.iter().map(CartLine::line_subtotal).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_line(unit_price: Decimal, quantity: i32) -> CartLine {
        CartLine::new(1, Some(10), vec![100], unit_price, quantity).unwrap()
    }

    #[test]
    fn test_line_subtotal_recomputed() {
        let line = make_line(Decimal::new(50000, 2), 2); // 500.00 x 2
        assert_eq!(line.line_subtotal(), Decimal::new(100000, 2));
    }

    #[test]
    fn test_line_subtotal_rounds_half_up() {
        // 33.335 * 1 = 33.335 → 33.34
        let line = make_line(Decimal::new(33335, 3), 1);
        assert_eq!(line.line_subtotal(), Decimal::new(3334, 2));
    }

    #[test]
    fn test_rejects_negative_price() {
        let err = CartLine::new(1, None, vec![], Decimal::new(-100, 2), 1).unwrap_err();
        assert!(matches!(err, CouponError::InvalidAmount(_)));
    }

    #[test]
    fn test_rejects_non_positive_quantity() {
        let err = CartLine::new(1, None, vec![], Decimal::ONE, 0).unwrap_err();
        assert!(matches!(err, CouponError::InvalidQuantity(_)));
        let err = CartLine::new(1, None, vec![], Decimal::ONE, -3).unwrap_err();
        assert!(matches!(err, CouponError::InvalidQuantity(_)));
    }

    #[test]
    fn test_rejects_out_of_bounds() {
        let err = CartLine::new(1, None, vec![], Decimal::new(2_000_000, 0), 1).unwrap_err();
        assert!(matches!(err, CouponError::InvalidAmount(_)));
        let err = CartLine::new(1, None, vec![], Decimal::ONE, 10_000).unwrap_err();
        assert!(matches!(err, CouponError::InvalidQuantity(_)));
    }

    #[test]
    fn test_cart_subtotal_sums_rounded_lines() {
        let lines = vec![
            make_line(Decimal::new(30000, 2), 1), // 300.00
            make_line(Decimal::new(70000, 2), 1), // 700.00
        ];
        assert_eq!(cart_subtotal(&lines), Decimal::new(100000, 2));
    }

    #[test]
    fn test_per_line_rounding_drift_within_one_cent() {
        // Per-line rounding, then summing, stays within one cent of rounding
        // the raw total once
        let lines = vec![
            make_line(Decimal::new(333, 3), 1), // 0.333 → 0.33
            make_line(Decimal::new(333, 3), 1),
            make_line(Decimal::new(333, 3), 1),
        ];
        let summed = cart_subtotal(&lines); // 0.99
        let raw_total = round_money(Decimal::new(999, 3)); // 1.00
        assert!((summed - raw_total).abs() <= Decimal::new(1, 2));
    }

    #[test]
    fn test_cart_subtotal_empty() {
        assert_eq!(cart_subtotal(&[]), Decimal::ZERO);
    }

    #[test]
    fn test_serde_roundtrip() {
        let line = make_line(Decimal::new(9999, 2), 3);
        let json = serde_json::to_string(&line).unwrap();
        let back: CartLine = serde_json::from_str(&json).unwrap();
        assert_eq!(line, back);
    }

    #[test]
    fn test_category_ids_default_empty() {
        let json = r#"{
            "product_id": 1,
            "variant_id": null,
            "unit_price": "10.00",
            "quantity": 1
        }"#;
        let line: CartLine = serde_json::from_str(json).unwrap();
        assert!(line.category_ids.is_empty());
    }
}
