//! Evaluation verdict types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Why a coupon was refused
///
/// Every refusal carries exactly one of these. `InvalidCode` is produced by
/// the caller's lookup layer when the code does not exist; the engine itself
/// never emits it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "code", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Ineligibility {
    /// Coupon status is not ACTIVE
    Inactive,
    /// Current time precedes `starts_at`
    NotStarted,
    /// Current time is after `ends_at`
    Expired,
    /// Full cart subtotal is below `min_cart_subtotal`
    BelowMinimum { shortfall: Decimal },
    /// Scope resolves to zero eligible subtotal, or computed discount is zero
    NotApplicable,
    /// Global or per-user redemption limit exhausted
    LimitReached,
    /// User not in the eligible set, or coupon is first-order-only
    NotEligible,
    /// Coupon code does not exist (caller lookup layer only)
    InvalidCode,
}

impl Ineligibility {
    /// Customer-facing message for this refusal
    pub fn message(&self) -> String {
        match self {
            Self::Inactive => "Coupon not active".to_string(),
            Self::NotStarted => "Coupon not started yet".to_string(),
            Self::Expired => "Coupon expired".to_string(),
            Self::BelowMinimum { shortfall } => {
                format!("Add ₹{shortfall} more to use this coupon")
            }
            Self::NotApplicable => "Not applicable on these items".to_string(),
            Self::LimitReached => "Coupon usage limit reached".to_string(),
            Self::NotEligible => "Coupon not available for this account".to_string(),
            Self::InvalidCode => "Invalid code".to_string(),
        }
    }
}

/// Output of one coupon evaluation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscountResult {
    pub eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Ineligibility>,
    /// Sum of in-scope line subtotals
    pub scope_subtotal: Decimal,
    /// Computed discount, `0 <= discount_amount <= scope_subtotal`
    pub discount_amount: Decimal,
}

impl DiscountResult {
    /// Eligible verdict with the computed amounts
    pub fn granted(scope_subtotal: Decimal, discount_amount: Decimal) -> Self {
        Self {
            eligible: true,
            reason: None,
            scope_subtotal,
            discount_amount,
        }
    }

    /// Ineligible verdict; amounts are zero
    pub fn rejected(reason: Ineligibility) -> Self {
        Self {
            eligible: false,
            reason: Some(reason),
            scope_subtotal: Decimal::ZERO,
            discount_amount: Decimal::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_granted() {
        let r = DiscountResult::granted(Decimal::new(100000, 2), Decimal::new(10000, 2));
        assert!(r.eligible);
        assert!(r.reason.is_none());
        assert_eq!(r.discount_amount, Decimal::new(10000, 2));
    }

    #[test]
    fn test_rejected_zeroes_amounts() {
        let r = DiscountResult::rejected(Ineligibility::NotApplicable);
        assert!(!r.eligible);
        assert_eq!(r.scope_subtotal, Decimal::ZERO);
        assert_eq!(r.discount_amount, Decimal::ZERO);
    }

    #[test]
    fn test_reason_serialization() {
        let r = DiscountResult::rejected(Ineligibility::BelowMinimum {
            shortfall: Decimal::new(20000, 2),
        });
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["reason"]["code"], "BELOW_MINIMUM");
        assert_eq!(json["reason"]["shortfall"], "200.00");

        let back: DiscountResult = serde_json::from_value(json).unwrap();
        assert_eq!(r, back);
    }

    #[test]
    fn test_reason_omitted_when_eligible() {
        let r = DiscountResult::granted(Decimal::TEN, Decimal::ONE);
        let json = serde_json::to_value(&r).unwrap();
        assert!(json.get("reason").is_none());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Ineligibility::BelowMinimum {
                shortfall: Decimal::new(20000, 2)
            }
            .message(),
            "Add ₹200.00 more to use this coupon"
        );
        assert_eq!(Ineligibility::InvalidCode.message(), "Invalid code");
    }
}
