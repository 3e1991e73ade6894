//! Coupon Model

use crate::error::CouponError;
use crate::money::round_money;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Discount type enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    Percent,
    Flat,
}

/// Coupon scope enum (cart-wide vs. targeted)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponScope {
    Cart,
    Products,
    Categories,
    Variants,
}

/// Coupon status enum
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CouponStatus {
    Active,
    Paused,
    Expired,
}

/// Coupon entity — an immutable snapshot of one promotional rule
///
/// Read once from the host coupon store and passed by reference into the
/// evaluation functions. The engine never creates, updates, or deletes
/// coupon records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Coupon {
    /// Unique, case-insensitive code (stored normalized)
    pub code: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: String,

    // === Discount ===
    pub discount_type: DiscountType,
    /// PERCENT: value in (0, 100]; FLAT: non-negative currency amount
    pub value: Decimal,
    /// Optional cap on the computed amount, PERCENT type only
    pub max_discount_amount: Option<Decimal>,

    // === Window & Status ===
    /// Window start, inclusive
    pub starts_at: Option<DateTime<Utc>>,
    /// Window end, inclusive
    pub ends_at: Option<DateTime<Utc>>,
    pub status: CouponStatus,

    // === Scope ===
    pub scope: CouponScope,
    /// Include lists: empty means unset. If any is non-empty for a targeted
    /// scope, membership is required (variants → products → categories).
    #[serde(default)]
    pub included_products: Vec<i64>,
    #[serde(default)]
    pub excluded_products: Vec<i64>,
    #[serde(default)]
    pub included_categories: Vec<i64>,
    #[serde(default)]
    pub excluded_categories: Vec<i64>,
    /// If set, ONLY these variants qualify
    #[serde(default)]
    pub included_variants: Vec<i64>,
    /// Variants to exclude even if product/category qualifies
    #[serde(default)]
    pub excluded_variants: Vec<i64>,

    // === Eligibility ===
    /// Threshold on the full cart subtotal, not the scope subtotal
    pub min_cart_subtotal: Option<Decimal>,
    #[serde(default)]
    pub first_order_only: bool,
    pub per_user_limit: Option<u32>,
    pub global_limit: Option<u32>,
    /// If non-empty, only these user IDs may redeem
    #[serde(default)]
    pub eligible_users: Vec<i64>,

    // === Visibility ===
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default = "default_true")]
    pub show_in_listing: bool,
}

fn default_true() -> bool {
    true
}

impl Coupon {
    /// Normalize a user-supplied code for lookup (uppercase, trimmed)
    pub fn normalize_code(code: &str) -> String {
        code.trim().to_uppercase()
    }

    /// Status + time window check, both bounds inclusive
    pub fn is_active_now(&self, at: DateTime<Utc>) -> bool {
        self.status == CouponStatus::Active && self.in_window(at)
    }

    /// Whether the time window alone admits `at` (ignores status)
    pub fn in_window(&self, at: DateTime<Utc>) -> bool {
        if let Some(starts) = self.starts_at
            && at < starts
        {
            return false;
        }
        if let Some(ends) = self.ends_at
            && at > ends
        {
            return false;
        }
        true
    }

    /// Whether any include list is set
    pub fn has_include_rules(&self) -> bool {
        !self.included_variants.is_empty()
            || !self.included_products.is_empty()
            || !self.included_categories.is_empty()
    }

    /// Display title, synthesized from the discount when not set
    pub fn display_title(&self) -> String {
        let title = self.title.trim();
        if !title.is_empty() {
            return title.to_string();
        }
        match self.discount_type {
            DiscountType::Percent => format!("{}% OFF", self.value.normalize()),
            DiscountType::Flat => format!("₹{} OFF", round_money(self.value)),
        }
    }

    /// Validate the definition before evaluation
    ///
    /// An out-of-range value or a cap on a FLAT coupon is a caller contract
    /// violation, not a business condition.
    pub fn check(&self) -> Result<(), CouponError> {
        match self.discount_type {
            DiscountType::Percent => {
                if self.value <= Decimal::ZERO || self.value > Decimal::ONE_HUNDRED {
                    return Err(CouponError::InvalidPercent(format!(
                        "percent value must be in (0, 100], got {}",
                        self.value
                    )));
                }
            }
            DiscountType::Flat => {
                if self.value < Decimal::ZERO {
                    return Err(CouponError::InvalidAmount(format!(
                        "flat value must be non-negative, got {}",
                        self.value
                    )));
                }
            }
        }
        if let Some(cap) = self.max_discount_amount {
            if self.discount_type != DiscountType::Percent {
                return Err(CouponError::InvalidCap(
                    "max_discount_amount applies only to PERCENT coupons".to_string(),
                ));
            }
            if cap < Decimal::ZERO {
                return Err(CouponError::InvalidCap(format!(
                    "max_discount_amount must be non-negative, got {cap}"
                )));
            }
        }
        Ok(())
    }
}
