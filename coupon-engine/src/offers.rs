//! Offer Listing
//!
//! Builds the "available offers" views: the public offers page, the cart
//! offers drawer, and the product-page targeted list. Pure over the supplied
//! coupon and cart snapshots; one evaluation path feeds every surface.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use coupon_core::error::CouponError;
use coupon_core::models::{CartLine, Coupon, CouponScope, Ineligibility};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::discount::calculate_discount;
use crate::scope::line_in_scope;
use crate::validate::validate;

/// Reference subtotal for the cart-independent savings hint
const REFERENCE_SUBTOTAL: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// One entry in an offers list
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Offer {
    pub code: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub savings_amount: Decimal,
    pub eligible: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<Ineligibility>,
    pub ends_at: Option<DateTime<Utc>>,
}

/// Coupons fit for public listing: visibility flags set and window-active
pub fn listable(coupons: &[Coupon], now: DateTime<Utc>) -> Vec<&Coupon> {
    coupons
        .iter()
        .filter(|c| c.is_public && c.show_in_listing && c.in_window(now))
        .collect()
}

/// Savings hint against a reference subtotal of 1000.00, for sorting a
/// listing when no cart exists yet
pub fn expected_savings(coupon: &Coupon) -> Decimal {
    calculate_discount(coupon, REFERENCE_SUBTOTAL)
}

/// Evaluate every coupon against the cart and rank the results:
/// eligible first, then biggest savings, then soonest-expiring
/// (open-ended windows last)
pub fn rank_offers(
    coupons: &[Coupon],
    lines: &[CartLine],
    now: DateTime<Utc>,
) -> Result<Vec<Offer>, CouponError> {
    let mut offers = coupons
        .iter()
        .map(|c| build_offer(c, lines, now))
        .collect::<Result<Vec<_>, _>>()?;
    sort_offers(&mut offers);
    Ok(offers)
}

/// Product-page targeting: only coupons explicitly mapped to this line's
/// product, variant, or category qualify. CART-scope coupons and coupons
/// without include rules never show on a product page.
pub fn pdp_targeted(coupon: &Coupon, line: &CartLine) -> bool {
    if coupon.scope == CouponScope::Cart {
        return false;
    }
    if !coupon.has_include_rules() {
        return false;
    }
    line_in_scope(coupon, line)
}

/// Offers for a single product-page line: the targeted subset, ranked
pub fn offers_for_line(
    coupons: &[Coupon],
    line: &CartLine,
    now: DateTime<Utc>,
) -> Result<Vec<Offer>, CouponError> {
    let lines = std::slice::from_ref(line);
    let mut offers = coupons
        .iter()
        .filter(|c| pdp_targeted(c, line))
        .map(|c| build_offer(c, lines, now))
        .collect::<Result<Vec<_>, _>>()?;
    sort_offers(&mut offers);
    Ok(offers)
}

fn build_offer(
    coupon: &Coupon,
    lines: &[CartLine],
    now: DateTime<Utc>,
) -> Result<Offer, CouponError> {
    let result = validate(coupon, lines, now)?;
    Ok(Offer {
        code: coupon.code.clone(),
        title: coupon.display_title(),
        description: coupon.notes.clone(),
        savings_amount: result.discount_amount,
        eligible: result.eligible,
        reason: result.reason,
        ends_at: coupon.ends_at,
    })
}

fn sort_offers(offers: &mut [Offer]) {
    offers.sort_by(|a, b| {
        b.eligible
            .cmp(&a.eligible)
            .then_with(|| b.savings_amount.cmp(&a.savings_amount))
            .then_with(|| cmp_expiry(a.ends_at, b.ends_at))
    });
}

fn cmp_expiry(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
