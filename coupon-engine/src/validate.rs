//! Eligibility Validator
//!
//! Runs the full check pipeline for one coupon against one cart snapshot,
//! cheapest checks first. Business failures come back as `DiscountResult`
//! values; only malformed input is an `Err`.

use chrono::{DateTime, Utc};
use coupon_core::error::CouponError;
use coupon_core::models::{
    CartLine, Coupon, CouponScope, CouponStatus, DiscountResult, Ineligibility, cart_subtotal,
};
use coupon_core::money::round_money;
use rust_decimal::Decimal;

use crate::discount::calculate_discount;
use crate::scope::resolve_scope;

/// Redemption counters supplied by the caller's persistence layer
///
/// The engine only reads these. Recording a redemption — and the transactional
/// guarantees that prevent double-redemption under concurrent checkouts —
/// stays with the host.
#[derive(Debug, Clone, Default)]
pub struct UsageSnapshot {
    pub user_id: Option<i64>,
    /// Total redemptions across all users
    pub global_redemptions: u32,
    /// Redemptions by this user
    pub user_redemptions: u32,
    /// Whether this user has completed an order before
    pub has_prior_order: bool,
}

/// Validate a coupon against the cart
///
/// Check order: status → window → minimum subtotal (against the full cart,
/// not the scope) → scope resolution → discount math. First failing check
/// wins. Identical inputs always produce identical verdicts.
pub fn validate(
    coupon: &Coupon,
    lines: &[CartLine],
    now: DateTime<Utc>,
) -> Result<DiscountResult, CouponError> {
    run_checks(coupon, lines, now, None)
}

/// Validate including per-user and global usage limits
///
/// Same pipeline as [`validate`], with the usage checks inserted after the
/// window checks — they need no line scan.
pub fn validate_with_usage(
    coupon: &Coupon,
    lines: &[CartLine],
    now: DateTime<Utc>,
    usage: &UsageSnapshot,
) -> Result<DiscountResult, CouponError> {
    run_checks(coupon, lines, now, Some(usage))
}

/// Whether a previously-applied coupon should stay applied after a cart
/// mutation. Callers clear the selection when this returns false.
pub fn still_applicable(
    coupon: &Coupon,
    lines: &[CartLine],
    now: DateTime<Utc>,
) -> Result<bool, CouponError> {
    Ok(validate(coupon, lines, now)?.eligible)
}

fn run_checks(
    coupon: &Coupon,
    lines: &[CartLine],
    now: DateTime<Utc>,
    usage: Option<&UsageSnapshot>,
) -> Result<DiscountResult, CouponError> {
    coupon.check()?;
    for line in lines {
        line.check()?;
    }

    if coupon.status != CouponStatus::Active {
        return Ok(reject(coupon, Ineligibility::Inactive));
    }
    if let Some(starts) = coupon.starts_at
        && now < starts
    {
        return Ok(reject(coupon, Ineligibility::NotStarted));
    }
    if let Some(ends) = coupon.ends_at
        && now > ends
    {
        return Ok(reject(coupon, Ineligibility::Expired));
    }

    if let Some(usage) = usage
        && let Some(reason) = check_usage(coupon, usage)
    {
        return Ok(reject(coupon, reason));
    }

    // Minimum is evaluated against the full cart subtotal: a coupon requiring
    // ₹1000 of cart value is not satisfied by ₹1000 of eligible-only items
    // when other items exist
    let full_subtotal = cart_subtotal(lines);
    if let Some(min) = coupon.min_cart_subtotal
        && full_subtotal < min
    {
        let shortfall = round_money(min - full_subtotal);
        return Ok(reject(coupon, Ineligibility::BelowMinimum { shortfall }));
    }

    let resolution = resolve_scope(coupon, lines);
    if coupon.scope != CouponScope::Cart && resolution.subtotal <= Decimal::ZERO {
        return Ok(reject(coupon, Ineligibility::NotApplicable));
    }

    let discount_amount = calculate_discount(coupon, resolution.subtotal);
    if discount_amount <= Decimal::ZERO {
        return Ok(reject(coupon, Ineligibility::NotApplicable));
    }

    Ok(DiscountResult::granted(resolution.subtotal, discount_amount))
}

fn reject(coupon: &Coupon, reason: Ineligibility) -> DiscountResult {
    tracing::debug!(code = %coupon.code, reason = ?reason, "coupon rejected");
    DiscountResult::rejected(reason)
}

fn check_usage(coupon: &Coupon, usage: &UsageSnapshot) -> Option<Ineligibility> {
    if !coupon.eligible_users.is_empty() {
        match usage.user_id {
            Some(user_id) if coupon.eligible_users.contains(&user_id) => {}
            _ => return Some(Ineligibility::NotEligible),
        }
    }
    if coupon.first_order_only && usage.has_prior_order {
        return Some(Ineligibility::NotEligible);
    }
    if let Some(limit) = coupon.global_limit
        && usage.global_redemptions >= limit
    {
        return Some(Ineligibility::LimitReached);
    }
    if let Some(limit) = coupon.per_user_limit
        && usage.user_redemptions >= limit
    {
        return Some(Ineligibility::LimitReached);
    }
    None
}
