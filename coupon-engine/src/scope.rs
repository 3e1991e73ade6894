//! Scope Resolver
//!
//! Decides which cart lines a coupon is allowed to discount. Exclusions are
//! checked before includes and always win: a line excluded by any rule is
//! never in scope, even when explicitly included.

use coupon_core::models::{CartLine, Coupon, CouponScope};
use rust_decimal::Decimal;

/// Lines surviving scope filtering, with their summed subtotal
#[derive(Debug, Clone)]
pub struct ScopeResolution<'a> {
    pub lines: Vec<&'a CartLine>,
    pub subtotal: Decimal,
}

/// True iff the coupon can apply to this line
///
/// Include lists are honored in priority order variants → products →
/// categories: the first non-empty list is authoritative, with no fallback
/// to the next. A coupon with no include lists is universal, restricted only
/// by exclusions.
pub fn line_in_scope(coupon: &Coupon, line: &CartLine) -> bool {
    // Exclusions first
    if let Some(variant_id) = line.variant_id
        && coupon.excluded_variants.contains(&variant_id)
    {
        return false;
    }
    if coupon.excluded_products.contains(&line.product_id) {
        return false;
    }
    if line
        .category_ids
        .iter()
        .any(|c| coupon.excluded_categories.contains(c))
    {
        return false;
    }

    // Includes: first non-empty list is authoritative
    if !coupon.included_variants.is_empty() {
        return match line.variant_id {
            Some(variant_id) => coupon.included_variants.contains(&variant_id),
            None => false,
        };
    }
    if !coupon.included_products.is_empty() {
        return coupon.included_products.contains(&line.product_id);
    }
    if !coupon.included_categories.is_empty() {
        return line
            .category_ids
            .iter()
            .any(|c| coupon.included_categories.contains(c));
    }

    // No include lists at all → universal coupon
    true
}

/// Resolve the lines visible to a coupon and their subtotal
///
/// CART scope sees every line; targeted scopes filter via [`line_in_scope`].
/// Per-line subtotals are rounded individually and summed without further
/// rounding. Pure over its inputs: no I/O, no mutation.
pub fn resolve_scope<'a>(coupon: &Coupon, lines: &'a [CartLine]) -> ScopeResolution<'a> {
    let in_scope: Vec<&CartLine> = match coupon.scope {
        CouponScope::Cart => lines.iter().collect(),
        _ => lines.iter().filter(|l| line_in_scope(coupon, l)).collect(),
    };
    let subtotal = in_scope.iter().map(|l| l.line_subtotal()).sum();
    ScopeResolution {
        lines: in_scope,
        subtotal,
    }
}
